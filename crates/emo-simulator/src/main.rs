//! Desktop simulator for the emo-view mood page.
//!
//! Renders the page in an SDL2 window via `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key   | Action                                  |
//! |-------|-----------------------------------------|
//! | S     | Suspend and resume through saved bytes  |
//! | Q/Esc | Quit                                    |
//!
//! Mouse button down and up are forwarded as touch press and release.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{info, warn};

use emo_view::pages::{MoodPage, Page};
use emo_view::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, InstanceState, TouchEvent, TouchPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

/// Save the page to bytes, drop it, and bring up a fresh page from those
/// bytes. A failed restore keeps the fresh page's defaults.
fn suspend_and_resume(page: &MoodPage) -> MoodPage {
    let mut resumed = MoodPage::new(screen_bounds());

    let mut state = InstanceState::new();
    let bytes = match page
        .save_state(&mut state)
        .and_then(|()| state.to_bytes())
    {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Save failed, resuming with defaults: {}", e);
            return resumed;
        }
    };
    info!("Suspended: {} bytes of state", bytes.len());

    match InstanceState::from_bytes(&bytes).and_then(|state| resumed.restore_state(&state)) {
        Ok(()) => info!("Resumed with feedback {:?}", resumed.feedback()),
        Err(e) => warn!("Restore failed, using defaults: {}", e),
    }
    resumed
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting emo-view simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: S=Suspend/Resume  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Emo Simulator", &output_settings);

    let mut page = MoodPage::new(screen_bounds());
    page.on_activate();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = display.clear(Rgb565::BLACK) {
        log::error!("Clear error: {:?}", e);
    }
    if let Err(e) = page.draw_page(&mut display) {
        log::error!("Draw error: {:?}", e);
    }
    Page::mark_clean(&mut page);
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::S => {
                        page.on_deactivate();
                        page = suspend_and_resume(&page);
                        page.on_activate();
                    }
                    _ => {}
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    page.handle_touch(TouchEvent::Press(touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if let Some(action) = page.handle_touch(TouchEvent::Release(touch_point(point)))
                    {
                        info!("Touch → action {:?}", action);
                    }
                }

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        if Page::is_dirty(&page) {
            if let Err(e) = page.draw_page(&mut display) {
                log::error!("Draw error: {:?}", e);
            }
            Page::mark_clean(&mut page);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
