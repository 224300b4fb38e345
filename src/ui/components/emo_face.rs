// src/ui/components/emo_face.rs
//! Emotional face widget
//!
//! A circular face that shows one of two moods. It is drawn from four
//! primitives, each painted with the current color of its channel:
//!
//! 1. a filled face circle
//! 2. an inset border ring
//! 3. two oval eyes
//! 4. a mouth made of two quadratic curves, picked by the mood
//!
//! All geometry is a fraction of the side length chosen in
//! [`Measurable::measure`], so the face scales to any square.
//!
//! # Palette toggling
//!
//! Every channel has a base color and a toggle color. One shared flag,
//! initially `true`, decides what the next activation paints with: a set flag
//! moves every channel to its toggle color, a cleared flag moves them back to
//! base. The flag flips after each activation, so all four channels always
//! move together.
//!
//! # Examples
//! ```ignore
//! let mut face = EmoFace::new(
//!     EmoFaceConfig::new()
//!         .with_mood(Mood::Sad)
//!         .with_face_color(Rgb565::RED)
//!         .with_face_toggle_color(Rgb565::BLUE),
//! );
//! let side = face.measure(200, 150);
//! face.set_origin(Point::new(10, 10));
//! face.draw(&mut display)?;
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::ui::canvas::{Canvas, DisplayCanvas};
use crate::ui::core::{
    Action, Drawable, Measurable, StateCapturable, TouchEvent, TouchPoint, TouchResult,
    Touchable,
};
use crate::ui::geometry::{BezPath, PointF, Rect};
use crate::ui::state::{CaptureError, InstanceState, RestoreError};
use crate::ui::styling::{
    ChannelColors, ColorChannel, DEFAULT_BORDER_COLOR, DEFAULT_EYES_COLOR, DEFAULT_FACE_COLOR,
    DEFAULT_MOUTH_COLOR,
};

// ============================================================================
// Constants
// ============================================================================

/// Border stroke width used when none (or an unusable one) is configured
pub const DEFAULT_BORDER_WIDTH: f32 = 4.0;

/// Side length before the first measure pass
pub const DEFAULT_SIZE_PX: u32 = 320;

/// Left eye bounding box as fractions of the side: left, top, right, bottom
const LEFT_EYE: [f64; 4] = [0.32, 0.33, 0.43, 0.50];

/// Right eye bounding box as fractions of the side: left, top, right, bottom
const RIGHT_EYE: [f64; 4] = [0.57, 0.33, 0.68, 0.50];

/// Mouth outline as fractions of the side.
///
/// The outline starts at the left corner, curves to the right corner and
/// curves back. Happy and sad use their own literal points; one is not a
/// reflection of the other.
struct MouthShape {
    corner_left: (f64, f64),
    upper_control: (f64, f64),
    corner_right: (f64, f64),
    lower_control: (f64, f64),
}

const HAPPY_MOUTH: MouthShape = MouthShape {
    corner_left: (0.22, 0.60),
    upper_control: (0.50, 0.80),
    corner_right: (0.78, 0.60),
    lower_control: (0.50, 0.90),
};

const SAD_MOUTH: MouthShape = MouthShape {
    corner_left: (0.22, 0.70),
    upper_control: (0.50, 0.50),
    corner_right: (0.78, 0.70),
    lower_control: (0.50, 0.60),
};

// ============================================================================
// Mood and state
// ============================================================================

/// Which mouth the face draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Happy,
    Sad,
}

impl Mood {
    /// Text shown for this mood
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
        }
    }
}

/// State captured across suspend/resume.
///
/// Only the mood is kept; the toggle flag and the current colors start over
/// from the configuration after a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoFaceState {
    pub mood: Mood,
}

// ============================================================================
// Configuration
// ============================================================================

/// Construction-time configuration.
///
/// Every field is optional. Unset colors fall back to the face defaults and
/// unset toggle colors fall back to the base color of the same channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmoFaceConfig {
    pub mood: Option<Mood>,
    pub face_color: Option<Rgb565>,
    pub eyes_color: Option<Rgb565>,
    pub mouth_color: Option<Rgb565>,
    pub border_color: Option<Rgb565>,
    /// Border stroke width in pixels; must be finite and positive
    pub border_width: Option<f32>,
    pub face_toggle_color: Option<Rgb565>,
    pub eyes_toggle_color: Option<Rgb565>,
    pub mouth_toggle_color: Option<Rgb565>,
    pub border_toggle_color: Option<Rgb565>,
    /// Action reported when the face is activated by touch
    pub action: Option<Action>,
}

impl EmoFaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_face_color(mut self, color: Rgb565) -> Self {
        self.face_color = Some(color);
        self
    }

    pub fn with_eyes_color(mut self, color: Rgb565) -> Self {
        self.eyes_color = Some(color);
        self
    }

    pub fn with_mouth_color(mut self, color: Rgb565) -> Self {
        self.mouth_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Rgb565) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_face_toggle_color(mut self, color: Rgb565) -> Self {
        self.face_toggle_color = Some(color);
        self
    }

    pub fn with_eyes_toggle_color(mut self, color: Rgb565) -> Self {
        self.eyes_toggle_color = Some(color);
        self
    }

    pub fn with_mouth_toggle_color(mut self, color: Rgb565) -> Self {
        self.mouth_toggle_color = Some(color);
        self
    }

    pub fn with_border_toggle_color(mut self, color: Rgb565) -> Self {
        self.border_toggle_color = Some(color);
        self
    }

    /// Set the action reported when the face is tapped
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    fn base_colors(&self) -> ChannelColors {
        ChannelColors {
            face: self.face_color.unwrap_or(DEFAULT_FACE_COLOR),
            eyes: self.eyes_color.unwrap_or(DEFAULT_EYES_COLOR),
            mouth: self.mouth_color.unwrap_or(DEFAULT_MOUTH_COLOR),
            border: self.border_color.unwrap_or(DEFAULT_BORDER_COLOR),
        }
    }

    fn toggle_colors(&self, base: &ChannelColors) -> ChannelColors {
        ChannelColors {
            face: self.face_toggle_color.unwrap_or(base.face),
            eyes: self.eyes_toggle_color.unwrap_or(base.eyes),
            mouth: self.mouth_toggle_color.unwrap_or(base.mouth),
            border: self.border_toggle_color.unwrap_or(base.border),
        }
    }

    fn resolved_border_width(&self) -> f32 {
        match self.border_width {
            Some(width) if width.is_finite() && width > 0.0 => width,
            Some(width) => {
                warn!(
                    "Ignoring border width {}, using {}",
                    width, DEFAULT_BORDER_WIDTH
                );
                DEFAULT_BORDER_WIDTH
            }
            None => DEFAULT_BORDER_WIDTH,
        }
    }
}

// ============================================================================
// Widget
// ============================================================================

/// Circular face widget with a mood and a toggleable palette
#[derive(Debug, Clone)]
pub struct EmoFace {
    origin: Point,
    size: u32,
    mood: Mood,
    border_width: f32,
    base: ChannelColors,
    toggle: ChannelColors,
    current: ChannelColors,
    toggled: bool,
    action: Option<Action>,
    dirty: bool,
}

impl EmoFace {
    /// Build a face from its configuration. Never fails.
    pub fn new(config: EmoFaceConfig) -> Self {
        let base = config.base_colors();
        let toggle = config.toggle_colors(&base);

        Self {
            origin: Point::zero(),
            size: DEFAULT_SIZE_PX,
            mood: config.mood.unwrap_or_default(),
            border_width: config.resolved_border_width(),
            base,
            toggle,
            current: base,
            toggled: true,
            action: config.action,
            dirty: true,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Store the mood and schedule a redraw, even if the mood is unchanged
    pub fn set_mood(&mut self, mood: Mood) {
        debug!("Face mood set to {:?}", mood);
        self.mood = mood;
        self.dirty = true;
    }

    /// Side length from the last measure pass
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Place the face's top-left corner on the display
    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.dirty = true;
        }
    }

    /// Colors used by the next render
    pub fn current_colors(&self) -> ChannelColors {
        self.current
    }

    pub fn base_colors(&self) -> ChannelColors {
        self.base
    }

    pub fn toggle_colors(&self) -> ChannelColors {
        self.toggle
    }

    /// Whether the next activation moves to the toggle colors
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Handle one tap: repaint every channel from the toggle or base set,
    /// flip the shared flag, and schedule a redraw.
    pub fn on_primary_activation(&mut self) {
        let source = if self.toggled { self.toggle } else { self.base };
        for channel in ColorChannel::ALL {
            self.current.set(channel, source.get(channel));
        }
        self.toggled = !self.toggled;
        self.dirty = true;

        debug!("Face activated, next tap goes to toggle colors: {}", self.toggled);
    }

    /// Mouth outline for the current mood and size
    pub fn mouth_path(&self) -> BezPath {
        let s = f64::from(self.size);
        let shape = match self.mood {
            Mood::Happy => &HAPPY_MOUTH,
            Mood::Sad => &SAD_MOUTH,
        };

        let scaled = |(x, y): (f64, f64)| PointF::new(s * x, s * y);

        let mut path = BezPath::new();
        path.move_to(scaled(shape.corner_left));
        path.quad_to(scaled(shape.upper_control), scaled(shape.corner_right));
        path.quad_to(scaled(shape.lower_control), scaled(shape.corner_left));
        path.close_path();
        path
    }

    /// Draw the face in local coordinates: face, border, eyes, mouth
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let s = f64::from(self.size);
        let radius = s / 2.0;
        let center = PointF::new(radius, radius);
        let border_width = f64::from(self.border_width);

        canvas.fill_circle(center, radius, self.current.face)?;

        // Inset ring so the stroke is not clipped at the canvas edge
        canvas.stroke_circle(
            center,
            radius - border_width,
            border_width,
            self.current.border,
        )?;

        canvas.fill_oval(scaled_rect(LEFT_EYE, s), self.current.eyes)?;
        canvas.fill_oval(scaled_rect(RIGHT_EYE, s), self.current.eyes)?;

        canvas.fill_path(&self.mouth_path(), self.current.mouth)
    }

    /// Write the captured state into `state` under `key`
    pub fn save_into(&self, state: &mut InstanceState, key: &str) -> Result<(), CaptureError> {
        state.put(key, &self.capture_state())
    }

    /// Restore from `state` if an entry exists under `key`.
    ///
    /// Returns whether anything was restored. A malformed entry is an error
    /// and leaves the face untouched.
    pub fn restore_from(
        &mut self,
        state: &InstanceState,
        key: &str,
    ) -> Result<bool, RestoreError> {
        match state.get::<EmoFaceState>(key)? {
            Some(saved) => {
                self.restore_state(saved);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn scaled_rect(fractions: [f64; 4], s: f64) -> Rect {
    Rect::new(
        s * fractions[0],
        s * fractions[1],
        s * fractions[2],
        s * fractions[3],
    )
}

impl Measurable for EmoFace {
    /// Always a square: the smaller of the two offered dimensions
    fn measure(&mut self, available_width: u32, available_height: u32) -> u32 {
        let side = available_width.min(available_height);
        if side != self.size {
            self.size = side;
            self.dirty = true;
        }
        debug!("Measured min width|height [square] -> {}", side);
        side
    }
}

impl Drawable for EmoFace {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut canvas = DisplayCanvas::new(display, self.origin);
        self.render(&mut canvas)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(self.size, self.size))
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for EmoFace {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            // One activation per release, never on press or drag
            TouchEvent::Release(point) if self.contains_point(point) => {
                self.on_primary_activation();
                match self.action {
                    Some(action) => TouchResult::Action(action),
                    None => TouchResult::Handled,
                }
            }
            TouchEvent::Press(point) if self.contains_point(point) => TouchResult::Handled,
            _ => TouchResult::NotHandled,
        }
    }
}

impl StateCapturable for EmoFace {
    type State = EmoFaceState;

    fn capture_state(&self) -> EmoFaceState {
        EmoFaceState { mood: self.mood }
    }

    fn restore_state(&mut self, state: EmoFaceState) {
        debug!("Restoring face mood {:?}", state.mood);
        self.mood = state.mood;
        self.current = self.base;
        self.toggled = true;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::{DrawCommand, DrawList};
    use crate::ui::geometry::PathEl;
    use embedded_graphics::mock_display::MockDisplay;

    fn recorded(face: &EmoFace) -> DrawList {
        let mut list = DrawList::new();
        face.render(&mut list).ok();
        list
    }

    fn happy_path(s: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((s * 0.22, s * 0.60));
        path.quad_to((s * 0.50, s * 0.80), (s * 0.78, s * 0.60));
        path.quad_to((s * 0.50, s * 0.90), (s * 0.22, s * 0.60));
        path.close_path();
        path
    }

    fn sad_path(s: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to((s * 0.22, s * 0.70));
        path.quad_to((s * 0.50, s * 0.50), (s * 0.78, s * 0.70));
        path.quad_to((s * 0.50, s * 0.60), (s * 0.22, s * 0.70));
        path.close_path();
        path
    }

    fn fully_toggled_config() -> EmoFaceConfig {
        EmoFaceConfig::new()
            .with_face_toggle_color(Rgb565::BLUE)
            .with_eyes_toggle_color(Rgb565::WHITE)
            .with_mouth_toggle_color(Rgb565::RED)
            .with_border_toggle_color(Rgb565::GREEN)
    }

    #[test]
    fn test_measure_is_min_of_offered_dimensions() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        for (w, h) in [(200, 300), (300, 200), (1, 1), (640, 640), (17, 1000)] {
            assert_eq!(face.measure(w, h), w.min(h));
            assert_eq!(face.size(), w.min(h));
            assert_eq!(face.bounds().size, Size::new(w.min(h), w.min(h)));
        }
    }

    #[test]
    fn test_defaults_render_happy_face() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.measure(200, 300);
        let s = 200.0_f64;

        let list = recorded(&face);
        let expected = [
            DrawCommand::FillCircle {
                center: PointF::new(100.0, 100.0),
                radius: 100.0,
                color: Rgb565::YELLOW,
            },
            DrawCommand::StrokeCircle {
                center: PointF::new(100.0, 100.0),
                radius: 96.0,
                stroke_width: 4.0,
                color: Rgb565::BLACK,
            },
            DrawCommand::FillOval {
                bounds: Rect::new(s * 0.32, s * 0.33, s * 0.43, s * 0.50),
                color: Rgb565::BLACK,
            },
            DrawCommand::FillOval {
                bounds: Rect::new(s * 0.57, s * 0.33, s * 0.68, s * 0.50),
                color: Rgb565::BLACK,
            },
            DrawCommand::FillPath {
                path: happy_path(s),
                color: Rgb565::BLACK,
            },
        ];

        assert_eq!(list.commands(), &expected[..]);
        assert_eq!(face.mood(), Mood::Happy);
    }

    #[test]
    fn test_first_activation_with_unset_toggles_keeps_colors() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        let before = face.current_colors();
        assert!(face.is_toggled());

        face.on_primary_activation();

        // Toggle colors default to base, so nothing visible changes
        assert_eq!(face.current_colors(), face.toggle_colors());
        assert_eq!(face.current_colors(), before);
        assert!(!face.is_toggled());
    }

    #[test]
    fn test_sad_face_with_custom_colors_toggles_face() {
        let mut face = EmoFace::new(
            EmoFaceConfig::new()
                .with_mood(Mood::Sad)
                .with_border_width(10.0)
                .with_face_color(Rgb565::RED)
                .with_face_toggle_color(Rgb565::BLUE),
        );
        face.measure(100, 100);

        let list = recorded(&face);
        assert_eq!(
            list.commands()[0],
            DrawCommand::FillCircle {
                center: PointF::new(50.0, 50.0),
                radius: 50.0,
                color: Rgb565::RED,
            }
        );
        assert_eq!(
            list.commands()[1],
            DrawCommand::StrokeCircle {
                center: PointF::new(50.0, 50.0),
                radius: 40.0,
                stroke_width: 10.0,
                color: Rgb565::BLACK,
            }
        );
        assert_eq!(
            list.commands()[4],
            DrawCommand::FillPath {
                path: sad_path(100.0),
                color: Rgb565::BLACK,
            }
        );

        face.on_primary_activation();
        assert_eq!(face.current_colors().face, Rgb565::BLUE);

        face.on_primary_activation();
        assert_eq!(face.current_colors().face, Rgb565::RED);
    }

    #[test]
    fn test_restore_applies_mood_but_keeps_own_colors() {
        let first = EmoFace::new(
            EmoFaceConfig::new()
                .with_mood(Mood::Sad)
                .with_face_color(Rgb565::RED),
        );
        let captured = first.capture_state();
        assert_eq!(captured, EmoFaceState { mood: Mood::Sad });

        let mut fresh = EmoFace::new(EmoFaceConfig::default());
        fresh.restore_state(captured);

        assert_eq!(fresh.mood(), Mood::Sad);
        assert_eq!(fresh.current_colors(), ChannelColors::default());
    }

    #[test]
    fn test_unset_toggle_matches_explicit_toggle_of_same_color() {
        let mut implicit = EmoFace::new(EmoFaceConfig::new().with_face_color(Rgb565::RED));
        let mut explicit = EmoFace::new(
            EmoFaceConfig::new()
                .with_face_color(Rgb565::GREEN)
                .with_face_toggle_color(Rgb565::RED),
        );

        implicit.on_primary_activation();
        explicit.on_primary_activation();

        for channel in ColorChannel::ALL {
            assert_eq!(
                implicit.current_colors().get(channel),
                explicit.current_colors().get(channel)
            );
        }
    }

    #[test]
    fn test_two_activations_restore_colors() {
        let mut face = EmoFace::new(fully_toggled_config());

        for _ in 0..3 {
            let before = face.current_colors();
            let flag = face.is_toggled();
            face.on_primary_activation();
            face.on_primary_activation();
            assert_eq!(face.current_colors(), before);
            assert_eq!(face.is_toggled(), flag);
        }
    }

    #[test]
    fn test_all_channels_move_together() {
        let mut face = EmoFace::new(fully_toggled_config());

        face.on_primary_activation();
        assert_eq!(face.current_colors(), face.toggle_colors());

        face.on_primary_activation();
        assert_eq!(face.current_colors(), face.base_colors());
    }

    #[test]
    fn test_capture_restore_keeps_mood_not_palette() {
        for mood in [Mood::Happy, Mood::Sad] {
            let mut face = EmoFace::new(fully_toggled_config().with_mood(mood));
            face.on_primary_activation();
            let captured = face.capture_state();

            face.restore_state(captured);

            assert_eq!(face.mood(), mood);
            // Only the mood crosses the boundary; the palette starts over
            assert_eq!(face.current_colors(), face.base_colors());
            assert!(face.is_toggled());
        }
    }

    #[test]
    fn test_set_mood_always_requests_redraw() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.mark_clean();
        assert!(!face.is_dirty());

        face.set_mood(Mood::Happy);
        assert!(face.is_dirty());

        face.mark_clean();
        face.set_mood(Mood::Sad);
        assert!(face.is_dirty());
        assert_eq!(face.mood(), Mood::Sad);
    }

    #[test]
    fn test_invalid_border_width_falls_back() {
        for width in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let face = EmoFace::new(EmoFaceConfig::new().with_border_width(width));
            assert_eq!(face.border_width(), DEFAULT_BORDER_WIDTH);
        }

        let face = EmoFace::new(EmoFaceConfig::new().with_border_width(2.5));
        assert_eq!(face.border_width(), 2.5);
    }

    #[test]
    fn test_mouth_path_follows_mood_and_size() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.measure(50, 80);
        assert_eq!(face.mouth_path(), happy_path(50.0));

        face.set_mood(Mood::Sad);
        let path = face.mouth_path();
        assert_eq!(path, sad_path(50.0));
        assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn test_release_inside_activates_and_reports_action() {
        let mut face = EmoFace::new(
            fully_toggled_config().with_action(Action::MoodSelected(Mood::Happy)),
        );
        face.measure(40, 40);
        face.set_origin(Point::new(10, 10));

        let inside = TouchPoint::new(20, 20);
        let outside = TouchPoint::new(100, 100);

        assert_eq!(face.handle_touch(TouchEvent::Press(inside)), TouchResult::Handled);
        assert_eq!(face.current_colors(), face.base_colors());

        assert_eq!(face.handle_touch(TouchEvent::Drag(inside)), TouchResult::NotHandled);
        assert_eq!(
            face.handle_touch(TouchEvent::Release(outside)),
            TouchResult::NotHandled
        );
        assert_eq!(face.current_colors(), face.base_colors());

        assert_eq!(
            face.handle_touch(TouchEvent::Release(inside)),
            TouchResult::Action(Action::MoodSelected(Mood::Happy))
        );
        assert_eq!(face.current_colors(), face.toggle_colors());
    }

    #[test]
    fn test_release_without_action_is_handled() {
        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.measure(40, 40);

        assert_eq!(
            face.handle_touch(TouchEvent::Release(TouchPoint::new(5, 5))),
            TouchResult::Handled
        );
        assert!(!face.is_toggled());
    }

    #[test]
    fn test_keyed_save_and_restore() {
        let mut state = InstanceState::new();
        let face = EmoFace::new(EmoFaceConfig::new().with_mood(Mood::Sad));
        face.save_into(&mut state, "face").unwrap();

        let bytes = state.to_bytes().unwrap();
        let state = InstanceState::from_bytes(&bytes).unwrap();

        let mut fresh = EmoFace::new(EmoFaceConfig::default());
        assert!(fresh.restore_from(&state, "face").unwrap());
        assert_eq!(fresh.mood(), Mood::Sad);
    }

    #[test]
    fn test_restore_without_entry_changes_nothing() {
        let state = InstanceState::new();
        let mut face = EmoFace::new(fully_toggled_config().with_mood(Mood::Sad));
        face.on_primary_activation();

        assert!(!face.restore_from(&state, "face").unwrap());
        assert_eq!(face.mood(), Mood::Sad);
        assert_eq!(face.current_colors(), face.toggle_colors());
    }

    #[test]
    fn test_malformed_restore_is_rejected() {
        let mut state = InstanceState::new();
        // Variant index 7 does not name a mood
        state.put("face", &7u8).unwrap();

        let mut face = EmoFace::new(EmoFaceConfig::new().with_mood(Mood::Sad));
        let err = face.restore_from(&state, "face").unwrap_err();

        assert!(matches!(err, RestoreError::Malformed { .. }));
        assert_eq!(face.mood(), Mood::Sad);
    }

    #[test]
    fn test_draw_rasterizes_default_face() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.measure(64, 64);
        face.draw(&mut display).unwrap();

        // Face between the eyes and above the mouth
        assert_eq!(display.get_pixel(Point::new(32, 32)), Some(Rgb565::YELLOW));
        assert_eq!(display.get_pixel(Point::new(32, 8)), Some(Rgb565::YELLOW));
        // Middle of the border ring, 28px above the center
        assert_eq!(display.get_pixel(Point::new(32, 4)), Some(Rgb565::BLACK));
        // Inside the left eye
        assert_eq!(display.get_pixel(Point::new(24, 26)), Some(Rgb565::BLACK));
        // Happy mouth sits low, sad mouth sits higher
        assert_eq!(display.get_pixel(Point::new(32, 46)), Some(Rgb565::BLACK));
        assert_eq!(display.get_pixel(Point::new(32, 40)), Some(Rgb565::YELLOW));
    }

    #[test]
    fn test_odd_side_draws_within_bounds() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let mut face = EmoFace::new(EmoFaceConfig::default());
        face.measure(63, 63);
        face.draw(&mut display).unwrap();

        let bounds = face.bounds();
        let area = display.affected_area();
        assert_eq!(area.top_left, bounds.top_left);
        assert_eq!(area.size, bounds.size);
        assert_eq!(display.get_pixel(Point::new(0, 31)), Some(Rgb565::YELLOW));
        assert_eq!(display.get_pixel(Point::new(63, 31)), None);
    }

    #[test]
    fn test_draw_rasterizes_sad_mouth_and_toggle_palette() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let mut face = EmoFace::new(
            EmoFaceConfig::new()
                .with_mood(Mood::Sad)
                .with_face_toggle_color(Rgb565::BLUE),
        );
        face.measure(64, 64);
        face.on_primary_activation();
        face.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(32, 8)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(32, 40)), Some(Rgb565::BLACK));
        assert_eq!(display.get_pixel(Point::new(32, 46)), Some(Rgb565::BLUE));
    }
}
