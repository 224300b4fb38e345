// src/pages/page.rs
//! Core page abstraction for the UI page system.
//!
//! A [`Page`] owns its layout, child widgets and dirty tracking. The host
//! calls these methods in a well-defined order:
//!
//! 1. **`restore_state`**: at resume, before the first draw, if a saved
//!    bundle exists.
//! 2. **`on_activate`**: once, when the page becomes visible.
//! 3. **`handle_touch`**: for each touch event.
//! 4. **`draw_page`**: when `is_dirty()` is true.
//! 5. **`save_state`**: at suspend.
//! 6. **`on_deactivate`**: once, when the page goes away.

use crate::ui::core::{Action, PageId, TouchEvent};
use crate::ui::state::{CaptureError, InstanceState, RestoreError};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Trait that all UI pages must implement.
pub trait Page {
    /// Unique identifier used for navigation and lookup.
    fn id(&self) -> PageId;

    /// Human-readable title (may appear in headers or debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when this page is no longer the active page.
    fn on_deactivate(&mut self) {}

    /// Process a touch event and optionally return the triggered [`Action`].
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Render the page to the given display target.
    fn draw_page<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page has regions that need redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);

    /// Write everything that must survive a suspend into `state`.
    fn save_state(&self, _state: &mut InstanceState) -> Result<(), CaptureError> {
        Ok(())
    }

    /// Restore from a bundle written by [`Page::save_state`].
    fn restore_state(&mut self, _state: &InstanceState) -> Result<(), RestoreError> {
        Ok(())
    }
}
