// src/ui/core.rs
//! Core UI traits and types for the Emo UI system

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::components::Mood;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
///
/// The input layer decides what counts as a tap. Elements treat a
/// `Release` inside their bounds as one activation.
#[derive(Debug, Clone, Copy)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Touch lifted at a point
    Release(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A face reporting the mood it stands for
    MoodSelected(Mood),
}

/// Page identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Mood,
}

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    /// Expand this dirty region to include another region
    pub fn expand_to_include(&mut self, other: Rectangle) {
        if !self.is_dirty {
            self.bounds = other;
            self.is_dirty = true;
        } else {
            let min_x = self.bounds.top_left.x.min(other.top_left.x);
            let min_y = self.bounds.top_left.y.min(other.top_left.y);

            let max_x = (self.bounds.top_left.x + self.bounds.size.width as i32)
                .max(other.top_left.x + other.size.width as i32);
            let max_y = (self.bounds.top_left.y + self.bounds.size.height as i32)
                .max(other.top_left.y + other.size.height as i32);

            self.bounds = Rectangle::new(
                Point::new(min_x, min_y),
                Size::new((max_x - min_x) as u32, (max_y - min_y) as u32),
            );
        }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for elements that pick their own size from the space offered
pub trait Measurable {
    /// Measure against the available space and return the chosen side length.
    ///
    /// The host must lay the element out at exactly the returned size.
    fn measure(&mut self, available_width: u32, available_height: u32) -> u32;
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

/// Trait for elements whose state survives a suspend/resume boundary
pub trait StateCapturable {
    /// Snapshot of the state that crosses the boundary
    type State;

    /// Capture the state at suspend time
    fn capture_state(&self) -> Self::State;

    /// Restore previously captured state, before the first render
    fn restore_state(&mut self, state: Self::State);
}
