// src/ui/mod.rs
//! Emo UI System - a small widget toolkit for embedded displays
//!
//! This module provides:
//! - Core capability traits for drawable, measurable, touchable and
//!   state-capturing elements
//! - Float geometry on `kurbo` types and pixel snapping
//! - A `Canvas` surface with a recording and a rasterizing implementation
//! - The emotional face widget and a text label
//! - Keyed instance state for suspend/resume

pub mod canvas;
pub mod components;
pub mod core;
pub mod geometry;
pub mod state;
pub mod styling;

/// Width of the target display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Height of the target display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;

// Re-export commonly used items
pub use canvas::{Canvas, DisplayCanvas, DrawCommand, DrawList};
pub use components::{EmoFace, EmoFaceConfig, EmoFaceState, Label, Mood, TextSize};
pub use core::{
    Action, DirtyRegion, Drawable, Measurable, PageId, StateCapturable, TouchEvent, TouchPoint,
    TouchResult, Touchable,
};
pub use geometry::{BezPath, PathEl, PointF, Rect};
pub use state::{CaptureError, InstanceState, RestoreError};
pub use styling::{ChannelColors, ColorChannel};
