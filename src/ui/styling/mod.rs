//! Styling for UI elements
//!
//! Color constants, the face defaults, and the per-channel palette used by
//! the face widget.

pub mod colors;

pub use colors::{
    COLOR_BACKGROUND, ChannelColors, ColorChannel, DEFAULT_BORDER_COLOR, DEFAULT_EYES_COLOR,
    DEFAULT_FACE_COLOR, DEFAULT_MOUTH_COLOR, WHITE,
};
