//! Color definitions and per-channel palettes
//!
//! Colors are RGB565, matching 16-bit embedded displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

// ============================================================================
// Face Defaults
// ============================================================================

pub const DEFAULT_FACE_COLOR: Rgb565 = Rgb565::YELLOW;
pub const DEFAULT_EYES_COLOR: Rgb565 = Rgb565::BLACK;
pub const DEFAULT_MOUTH_COLOR: Rgb565 = Rgb565::BLACK;
pub const DEFAULT_BORDER_COLOR: Rgb565 = Rgb565::BLACK;

// ============================================================================
// Channels
// ============================================================================

/// One independently colored part of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Face,
    Eyes,
    Mouth,
    Border,
}

impl ColorChannel {
    /// Every channel, in draw order
    pub const ALL: [ColorChannel; 4] = [
        ColorChannel::Face,
        ColorChannel::Border,
        ColorChannel::Eyes,
        ColorChannel::Mouth,
    ];
}

/// One color per [`ColorChannel`].
///
/// A face keeps three of these: the base set, the toggle set, and the set
/// currently used for painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelColors {
    pub face: Rgb565,
    pub eyes: Rgb565,
    pub mouth: Rgb565,
    pub border: Rgb565,
}

impl Default for ChannelColors {
    /// Yellow face with black features
    fn default() -> Self {
        Self {
            face: DEFAULT_FACE_COLOR,
            eyes: DEFAULT_EYES_COLOR,
            mouth: DEFAULT_MOUTH_COLOR,
            border: DEFAULT_BORDER_COLOR,
        }
    }
}

impl ChannelColors {
    pub fn get(&self, channel: ColorChannel) -> Rgb565 {
        match channel {
            ColorChannel::Face => self.face,
            ColorChannel::Eyes => self.eyes,
            ColorChannel::Mouth => self.mouth,
            ColorChannel::Border => self.border,
        }
    }

    pub fn set(&mut self, channel: ColorChannel, color: Rgb565) {
        match channel {
            ColorChannel::Face => self.face = color,
            ColorChannel::Eyes => self.eyes = color,
            ColorChannel::Mouth => self.mouth = color,
            ColorChannel::Border => self.border = color,
        }
    }
}
