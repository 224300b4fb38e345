// src/ui/components/label.rs
//! Single-line text label

use crate::ui::core::Drawable;
use crate::ui::styling::WHITE;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Maximum number of bytes a label holds; longer text is cut at a char boundary
pub const LABEL_CAPACITY: usize = 32;

/// Text size variants
///
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// Centered single-line text with an optional background
pub struct Label {
    bounds: Rectangle,
    text: heapless::String<LABEL_CAPACITY>,
    size: TextSize,
    color: Rgb565,
    background: Option<Rgb565>,
    dirty: bool,
}

impl Label {
    pub fn new(bounds: Rectangle, text: &str, size: TextSize) -> Self {
        Self {
            bounds,
            text: bounded(text),
            size,
            color: WHITE,
            background: None,
            dirty: true,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Fill the label bounds before drawing text, clearing the previous text
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background = Some(color);
        self
    }

    /// Update the displayed text.
    ///
    /// Marks the label dirty only if the text changed.
    pub fn set_text(&mut self, text: &str) {
        let new_text = bounded(text);
        if self.text != new_text {
            self.text = new_text;
            self.dirty = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }
}

fn bounded(text: &str) -> heapless::String<LABEL_CAPACITY> {
    let mut out = heapless::String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl Drawable for Label {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if let Some(background) = self.background {
            self.bounds
                .into_styled(PrimitiveStyle::with_fill(background))
                .draw(display)?;
        }

        let character_style = MonoTextStyle::new(self.size.font(), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.text, self.bounds.center(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
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

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(60, 20))
    }

    #[test]
    fn test_set_text_marks_dirty_only_on_change() {
        let mut label = Label::new(bounds(), "Happy", TextSize::Medium);
        label.mark_clean();

        label.set_text("Happy");
        assert!(!label.is_dirty());

        label.set_text("Sad");
        assert!(label.is_dirty());
        assert_eq!(label.text(), "Sad");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let long = "0123456789012345678901234567890123456789";
        let label = Label::new(bounds(), long, TextSize::Small);
        assert_eq!(label.text(), &long[..LABEL_CAPACITY]);
    }

    #[test]
    fn test_draw_fills_background_and_text() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        let label = Label::new(bounds(), "Sad", TextSize::Medium)
            .with_color(Rgb565::WHITE)
            .with_background(Rgb565::BLACK);
        label.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(Rgb565::BLACK));
        assert_eq!(display.affected_area(), bounds());
    }
}
