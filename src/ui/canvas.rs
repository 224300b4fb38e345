//! Drawing surfaces for float-geometry widgets
//!
//! [`Canvas`] is the surface a widget renders onto. Two implementations are
//! provided:
//! - [`DrawList`] records every command, which is what tests and diagnostics
//!   inspect.
//! - [`DisplayCanvas`] rasterizes onto any embedded-graphics `DrawTarget`,
//!   shifted to the widget's origin on the display.

use core::cmp::Ordering;
use core::convert::Infallible;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Ellipse, Line, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment,
};

extern crate alloc;
use alloc::vec::Vec;

use super::geometry::{
    BezPath, FLATTEN_TOLERANCE, PointF, Rect, ceil_px, flatten_contours, floor_px, round_px,
    to_pixel,
};

/// A surface that accepts float-geometry draw calls
pub trait Canvas {
    type Error;

    /// Fill a circle centered at `center`
    fn fill_circle(
        &mut self,
        center: PointF,
        radius: f64,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Stroke a circle; the stroke is centered on `radius`
    fn stroke_circle(
        &mut self,
        center: PointF,
        radius: f64,
        stroke_width: f64,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Fill the ellipse inscribed in `bounds`
    fn fill_oval(&mut self, bounds: Rect, color: Rgb565) -> Result<(), Self::Error>;

    /// Fill the interior of `path` using the even-odd rule
    fn fill_path(&mut self, path: &BezPath, color: Rgb565) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// Recording canvas
// ---------------------------------------------------------------------------

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: PointF,
        radius: f64,
        color: Rgb565,
    },
    StrokeCircle {
        center: PointF,
        radius: f64,
        stroke_width: f64,
        color: Rgb565,
    },
    FillOval {
        bounds: Rect,
        color: Rgb565,
    },
    FillPath {
        path: BezPath,
        color: Rgb565,
    },
}

/// Canvas that records draw calls in order instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    type Error = Infallible;

    fn fill_circle(
        &mut self,
        center: PointF,
        radius: f64,
        color: Rgb565,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: PointF,
        radius: f64,
        stroke_width: f64,
        color: Rgb565,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke_width,
            color,
        });
        Ok(())
    }

    fn fill_oval(&mut self, bounds: Rect, color: Rgb565) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillOval { bounds, color });
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgb565) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rasterizing canvas
// ---------------------------------------------------------------------------

/// Canvas that rasterizes onto an embedded-graphics display.
///
/// All coordinates are local to `origin`, which is added after rounding to
/// whole pixels.
pub struct DisplayCanvas<'a, D> {
    display: &'a mut D,
    origin: Point,
}

impl<'a, D> DisplayCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: &'a mut D, origin: Point) -> Self {
        Self { display, origin }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Snap the circle's bounding box corner rather than its center, so an
    /// odd diameter still starts on the same pixel as its bounds.
    fn circle_top_left(&self, center: PointF, radius: f64) -> Point {
        to_pixel(
            PointF::new(center.x - radius, center.y - radius),
            self.origin,
        )
    }
}

/// Diameter in whole pixels, never negative
fn diameter_px(radius: f64) -> u32 {
    round_px(radius * 2.0).max(0) as u32
}

impl<D> Canvas for DisplayCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn fill_circle(
        &mut self,
        center: PointF,
        radius: f64,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        Circle::new(self.circle_top_left(center, radius), diameter_px(radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.display)
    }

    fn stroke_circle(
        &mut self,
        center: PointF,
        radius: f64,
        stroke_width: f64,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(round_px(stroke_width).max(0) as u32)
            .stroke_alignment(StrokeAlignment::Center)
            .build();

        Circle::new(self.circle_top_left(center, radius), diameter_px(radius))
            .into_styled(style)
            .draw(&mut *self.display)
    }

    fn fill_oval(&mut self, bounds: Rect, color: Rgb565) -> Result<(), D::Error> {
        let top_left = to_pixel(bounds.origin(), self.origin);
        let size = Size::new(
            round_px(bounds.width()).max(0) as u32,
            round_px(bounds.height()).max(0) as u32,
        );

        Ellipse::new(top_left, size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.display)
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgb565) -> Result<(), D::Error> {
        let contours = flatten_contours(path, FLATTEN_TOLERANCE);
        fill_polygons(&contours, self.origin, color, &mut *self.display)
    }
}

/// Even-odd scanline fill of flattened contours.
///
/// Each pixel row is sampled through its center; spans between pairs of
/// edge crossings are drawn as horizontal lines. A pixel is covered when its
/// center lies inside the polygon.
fn fill_polygons<D: DrawTarget<Color = Rgb565>>(
    contours: &[Vec<PointF>],
    origin: Point,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for p in contours.iter().flatten() {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    if min_y > max_y {
        return Ok(());
    }

    let line_style = PrimitiveStyle::with_stroke(color, 1);
    let mut crossings: Vec<f64> = Vec::new();

    for row in floor_px(min_y)..=ceil_px(max_y) {
        let sample_y = row as f64 + 0.5;
        crossings.clear();

        for contour in contours {
            for (i, a) in contour.iter().enumerate() {
                let b = contour[(i + 1) % contour.len()];
                let spans_row = (a.y <= sample_y && sample_y < b.y)
                    || (b.y <= sample_y && sample_y < a.y);
                if spans_row {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
        }

        crossings.sort_unstable_by(|l, r| l.partial_cmp(r).unwrap_or(Ordering::Equal));

        for span in crossings.chunks_exact(2) {
            // Pixel x is covered when x + 0.5 lies in [span[0], span[1])
            let x_start = ceil_px(span[0] - 0.5);
            let x_end = ceil_px(span[1] - 0.5) - 1;
            if x_end >= x_start {
                let y = origin.y + row;
                Line::new(
                    Point::new(origin.x + x_start, y),
                    Point::new(origin.x + x_end, y),
                )
                .into_styled(line_style)
                .draw(display)?;
            }
        }
    }

    Ok(())
}
