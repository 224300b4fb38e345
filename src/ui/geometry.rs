//! Float geometry and pixel snapping for canvas drawing
//!
//! Widgets describe their shapes with `kurbo` types in floating point,
//! relative to their own size, and the canvas decides how to turn that into
//! pixels. Snapping goes through `libm` so it works without `std`.

use embedded_graphics::prelude::Point;
pub use kurbo::{BezPath, PathEl, Rect};

extern crate alloc;
use alloc::vec::Vec;

/// A `kurbo` point, named apart from the embedded-graphics pixel `Point`
pub type PointF = kurbo::Point;

/// Maximum distance in pixels between a curve and its flattened polyline
pub const FLATTEN_TOLERANCE: f64 = 0.1;

/// Round half away from zero to a whole pixel
pub fn round_px(v: f64) -> i32 {
    libm::round(v) as i32
}

/// Largest whole pixel not greater than `v`
pub fn floor_px(v: f64) -> i32 {
    libm::floor(v) as i32
}

/// Smallest whole pixel not less than `v`
pub fn ceil_px(v: f64) -> i32 {
    libm::ceil(v) as i32
}

/// Snap `p` to the nearest pixel and shift by `origin`
pub fn to_pixel(p: PointF, origin: Point) -> Point {
    Point::new(origin.x + round_px(p.x), origin.y + round_px(p.y))
}

/// Approximate `path` with polygons, one per contour.
///
/// Contours are implicitly closed, whether or not they end with
/// [`PathEl::ClosePath`]. Contours with fewer than two points are dropped.
pub fn flatten_contours(path: &BezPath, tolerance: f64) -> Vec<Vec<PointF>> {
    let mut contours = Vec::new();
    let mut current: Vec<PointF> = Vec::new();

    kurbo::flatten(path.elements().iter().copied(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() > 1 {
                contours.push(core::mem::take(&mut current));
            }
            current.clear();
            current.push(p);
        }
        PathEl::LineTo(p) => current.push(p),
        PathEl::ClosePath => {
            if current.len() > 1 {
                contours.push(core::mem::take(&mut current));
            }
            current.clear();
        }
        // flatten only emits moves, lines and closes
        _ => {}
    });

    if current.len() > 1 {
        contours.push(current);
    }

    contours
}
