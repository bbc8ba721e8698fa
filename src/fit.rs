//! Fit predicates: does a primitive lie strictly inside the canvas border?
//!
//! All predicates expect normalized input (`x1 <= x2`, `y1 <= y2`).

use crate::grid::Canvas;
use crate::types::{Line, Rectangle};

/// Horizontal line on an interior row, ending before the right border
pub fn horizontal_fits(canvas: &Canvas, line: &Line) -> bool {
    line.y1 == line.y2
        && 0 < line.y1
        && line.y1 < canvas.height().saturating_sub(1)
        && 0 < line.x1
        && line.x2 < canvas.width().saturating_sub(1)
}

/// Vertical line on an interior column, ending above the bottom border
pub fn vertical_fits(canvas: &Canvas, line: &Line) -> bool {
    line.x1 == line.x2
        && 0 < line.x1
        && line.x1 < canvas.width().saturating_sub(1)
        && 0 < line.y1
        && line.y2 < canvas.height().saturating_sub(1)
}

/// All four edges share one bounding box, so checking the top and left
/// edges covers the other two.
pub fn rectangle_fits(canvas: &Canvas, rect: &Rectangle) -> bool {
    horizontal_fits(canvas, &rect.top_edge()) && vertical_fits(canvas, &rect.left_edge())
}
