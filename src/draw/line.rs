use crate::error::CanvasError;
use crate::fit::{horizontal_fits, vertical_fits};
use crate::grid::Canvas;
use crate::types::{DrawOptions, Line, Orientation};

/// Plot a horizontal or vertical line in ink.
///
/// Endpoint order does not matter. Returns a new canvas in which only the
/// cells covered by the line differ from `canvas`.
pub fn draw_line(
    canvas: &Canvas,
    line: &Line,
    options: &DrawOptions,
) -> Result<Canvas, CanvasError> {
    let norm = line.normalized();
    match norm.orientation() {
        Orientation::Horizontal => {
            if !horizontal_fits(canvas, &norm) {
                return Err(CanvasError::line_will_not_fit(line));
            }
            let mut next = canvas.clone();
            for x in norm.x1..=norm.x2 {
                next.set(x, norm.y1, options.ink);
            }
            Ok(next)
        }
        Orientation::Vertical => {
            if !vertical_fits(canvas, &norm) {
                return Err(CanvasError::line_will_not_fit(line));
            }
            let mut next = canvas.clone();
            for y in norm.y1..=norm.y2 {
                next.set(norm.x1, y, options.ink);
            }
            Ok(next)
        }
        orientation @ Orientation::Diagonal => {
            Err(CanvasError::unsupported_orientation(orientation))
        }
    }
}
