use super::line::draw_line;
use crate::error::CanvasError;
use crate::fit::rectangle_fits;
use crate::grid::Canvas;
use crate::types::{DrawOptions, Rectangle};

/// Draw a rectangle outline as four lines: top, bottom, left, right.
///
/// Corners are normalized first, so the fit check and the drawn edges always
/// describe the same box. Nothing is drawn unless the whole outline fits.
pub fn draw_rectangle(
    canvas: &Canvas,
    rect: &Rectangle,
    options: &DrawOptions,
) -> Result<Canvas, CanvasError> {
    let bounds = rect.normalized();
    if !rectangle_fits(canvas, &bounds) {
        return Err(CanvasError::rectangle_will_not_fit(rect));
    }

    let edges = [
        bounds.top_edge(),
        bounds.bottom_edge(),
        bounds.left_edge(),
        bounds.right_edge(),
    ];
    edges
        .iter()
        .try_fold(canvas.clone(), |acc, edge| draw_line(&acc, edge, options))
}
