//! Scanline flood fill
//!
//! Fills whole row spans at a time from a FIFO queue of pending cells. Each
//! cell is queued at most once.

use std::collections::{HashSet, VecDeque};
use std::ops::Range;

use crate::error::CanvasError;
use crate::grid::Canvas;
use crate::types::{DrawOptions, FloodFill};

/// A position in the canvas, border included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pos {
    x: usize,
    y: usize,
}

impl Pos {
    fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Pending fill work plus the set of every cell ever queued
struct FillQueue {
    pending: VecDeque<Pos>,
    queued: HashSet<Pos>,
}

impl FillQueue {
    fn new(start: Pos) -> Self {
        Self {
            pending: VecDeque::from([start]),
            queued: HashSet::from([start]),
        }
    }

    /// Queue a cell unless it has been queued before
    fn push(&mut self, pos: Pos) {
        if self.queued.insert(pos) {
            self.pending.push_back(pos);
        }
    }

    fn pop(&mut self) -> Option<Pos> {
        self.pending.pop_front()
    }
}

/// Repaint the region connected to the fill's starting cell.
///
/// Ink bounds the region; the border is never painted.
pub fn flood_fill(
    canvas: &Canvas,
    fill: &FloodFill,
    options: &DrawOptions,
) -> Result<Canvas, CanvasError> {
    let interior_x = 1..canvas.width().saturating_sub(1);
    let interior_y = 1..canvas.height().saturating_sub(1);
    if !interior_x.contains(&fill.x) || !interior_y.contains(&fill.y) {
        return Err(CanvasError::fill_outside(fill));
    }
    if canvas.get(fill.x, fill.y) == Some(options.ink) {
        return Err(CanvasError::fill_on_line(fill));
    }

    let mut next = canvas.clone();
    let spans = paint_region(&mut next, Pos::new(fill.x, fill.y), fill.colour, options.ink);
    tracing::trace!(%fill, spans, "flood fill finished");
    Ok(next)
}

/// Paint the span containing `seed` and every span reachable from it.
/// Returns the number of spans painted.
fn paint_region(canvas: &mut Canvas, seed: Pos, colour: char, ink: char) -> usize {
    let interior_y = 1..canvas.height().saturating_sub(1);
    let mut queue = FillQueue::new(seed);
    let mut spans = 0usize;

    while let Some(pos) = queue.pop() {
        // Painted by an earlier span on this row, whose neighbours were
        // already queued
        if pos != seed && canvas.get(pos.x, pos.y) == Some(colour) {
            continue;
        }
        let Some(xs) = span_at(canvas, pos, ink) else {
            continue;
        };
        canvas.fill_span(pos.y, xs.clone(), colour);
        spans += 1;

        for y in [pos.y - 1, pos.y + 1] {
            if !interior_y.contains(&y) {
                continue;
            }
            for x in xs.clone() {
                match canvas.get(x, y) {
                    Some(c) if c != ink && c != colour => queue.push(Pos::new(x, y)),
                    _ => {}
                }
            }
        }
    }
    spans
}

/// The run of non-ink cells on `pos.y` that contains `pos.x`, as a half-open
/// column range clamped to the interior.
fn span_at(canvas: &Canvas, pos: Pos, ink: char) -> Option<Range<usize>> {
    let row = canvas.row(pos.y)?;
    let interior_end = row.len().checked_sub(1)?;
    if pos.x == 0 || pos.x >= interior_end {
        return None;
    }

    let start = row[1..pos.x]
        .iter()
        .rposition(|&c| c == ink)
        .map_or(1, |i| i + 2);
    let end = row[pos.x + 1..interior_end]
        .iter()
        .position(|&c| c == ink)
        .map_or(interior_end, |i| pos.x + 1 + i);
    Some(start..end)
}
