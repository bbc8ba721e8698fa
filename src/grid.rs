use std::fmt;

use crate::types::DrawOptions;

/// Bordered 2D character grid.
///
/// Rows include the border, so a canvas created for a `w`x`h` interior is
/// `w + 2` cells wide and `h + 2` rows tall. Every row has the same width.
/// A canvas with zero rows is the empty sentinel.
///
/// There is no public way to change a canvas in place: drawing operations
/// return a new value and leave their input untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// The empty sentinel (zero rows)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a blank canvas with a `width`x`height` interior and a border.
    ///
    /// The whole grid is allocated up front; textual input is capped at
    /// [`MAX_DIMENSION`](crate::MAX_DIMENSION) per side before it gets here.
    pub fn bordered(width: usize, height: usize, options: &DrawOptions) -> Self {
        let outer_width = width.saturating_add(2);
        let edge = vec![options.horizontal_border; outer_width];
        let mut interior = Vec::with_capacity(outer_width);
        interior.push(options.vertical_border);
        interior.extend(std::iter::repeat(options.blank).take(width));
        interior.push(options.vertical_border);

        let mut rows = Vec::with_capacity(height.saturating_add(2));
        rows.push(edge.clone());
        rows.extend(std::iter::repeat(interior).take(height));
        rows.push(edge);
        Self { rows }
    }

    /// Build a canvas from rendered lines. Returns `None` if the lines differ
    /// in length.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Option<Self> {
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, border included
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows, border included
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Get character at given position
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Borrow one row, border included
    pub fn row(&self, y: usize) -> Option<&[char]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Set a character at given position (bounds-checked)
    pub(crate) fn set(&mut self, x: usize, y: usize, c: char) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = c;
        }
    }

    /// Set a run of cells on one row, `xs` clamped to the row
    pub(crate) fn fill_span(&mut self, y: usize, xs: std::ops::Range<usize>, c: char) {
        if let Some(row) = self.rows.get_mut(y) {
            let end = xs.end.min(row.len());
            let start = xs.start.min(end);
            row[start..end].fill(c);
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
