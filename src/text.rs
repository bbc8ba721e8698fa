//! Display width utilities for cell glyphs

use unicode_width::UnicodeWidthChar;

/// True if `c` occupies exactly one terminal column, so a canvas row keeps
/// its rendered width when the cell is painted with it.
pub fn is_single_cell(c: char) -> bool {
    UnicodeWidthChar::width(c) == Some(1)
}
