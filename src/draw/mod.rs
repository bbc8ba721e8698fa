//! Line and rectangle plotting

mod line;
mod rect;

pub use line::draw_line;
pub use rect::draw_rectangle;
