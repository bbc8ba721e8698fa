//! textcanvas - Command-driven ASCII canvas
//!
//! A canvas is a bordered character grid. Commands create it, draw
//! horizontal/vertical lines and rectangle outlines in ink, and flood fill
//! regions bounded by ink. Every operation returns a new canvas.
//!
//! # Drawing Example
//! ```
//! use textcanvas::{apply_command, Command};
//!
//! let canvas = apply_command(&Command::create(4, 3), None).unwrap();
//! let canvas = apply_command(&Command::rectangle(1, 1, 3, 3), Some(&canvas)).unwrap();
//! let canvas = apply_command(&Command::flood_fill(4, 1, 'o'), Some(&canvas)).unwrap();
//! assert_eq!(
//!     canvas.to_string(),
//!     "------\n|XXXo|\n|X Xo|\n|XXXo|\n------"
//! );
//! ```
//!
//! # Errors Example
//! ```
//! use textcanvas::{apply_command, Command};
//!
//! let canvas = apply_command(&Command::create(3, 3), None).unwrap();
//! let err = apply_command(&Command::line(1, 1, 13, 1), Some(&canvas)).unwrap_err();
//! assert_eq!(err.to_string(), "Line(1,1,13,1) line will not fit.");
//! ```
//!
//! # Textual Commands Example
//! ```
//! use textcanvas::Session;
//!
//! let mut session = Session::default();
//! session.execute("C 3 1").unwrap();
//! let canvas = session.execute("L 1 1 2 1").unwrap().unwrap();
//! assert_eq!(canvas.to_string(), "-----\n|XX |\n-----");
//! ```

mod draw;
mod error;
mod fill;
mod fit;
mod grid;
mod parser;
mod session;
mod text;
mod types;

pub use error::{CanvasError, ParseError, SessionError};
pub use grid::Canvas;
pub use parser::{parse_command, MAX_DIMENSION};
pub use session::Session;
pub use text::is_single_cell;
pub use types::{Command, DrawOptions, FloodFill, Line, Orientation, Rectangle};

use draw::{draw_line, draw_rectangle};
use fill::flood_fill;

/// Apply a command to the current canvas with the default glyphs
///
/// # Arguments
/// * `command` - The command to apply
/// * `current` - The canvas to draw on; ignored by `Create`
///
/// # Returns
/// * `Ok(Canvas)` - The new canvas; `current` is left untouched
/// * `Err(CanvasError)` - Missing canvas, primitive does not fit, or invalid fill start
pub fn apply_command(
    command: &Command,
    current: Option<&Canvas>,
) -> Result<Canvas, CanvasError> {
    apply_command_with(command, current, &DrawOptions::default())
}

/// Apply a command to the current canvas using the given glyphs
///
/// An empty canvas (zero rows) counts as no canvas at all.
pub fn apply_command_with(
    command: &Command,
    current: Option<&Canvas>,
    options: &DrawOptions,
) -> Result<Canvas, CanvasError> {
    tracing::debug!(%command, "applying command");
    match command {
        Command::Create { width, height } => Ok(Canvas::bordered(*width, *height, options)),
        Command::Line(line) => draw_line(require_canvas(current)?, line, options),
        Command::Rectangle(rect) => draw_rectangle(require_canvas(current)?, rect, options),
        Command::FloodFill(fill) => flood_fill(require_canvas(current)?, fill, options),
    }
}

fn require_canvas(current: Option<&Canvas>) -> Result<&Canvas, CanvasError> {
    current
        .filter(|canvas| !canvas.is_empty())
        .ok_or_else(CanvasError::no_canvas)
}
