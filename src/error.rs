use std::fmt;

use thiserror::Error;

use crate::types::Orientation;

/// Error returned when a command cannot be applied to a canvas.
///
/// There is one kind of failure: every rejected command is terminal for that
/// command alone, and the message is what callers show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CanvasError {
    message: String,
}

impl CanvasError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn no_canvas() -> Self {
        Self::new("No Canvas presented to draw line on.")
    }

    pub(crate) fn line_will_not_fit(command: impl fmt::Display) -> Self {
        Self::new(format!("{command} line will not fit."))
    }

    pub(crate) fn unsupported_orientation(orientation: Orientation) -> Self {
        Self::new(format!("{orientation} lines not supported."))
    }

    pub(crate) fn rectangle_will_not_fit(command: impl fmt::Display) -> Self {
        Self::new(format!("{command} rectangle will not fit."))
    }

    pub(crate) fn fill_on_line(command: impl fmt::Display) -> Self {
        Self::new(format!("FloodFill starting point {command} is on a Line."))
    }

    pub(crate) fn fill_outside(command: impl fmt::Display) -> Self {
        Self::new(format!(
            "FloodFill starting point {command} is outside the canvas."
        ))
    }
}

/// Errors that can occur while parsing a textual command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty input provided
    #[error("Empty input")]
    EmptyInput,
    /// Leading letter is not a known command
    #[error("Unknown command '{tag}' (Suggestion: use one of C, L, R, B)")]
    UnknownCommand { tag: String },
    /// Known command with missing, extra or malformed arguments
    #[error("Invalid arguments for '{tag}' (Usage: {usage})")]
    InvalidArguments { tag: char, usage: &'static str },
    /// Fill colour that does not occupy exactly one terminal cell
    #[error("Colour '{colour}' must occupy exactly one cell")]
    InvalidColour { colour: char },
    /// Create with a side longer than the supported maximum
    #[error("Canvas {width}x{height} is too large (maximum side is {max})")]
    CanvasTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
}

/// Failure of one line fed to a [`Session`](crate::Session)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
