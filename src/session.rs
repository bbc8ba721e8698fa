use crate::apply_command_with;
use crate::error::SessionError;
use crate::grid::Canvas;
use crate::parser::parse_command;
use crate::types::{Command, DrawOptions};

/// Holds the current canvas and applies commands to it in order.
///
/// Starts out with the empty sentinel, so anything but a create command fails
/// until a canvas exists. A failed command leaves the current canvas as it was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    canvas: Canvas,
    options: DrawOptions,
}

impl Session {
    pub fn new(options: DrawOptions) -> Self {
        Self {
            canvas: Canvas::empty(),
            options,
        }
    }

    /// The current canvas (empty until the first create command)
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// Apply a parsed command and make its result current
    pub fn apply(&mut self, command: &Command) -> Result<&Canvas, SessionError> {
        let next = apply_command_with(command, Some(&self.canvas), &self.options)?;
        self.canvas = next;
        Ok(&self.canvas)
    }

    /// Parse and apply one line of input.
    ///
    /// Blank lines and `#` comments are skipped and yield `Ok(None)`.
    pub fn execute(&mut self, line: &str) -> Result<Option<&Canvas>, SessionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let command = parse_command(trimmed)?;
        self.apply(&command).map(Some)
    }
}
