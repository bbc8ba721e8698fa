//! Textual command syntax
//!
//! ```text
//! C <width> <height>
//! L <x1> <y1> <x2> <y2>
//! R <x1> <y1> <x2> <y2>
//! B <x> <y> <colour>
//! ```
//!
//! Command letters are case-insensitive; arguments are separated by
//! whitespace.

use winnow::ascii::{dec_uint, space0, space1};
use winnow::combinator::{eof, preceded, terminated};
use winnow::token::any;
use winnow::ModalResult;
use winnow::Parser;

use crate::error::ParseError;
use crate::text::is_single_cell;
use crate::types::{Command, FloodFill, Line, Rectangle};

const CREATE_USAGE: &str = "C <width> <height>";
const LINE_USAGE: &str = "L <x1> <y1> <x2> <y2>";
const RECTANGLE_USAGE: &str = "R <x1> <y1> <x2> <y2>";
const FILL_USAGE: &str = "B <x> <y> <colour>";

/// Largest interior width or height accepted from text
pub const MAX_DIMENSION: usize = 4096;

// ===== Winnow parsers =====
//
// Each parser starts right after the command letter.

/// Whitespace-separated unsigned integer argument
fn w_arg(input: &mut &str) -> ModalResult<usize> {
    preceded(space1, dec_uint).parse_next(input)
}

/// Whitespace-separated single character argument
fn w_glyph(input: &mut &str) -> ModalResult<char> {
    preceded(space1, any).parse_next(input)
}

fn w_create(input: &mut &str) -> ModalResult<Command> {
    let (width, height) = (w_arg, w_arg).parse_next(input)?;
    Ok(Command::Create { width, height })
}

fn w_corners(input: &mut &str) -> ModalResult<(usize, usize, usize, usize)> {
    (w_arg, w_arg, w_arg, w_arg).parse_next(input)
}

fn w_line(input: &mut &str) -> ModalResult<Command> {
    let (x1, y1, x2, y2) = w_corners(input)?;
    Ok(Command::Line(Line::new(x1, y1, x2, y2)))
}

fn w_rectangle(input: &mut &str) -> ModalResult<Command> {
    let (x1, y1, x2, y2) = w_corners(input)?;
    Ok(Command::Rectangle(Rectangle::new(x1, y1, x2, y2)))
}

fn w_fill(input: &mut &str) -> ModalResult<Command> {
    let (x, y, colour) = (w_arg, w_arg, w_glyph).parse_next(input)?;
    Ok(Command::FloodFill(FloodFill::new(x, y, colour)))
}

/// Run `parser` over the arguments, requiring nothing but trailing spaces after
fn parse_args(
    args: &str,
    tag: char,
    usage: &'static str,
    parser: fn(&mut &str) -> ModalResult<Command>,
) -> Result<Command, ParseError> {
    let mut input = args;
    terminated(parser, (space0, eof))
        .parse_next(&mut input)
        .map_err(|_| ParseError::InvalidArguments { tag, usage })
}

// ===== Main parse function =====

/// Parse one textual command such as `L 1 2 6 2` into a [`Command`]
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(ParseError::EmptyInput);
    };
    let args = chars.as_str();

    // The letter must stand alone: "Cx 1 2" is not a create command
    if args.chars().next().is_some_and(|c| !c.is_whitespace()) {
        let tag = trimmed.split_whitespace().next().unwrap_or(trimmed);
        return Err(ParseError::UnknownCommand {
            tag: tag.to_string(),
        });
    }

    let tag = first.to_ascii_uppercase();
    let command = match tag {
        'C' => parse_args(args, tag, CREATE_USAGE, w_create)?,
        'L' => parse_args(args, tag, LINE_USAGE, w_line)?,
        'R' => parse_args(args, tag, RECTANGLE_USAGE, w_rectangle)?,
        'B' => parse_args(args, tag, FILL_USAGE, w_fill)?,
        _ => {
            return Err(ParseError::UnknownCommand {
                tag: first.to_string(),
            })
        }
    };

    match command {
        Command::Create { width, height } if width > MAX_DIMENSION || height > MAX_DIMENSION => {
            return Err(ParseError::CanvasTooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        Command::FloodFill(fill) if !is_single_cell(fill.colour) => {
            return Err(ParseError::InvalidColour {
                colour: fill.colour,
            });
        }
        _ => {}
    }
    Ok(command)
}
