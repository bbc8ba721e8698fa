use std::fmt;

/// Orientation of a straight segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant row (a single point counts as horizontal)
    Horizontal,
    /// Constant column
    Vertical,
    /// Anything else
    Diagonal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "Horizontal"),
            Orientation::Vertical => write!(f, "Vertical"),
            Orientation::Diagonal => write!(f, "Diagonal"),
        }
    }
}

/// A straight segment between two 1-based interior points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Line {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Same segment with `x1 <= x2` and `y1 <= y2`
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.y1 == self.y2 {
            Orientation::Horizontal
        } else if self.x1 == self.x2 {
            Orientation::Vertical
        } else {
            Orientation::Diagonal
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({},{},{},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// An axis-aligned rectangle outline given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Rectangle {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Same rectangle with the top-left corner first
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn top_edge(&self) -> Line {
        Line::new(self.x1, self.y1, self.x2, self.y1)
    }

    pub fn bottom_edge(&self) -> Line {
        Line::new(self.x1, self.y2, self.x2, self.y2)
    }

    pub fn left_edge(&self) -> Line {
        Line::new(self.x1, self.y1, self.x1, self.y2)
    }

    pub fn right_edge(&self) -> Line {
        Line::new(self.x2, self.y1, self.x2, self.y2)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({},{},{},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Request to repaint the region connected to `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloodFill {
    pub x: usize,
    pub y: usize,
    pub colour: char,
}

impl FloodFill {
    pub fn new(x: usize, y: usize, colour: char) -> Self {
        Self { x, y, colour }
    }
}

impl fmt::Display for FloodFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloodFill({},{},{})", self.x, self.y, self.colour)
    }
}

/// A drawing command. Coordinates are 1-based and address the canvas interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// New blank canvas with the given interior size
    Create { width: usize, height: usize },
    /// Horizontal or vertical line
    Line(Line),
    /// Rectangle outline
    Rectangle(Rectangle),
    /// Bucket fill
    FloodFill(FloodFill),
}

impl Command {
    pub fn create(width: usize, height: usize) -> Self {
        Command::Create { width, height }
    }

    pub fn line(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Command::Line(Line::new(x1, y1, x2, y2))
    }

    pub fn rectangle(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        Command::Rectangle(Rectangle::new(x1, y1, x2, y2))
    }

    pub fn flood_fill(x: usize, y: usize, colour: char) -> Self {
        Command::FloodFill(FloodFill::new(x, y, colour))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create { width, height } => write!(f, "Create({},{})", width, height),
            Command::Line(line) => write!(f, "{}", line),
            Command::Rectangle(rect) => write!(f, "{}", rect),
            Command::FloodFill(fill) => write!(f, "{}", fill),
        }
    }
}

/// Glyphs used when creating and drawing on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Character painted by lines and rectangles
    pub ink: char,
    /// Top and bottom border
    pub horizontal_border: char,
    /// Left and right border
    pub vertical_border: char,
    /// Empty interior cell
    pub blank: char,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            ink: 'X',
            horizontal_border: '-',
            vertical_border: '|',
            blank: ' ',
        }
    }
}
