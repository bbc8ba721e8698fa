use textcanvas::{
    apply_command, parse_command, Canvas, Command, ParseError, Session, SessionError,
    MAX_DIMENSION,
};

fn blank_3x3() -> Canvas {
    apply_command(&Command::create(3, 3), None).unwrap()
}

/// Apply a sequence of commands, starting from no canvas
fn draw(commands: &[Command]) -> Canvas {
    commands.iter().fold(Canvas::empty(), |canvas, command| {
        apply_command(command, Some(&canvas)).unwrap()
    })
}

// ============================================
// Canonical Scenarios
// ============================================

#[test]
fn test_create_canvas() {
    let canvas = blank_3x3();
    assert_eq!(canvas.height(), 5);
    assert_eq!(canvas.width(), 5);
    insta::assert_snapshot!(canvas.to_string(), @r"
    -----
    |   |
    |   |
    |   |
    -----
    ");
}

#[test]
fn test_horizontal_line_on_first_row() {
    let canvas = apply_command(&Command::line(1, 1, 3, 1), Some(&blank_3x3())).unwrap();
    insta::assert_snapshot!(canvas.to_string(), @r"
    -----
    |XXX|
    |   |
    |   |
    -----
    ");
}

#[test]
fn test_line_too_long() {
    let err = apply_command(&Command::line(1, 1, 13, 1), Some(&blank_3x3())).unwrap_err();
    assert_eq!(err.to_string(), "Line(1,1,13,1) line will not fit.");
}

#[test]
fn test_rectangle_on_blank_canvas() {
    let canvas = apply_command(&Command::rectangle(1, 1, 3, 3), Some(&blank_3x3())).unwrap();
    insta::assert_snapshot!(canvas.to_string(), @r"
    -----
    |XXX|
    |X X|
    |XXX|
    -----
    ");
    assert_eq!(canvas.get(2, 2), Some(' '));
}

#[test]
fn test_fill_blank_canvas() {
    let canvas = apply_command(&Command::flood_fill(1, 1, 'o'), Some(&blank_3x3())).unwrap();
    insta::assert_snapshot!(canvas.to_string(), @r"
    -----
    |ooo|
    |ooo|
    |ooo|
    -----
    ");
}

#[test]
fn test_fill_on_rectangle_edge() {
    let canvas = draw(&[Command::create(3, 3), Command::rectangle(1, 2, 3, 3)]);
    let err = apply_command(&Command::flood_fill(2, 2, 'o'), Some(&canvas)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "FloodFill starting point FloodFill(2,2,o) is on a Line."
    );
}

// ============================================
// Properties
// ============================================

#[test]
fn test_line_coordinate_order_invariance() {
    let canvas = draw(&[Command::create(8, 6)]);
    for (x1, y1, x2, y2) in [(1, 2, 6, 2), (6, 3, 6, 4), (3, 1, 3, 6), (8, 6, 1, 6)] {
        let forward = apply_command(&Command::line(x1, y1, x2, y2), Some(&canvas)).unwrap();
        let reverse = apply_command(&Command::line(x2, y2, x1, y1), Some(&canvas)).unwrap();
        assert_eq!(forward, reverse, "Line({x1},{y1},{x2},{y2})");
    }
}

#[test]
fn test_fit_boundary() {
    let canvas = draw(&[Command::create(5, 4)]);

    // Reaching the last interior cell is fine
    assert!(apply_command(&Command::line(1, 4, 5, 4), Some(&canvas)).is_ok());
    assert!(apply_command(&Command::line(5, 1, 5, 4), Some(&canvas)).is_ok());
    assert!(apply_command(&Command::rectangle(1, 1, 5, 4), Some(&canvas)).is_ok());

    // One past it is not
    let err = apply_command(&Command::line(1, 4, 6, 4), Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), "Line(1,4,6,4) line will not fit.");
    let err = apply_command(&Command::line(5, 1, 5, 5), Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), "Line(5,1,5,5) line will not fit.");
    let err = apply_command(&Command::rectangle(1, 1, 5, 5), Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), "Rectangle(1,1,5,5) rectangle will not fit.");

    // Coordinate 0 is the border
    let err = apply_command(&Command::line(0, 1, 3, 1), Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), "Line(0,1,3,1) line will not fit.");
}

#[test]
fn test_diagonal_line_rejected() {
    let canvas = blank_3x3();
    let err = apply_command(&Command::line(1, 1, 3, 3), Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), "Diagonal lines not supported.");
}

#[test]
fn test_oversized_rectangle_is_atomic() {
    let canvas = draw(&[Command::create(6, 4), Command::line(1, 2, 6, 2)]);
    let snapshot = canvas.clone();
    let result = apply_command(&Command::rectangle(2, 1, 7, 3), Some(&canvas));
    assert!(result.is_err());
    assert_eq!(canvas, snapshot);
}

#[test]
fn test_refill_same_colour_is_unchanged() {
    let canvas = draw(&[
        Command::create(6, 4),
        Command::rectangle(2, 1, 5, 4),
        Command::flood_fill(1, 1, 'o'),
    ]);
    let again = apply_command(&Command::flood_fill(1, 4, 'o'), Some(&canvas)).unwrap();
    assert_eq!(again, canvas);
}

#[test]
fn test_fill_containment() {
    let canvas = draw(&[Command::create(8, 5), Command::rectangle(2, 2, 6, 5)]);

    let inside = apply_command(&Command::flood_fill(4, 3, 'i'), Some(&canvas)).unwrap();
    insta::assert_snapshot!(inside.to_string(), @r"
    ----------
    |        |
    | XXXXX  |
    | XiiiX  |
    | XiiiX  |
    | XXXXX  |
    ----------
    ");

    let outside = apply_command(&Command::flood_fill(1, 1, 'o'), Some(&canvas)).unwrap();
    insta::assert_snapshot!(outside.to_string(), @r"
    ----------
    |oooooooo|
    |oXXXXXoo|
    |oX   Xoo|
    |oX   Xoo|
    |oXXXXXoo|
    ----------
    ");
}

#[test]
fn test_prior_canvas_is_never_mutated() {
    let base = draw(&[Command::create(4, 4)]);
    let snapshot = base.clone();
    let _ = apply_command(&Command::line(1, 1, 4, 1), Some(&base)).unwrap();
    let _ = apply_command(&Command::rectangle(1, 1, 4, 4), Some(&base)).unwrap();
    let _ = apply_command(&Command::flood_fill(2, 2, 'o'), Some(&base)).unwrap();
    assert_eq!(base, snapshot);
}

#[test]
fn test_large_open_canvas_fill() {
    let canvas = draw(&[Command::create(200, 100)]);
    let filled = apply_command(&Command::flood_fill(100, 50, '.'), Some(&canvas)).unwrap();
    assert!(filled
        .rows()
        .skip(1)
        .take(100)
        .all(|row| row[1..201].iter().all(|&c| c == '.')));
    assert!(filled.rows().next().unwrap().iter().all(|&c| c == '-'));
}

#[test]
fn test_far_coordinates_are_errors_not_panics() {
    let canvas = blank_3x3();

    let line = parse_command("L 1 1 18446744073709551615 1").unwrap();
    let err = apply_command(&line, Some(&canvas)).unwrap_err();
    assert_eq!(err.message(), format!("Line(1,1,{},1) line will not fit.", usize::MAX));

    let down = parse_command("L 2 1 2 18446744073709551615").unwrap();
    assert!(apply_command(&down, Some(&canvas)).is_err());

    let rect = parse_command("R 1 1 3 18446744073709551615").unwrap();
    let err = apply_command(&rect, Some(&canvas)).unwrap_err();
    assert_eq!(
        err.message(),
        format!("Rectangle(1,1,3,{}) rectangle will not fit.", usize::MAX)
    );

    let fill = parse_command("B 18446744073709551615 1 o").unwrap();
    assert!(apply_command(&fill, Some(&canvas)).is_err());
}

// ============================================
// Textual Commands
// ============================================

#[test]
fn test_full_session() {
    let mut session = Session::default();
    for line in [
        "C 20 4",
        "L 1 2 6 2",
        "L 6 3 6 4",
        "R 14 1 18 3",
        "B 10 3 o",
    ] {
        session.execute(line).unwrap();
    }
    insta::assert_snapshot!(session.canvas().to_string(), @r"
    ----------------------
    |oooooooooooooXXXXXoo|
    |XXXXXXoooooooX   Xoo|
    |     XoooooooXXXXXoo|
    |     Xoooooooooooooo|
    ----------------------
    ");
}

#[test]
fn test_session_reports_both_error_kinds() {
    let mut session = Session::default();
    assert!(matches!(
        session.execute("L 1 1 2 1"),
        Err(SessionError::Canvas(_))
    ));
    assert!(matches!(
        session.execute("Q 1 1"),
        Err(SessionError::Parse(_))
    ));
}

#[test]
fn test_oversized_create_is_rejected() {
    let mut session = Session::default();
    session.execute("C 3 3").unwrap();
    let before = session.canvas().clone();

    for line in ["C 18446744073709551615 1", "C 100000 100000"] {
        assert!(matches!(
            session.execute(line),
            Err(SessionError::Parse(ParseError::CanvasTooLarge { max: MAX_DIMENSION, .. }))
        ));
    }
    assert_eq!(session.canvas(), &before);
}

#[test]
fn test_parsed_commands_match_constructors() {
    assert_eq!(parse_command("c 3 3").unwrap(), Command::create(3, 3));
    assert_eq!(
        parse_command("B 2 2 o").unwrap().to_string(),
        "FloodFill(2,2,o)"
    );
}
