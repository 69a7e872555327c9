use parsley_core::{InputBuffer, InputLocation, Position};

use crate::engine::{ParseError, ParseErrors, ParserError};

fn error_at(input: &InputBuffer, index: usize, message: &str) -> ParseError<()> {
    let location = InputLocation::at(input, index);
    ParseError::new(location, location, None, message)
}

#[test]
fn push_keeps_first_error_per_start() {
    let input = InputBuffer::new("abc");
    let mut errors = ParseErrors::new();
    assert!(errors.push(error_at(&input, 1, "first")));
    assert!(!errors.push(error_at(&input, 1, "second")));
    assert!(errors.push(error_at(&input, 2, "third")));

    let messages: Vec<_> = errors.iter().map(ParseError::message).collect();
    assert_eq!(messages, ["first", "third"]);
}

#[test]
fn describe_appends_position() {
    let input = InputBuffer::new("ab\ncd");
    let error = error_at(&input, 4, "Invalid input 'd', expected 'x'");
    assert_eq!(error.position(&input), Position { line: 2, column: 2 });
    insta::assert_snapshot!(
        error.describe(&input),
        @"Invalid input 'd', expected 'x' (line 2, pos 2)"
    );
}

#[test]
fn only_faults_are_unclassified() {
    assert!(!ParserError::fault("x").is_classified());
    assert!(ParserError::invariant("x").is_classified());
    assert!(ParserError::RecursionLimitExceeded(8).is_classified());
    let located = ParserError::Rule {
        kind: "rule",
        path: "/A".to_owned(),
        position: Position { line: 1, column: 1 },
        source: "x".into(),
    };
    assert!(located.is_classified());
}

#[test]
fn located_error_keeps_source() {
    let err = ParserError::Rule {
        kind: "action",
        path: "/Root/check".to_owned(),
        position: Position { line: 3, column: 7 },
        source: "division by zero".into(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"error during execution of parsing action '/Root/check' at input position line 3, pos 7"
    );
    let source = std::error::Error::source(&err).map(|e| e.to_string());
    assert_eq!(source.as_deref(), Some("division by zero"));
}
