use crate::{InputBuffer, InputChar, InputLocation, Position};

#[test]
fn char_at_past_end_is_eoi() {
    let buffer = InputBuffer::new("ab");
    assert_eq!(buffer.char_at(0), InputChar::Char('a'));
    assert_eq!(buffer.char_at(2), InputChar::Eoi);
    assert_eq!(buffer.char_at(100), InputChar::Eoi);
}

#[test]
fn advance_is_idempotent_at_end() {
    let buffer = InputBuffer::new("a");
    let start = InputLocation::start(&buffer);
    let end = start.advance(&buffer);
    assert_eq!(end.index, 1);
    assert_eq!(end.current, InputChar::Eoi);
    assert_eq!(end.advance(&buffer), end);
    assert!(start < end);
}

#[test]
fn lookahead() {
    let buffer = InputBuffer::new("xa");
    let start = InputLocation::start(&buffer);
    assert_eq!(start.lookahead(&buffer, 0), InputChar::Char('x'));
    assert_eq!(start.lookahead(&buffer, 1), InputChar::Char('a'));
    assert_eq!(start.lookahead(&buffer, 2), InputChar::Eoi);
}

#[test]
fn positions_across_lines() {
    let buffer = InputBuffer::new("ab\ncd\n");
    assert_eq!(buffer.position(0), Position { line: 1, column: 1 });
    assert_eq!(buffer.position(2), Position { line: 1, column: 3 });
    assert_eq!(buffer.position(3), Position { line: 2, column: 1 });
    assert_eq!(buffer.position(6), Position { line: 3, column: 1 });
    assert_eq!(buffer.line(1), Some("ab"));
    assert_eq!(buffer.line(2), Some("cd"));
    assert_eq!(buffer.line(3), Some(""));
    assert_eq!(buffer.line(4), None);
}

#[test]
fn extract_uses_char_indices() {
    let buffer = InputBuffer::new("héllo");
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.extract(1, 3), "él");
    assert_eq!(buffer.extract(3, 99), "lo");
    assert_eq!(buffer.byte_offset(2), 3);
}
