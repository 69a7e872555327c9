use super::Builtin;
use super::testing::{errors, parse};

#[test]
fn counts_items() {
    let result = parse(Builtin::List, "[a, bb, c]");
    assert!(result.is_clean());
    assert_eq!(result.value(), Some(&3));

    assert_eq!(parse(Builtin::List, "[ ]").value(), Some(&0));
}

#[test]
fn missing_close_is_inserted() {
    let result = parse(Builtin::List, "[a, b");

    assert_eq!(result.value(), Some(&2));
    assert_eq!(
        errors(&result),
        ["Invalid input EOI, expected ']' (line 1, pos 6)"]
    );
}

#[test]
fn stray_char_before_close_is_deleted() {
    let result = parse(Builtin::List, "[a b]");

    assert_eq!(result.value(), Some(&1));
    assert_eq!(
        errors(&result),
        ["Invalid input 'b', expected ']' (line 1, pos 4)"]
    );
    insta::assert_snapshot!(result.tree().unwrap().with_spans(true).dump(), @r#"
    List [0..5] = 1
      Optional [1..3]
        Items [1..3]
          Item [1..3] "a "
          ZeroOrMore [3..3] ""
      ILLEGAL [3..4]
    "#);
}

#[test]
fn broken_separator_resyncs_to_end() {
    let result = parse(Builtin::List, "[a,,b]");

    assert_eq!(result.value(), Some(&1));
    assert_eq!(
        errors(&result),
        ["Invalid input ',', expected ']' (line 1, pos 3)"]
    );
}
