use crate::engine::Grammar;
use crate::test_utils::parse;

#[test]
fn sequence_starters_skip_nullable_prefix() {
    let mut b = Grammar::<()>::builder();
    let a = b.ch('a');
    let opt_a = b.optional(a);
    let c = b.ch('b');
    let d = b.ch('c');
    let seq = b.seq(&[opt_a, c, d]).unwrap();
    let nullable = b.seq(&[opt_a]).unwrap();
    let grammar = b.build(seq).unwrap();

    let rule = grammar.rule(seq);
    assert_eq!(rule.starter_chars(&grammar).to_string(), "['a','b']");
    let rule = grammar.rule(nullable);
    assert_eq!(rule.starter_chars(&grammar).to_string(), "['a',EMPTY]");
}

#[test]
fn first_of_expected_lists_alternatives() {
    let mut b = Grammar::<()>::builder();
    let plus = b.ch('+');
    let minus = b.ch('-');
    let digit = b.char_range('0', '9').unwrap();
    let sign = b.first_of(&[plus, minus]).unwrap();
    let root = b.seq(&[sign, digit]).unwrap();
    let grammar = b.build(root).unwrap();

    assert_eq!(grammar.rule(sign).expected(&grammar), "'+' or '-'");
    assert_eq!(grammar.rule(sign).starter_chars(&grammar).to_string(), "['+','-']");
    insta::assert_snapshot!(parse(&grammar, "*1"), @r#"
    Sequence 0..2
      FirstOf 0..0 ""
      ILLEGAL 0..1
    error 0..1: Invalid input '*', expected '+' or '-'
    "#);
}

#[test]
fn first_of_backtracks_between_alternatives() {
    let mut b = Grammar::<()>::builder();
    let kw_if = b.string("if").unwrap();
    let kw_in = b.string("in").unwrap();
    let kw_if = b.rule("If", kw_if).unwrap();
    let kw_in = b.rule("In", kw_in).unwrap();
    let keyword = b.first_of(&[kw_if, kw_in]).unwrap();
    let grammar = b.build(keyword).unwrap();

    insta::assert_snapshot!(parse(&grammar, "in"), @r#"FirstOf 0..2 "in""#);
}

#[test]
fn string_labels_are_quoted() {
    let mut b = Grammar::<()>::builder();
    let kw = b.string("let").unwrap();
    let single = b.string("x").unwrap();
    let grammar = b.build(kw).unwrap();

    assert_eq!(grammar.label(kw), r#""let""#);
    assert!(grammar.is_leaf(kw));
    assert_eq!(grammar.label(single), "'x'");
}

#[test]
fn sequence_expects_first_required_child() {
    let mut b = Grammar::<()>::builder();
    let a = b.ch('a');
    let opt_a = b.optional(a);
    let c = b.ch('b');
    let seq = b.seq(&[opt_a, c]).unwrap();
    let nullable = b.seq(&[opt_a]).unwrap();
    let grammar = b.build(seq).unwrap();

    assert_eq!(grammar.rule(seq).expected(&grammar), "'b'");
    assert_eq!(grammar.rule(nullable).expected(&grammar), "Sequence");
}

#[test]
fn failed_alternative_is_left_to_the_enclosing_choice() {
    let mut b = Grammar::<()>::builder();
    let a = b.ch('a');
    let c = b.ch('b');
    let d = b.ch('c');
    let e = b.ch('d');
    let semi = b.ch(';');
    let ab = b.seq(&[a, c]).unwrap();
    let ac = b.seq(&[a, d]).unwrap();
    let cd = b.seq(&[d, e]).unwrap();
    let choice = b.first_of(&[ab, ac, cd]).unwrap();
    let root = b.seq(&[choice, semi]).unwrap();
    let grammar = b.build(root).unwrap();

    // The first alternative fails after 'a' and backtracks.
    insta::assert_snapshot!(parse(&grammar, "ac;"), @r#"
    Sequence 0..3
      FirstOf 0..2
        Sequence 0..2 "ac"
    "#);

    // No alternative matches: recovery starts where the choice started.
    insta::assert_snapshot!(parse(&grammar, "ad;"), @r#"
    Sequence 0..3
      FirstOf 0..0 ""
      ILLEGAL 0..2
    error 0..2: Invalid input 'a', expected 'a' or 'a' or 'c'
    "#);
}
