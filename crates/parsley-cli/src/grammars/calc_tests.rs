use parsley_lib::{Error, Parser};

use super::Builtin;
use super::testing::{errors, parse};

#[test]
fn evaluates_with_precedence() {
    assert_eq!(parse(Builtin::Calc, "1+2*3").value(), Some(&7));
    assert_eq!(parse(Builtin::Calc, "(1+2)*3").value(), Some(&9));
    assert_eq!(parse(Builtin::Calc, "2*(3+4)-5").value(), Some(&9));
    assert_eq!(parse(Builtin::Calc, "20/3/2").value(), Some(&3));
    assert_eq!(parse(Builtin::Calc, "8-2-1").value(), Some(&5));
}

#[test]
fn tree_of_simple_sum() {
    let result = parse(Builtin::Calc, "1+2");
    insta::assert_snapshot!(result.tree().unwrap().dump(), @r#"
    Calc = 3
      Expr = 3
        Term = 1
          Factor = 1
            Number = 1 "1"
          ZeroOrMore ""
        ZeroOrMore = 2
          Sequence = 2
            AddOp "+"
            Term = 2
              Factor = 2
                Number = 2 "2"
              ZeroOrMore ""
    "#);
}

#[test]
fn unbalanced_parens_resync_to_operator() {
    let result = parse(Builtin::Calc, "(1+2");

    assert!(result.matched);
    assert_eq!(
        errors(&result),
        ["Invalid input '(', expected Factor (line 1, pos 1)"]
    );
}

#[test]
fn trailing_garbage_is_skipped() {
    let result = parse(Builtin::Calc, "1+*2");

    assert_eq!(result.value(), Some(&1));
    assert_eq!(
        errors(&result),
        ["Invalid input '+', expected EOI (line 1, pos 2)"]
    );
}

#[test]
fn division_by_zero_aborts() {
    let grammar = Builtin::Calc.grammar().unwrap();
    let err = Parser::new(&grammar).parse("1/0").err().unwrap();

    assert!(matches!(err, Error::Parser(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"error during execution of parsing action '/Calc/Expr/Term/fold' at input position line 1, pos 4"
    );
}
