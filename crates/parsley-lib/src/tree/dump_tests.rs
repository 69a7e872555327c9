use crate::Parser;
use crate::test_grammars::sum;

#[test]
fn clean_result_as_json() {
    let grammar = sum();
    let result = Parser::new(&grammar).parse("1").unwrap();

    let json = serde_json::to_string_pretty(&result.dump()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "matched": true,
      "root": {
        "label": "Sum",
        "start": 0,
        "end": 1,
        "value": 1,
        "children": [
          {
            "label": "Number",
            "start": 0,
            "end": 1,
            "value": 1,
            "text": "1"
          },
          {
            "label": "ZeroOrMore",
            "start": 1,
            "end": 1,
            "text": ""
          }
        ]
      },
      "errors": []
    }
    "#);
}

#[test]
fn errors_carry_position() {
    let grammar = sum();
    let result = Parser::new(&grammar).parse("1+").unwrap();

    let json = serde_json::to_string(&result.dump().errors).unwrap();
    insta::assert_snapshot!(
        json,
        @r#"[{"message":"Invalid input '+', expected EOI","start":1,"end":2,"position":{"line":1,"column":2}}]"#
    );
}

#[test]
fn illegal_nodes_have_no_text() {
    let grammar = sum();
    let result = Parser::new(&grammar).parse("1+").unwrap();
    let dump = result.dump();

    let root = dump.root.unwrap();
    let illegal = root.children.last().unwrap();
    assert_eq!(illegal.label, "ILLEGAL");
    assert_eq!(illegal.text, None);
    assert_eq!((illegal.start, illegal.end), (1, 2));
}
