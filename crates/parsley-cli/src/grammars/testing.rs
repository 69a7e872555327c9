use parsley_lib::{Parser, ParsingResult};

use super::Builtin;

pub fn parse(builtin: Builtin, text: &str) -> ParsingResult<i64> {
    let grammar = builtin.grammar().unwrap();
    Parser::new(&grammar).parse(text).unwrap()
}

pub fn errors(result: &ParsingResult<i64>) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|e| e.describe(&result.input))
        .collect()
}
