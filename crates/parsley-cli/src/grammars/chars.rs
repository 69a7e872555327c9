//! ```text
//! Tokens  = Token* EOI
//! Token   = Space / Keyword / Ident / Number / Punct
//! Keyword = ("let" / "fn" / "if") !IdentChar
//! Ident   = IdentStart IdentChar*
//! ```

use parsley_lib::{Grammar, GrammarError};

const TOKENS: [&str; 4] = ["Keyword", "Ident", "Number", "Punct"];

pub fn grammar() -> Result<Grammar<i64>, GrammarError> {
    let mut b = Grammar::<i64>::builder();

    let space = b.any_of(" \t\r\n");
    let space = b.one_or_more(space);
    let space = b.leaf_rule("Space", space)?;

    let lower = b.char_range('a', 'z')?;
    let upper = b.char_range('A', 'Z')?;
    let underscore = b.ch('_');
    let ident_start = b.first_of(&[lower, upper, underscore])?;
    let digit = b.char_range('0', '9')?;
    let ident_char = b.first_of(&[ident_start, digit])?;

    let keywords = ["let", "fn", "if"]
        .iter()
        .map(|kw| b.string(kw))
        .collect::<Result<Vec<_>, _>>()?;
    let kw = b.first_of(&keywords)?;
    let kw = b.leaf_rule("Kw", kw)?;
    let boundary = b.test_not(ident_char);
    let keyword = b.seq(&[kw, boundary])?;
    let keyword = b.rule("Keyword", keyword)?;

    let rest = b.zero_or_more(ident_char);
    let name = b.seq(&[ident_start, rest])?;
    let name = b.leaf_rule("Name", name)?;
    let ident = b.seq(&[name])?;
    let ident = b.rule("Ident", ident)?;

    let number = super::number(&mut b)?;

    let punct = b.any_of("=;,(){}[]+-*/<>");
    let punct = b.seq(&[punct])?;
    let punct = b.rule("Punct", punct)?;

    let token = b.first_of(&[space, keyword, ident, number, punct])?;
    let token = b.rule("Token", token)?;
    let tokens = b.zero_or_more(token);
    let eoi = b.eoi();
    let count = b.action("count", |ctx| super::count(ctx, &TOKENS));
    let root = b.seq(&[tokens, eoi, count])?;
    let root = b.rule("Tokens", root)?;
    b.build(root)
}
