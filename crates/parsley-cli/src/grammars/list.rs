//! ```text
//! List  = '[' WS Items? ']' WS EOI
//! Items = Item (',' WS Item)*
//! Item  = Word WS
//! ```

use parsley_lib::{Grammar, GrammarError};

pub fn grammar() -> Result<Grammar<i64>, GrammarError> {
    let mut b = Grammar::<i64>::builder();

    let space = b.any_of(" \t\r\n");
    let ws = b.zero_or_more(space);
    let ws = b.leaf_rule("WS", ws)?;

    let letter = b.char_range('a', 'z')?;
    let word = b.one_or_more(letter);
    let word = b.leaf_rule("Word", word)?;
    let item = b.seq(&[word, ws])?;
    let item = b.rule("Item", item)?;

    let comma = b.ch(',');
    let next = b.seq(&[comma, ws, item])?;
    let more = b.zero_or_more(next);
    let items = b.seq(&[item, more])?;
    let items = b.rule("Items", items)?;
    let items = b.optional(items);

    let open = b.ch('[');
    let close = b.ch(']');
    let eoi = b.eoi();
    let count = b.action("count", |ctx| super::count(ctx, &["Item"]));
    let list = b.seq(&[open, ws, items, close, ws, eoi, count])?;
    let list = b.rule("List", list)?;
    b.build(list)
}
