//! Small grammars shared by the facade tests.

use parsley_vm::engine::walk;
use parsley_vm::{Grammar, ParserError};

/// `Sum = Number ('+' Number)* EOI`, valued with the total of its numbers.
///
/// `Number` is valued with its digits; `Digits` is a leaf.
pub fn sum() -> Grammar<i64> {
    let mut b = Grammar::<i64>::builder();

    let digit = b.char_range('0', '9').unwrap();
    let digits = b.one_or_more(digit);
    let digits = b.leaf_rule("Digits", digits).unwrap();
    let number_value = b.action("number", |ctx| {
        let value = ctx.matched_text().parse::<i64>().map_err(ParserError::fault)?;
        ctx.set_node_value(value);
        Ok(true)
    });
    let number = b.seq(&[digits, number_value]).unwrap();
    let number = b.rule("Number", number).unwrap();

    let plus = b.ch('+');
    let tail = b.seq(&[plus, number]).unwrap();
    let tail = b.zero_or_more(tail);
    let eoi = b.eoi();
    let total = b.action("total", |ctx| {
        let mut total = 0;
        for node in ctx.sub_nodes() {
            walk(node, &mut |node, _| {
                if node.label() == "Number" {
                    total += node.value().copied().unwrap_or(0);
                }
            });
        }
        ctx.set_node_value(total);
        Ok(true)
    });
    let body = b.seq(&[number, tail, eoi, total]).unwrap();
    let root = b.rule("Sum", body).unwrap();
    b.build(root).unwrap()
}
