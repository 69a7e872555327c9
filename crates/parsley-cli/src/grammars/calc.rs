//! ```text
//! Calc   = Expr EOI
//! Expr   = Term (AddOp Term)*
//! Term   = Factor (MulOp Factor)*
//! Factor = Number / Parens
//! Parens = '(' Expr ')'
//! AddOp  = '+' / '-'
//! MulOp  = '*' / '/'
//! ```

use parsley_lib::{
    Grammar, GrammarBuilder, GrammarError, ILLEGAL, MatcherContext, NodeRef, ParserError, RuleId,
};

pub fn grammar() -> Result<Grammar<i64>, GrammarError> {
    let mut b = Grammar::<i64>::builder();

    let expr = b.declare("Expr")?;
    let number = super::number(&mut b)?;
    let open = b.ch('(');
    let close = b.ch(')');
    let parens = b.seq(&[open, expr, close])?;
    let parens = b.rule("Parens", parens)?;
    let factor = b.first_of(&[number, parens])?;
    let factor = b.rule("Factor", factor)?;

    let term = chain(&mut b, "Factor", "MulOp", "*/", factor)?;
    let term = b.rule("Term", term)?;
    let body = chain(&mut b, "Term", "AddOp", "+-", term)?;
    b.define(expr, body)?;

    let eoi = b.eoi();
    let calc = b.seq(&[expr, eoi])?;
    let calc = b.rule("Calc", calc)?;
    b.build(calc)
}

/// `operand (op operand)*`, valued by folding left to right.
fn chain(
    b: &mut GrammarBuilder<i64>,
    operand_label: &'static str,
    op_label: &str,
    ops: &str,
    operand: RuleId,
) -> Result<RuleId, GrammarError> {
    let chars: Vec<RuleId> = ops.chars().map(|c| b.ch(c)).collect();
    let op = b.first_of(&chars)?;
    let op = b.rule(op_label, op)?;
    let step = b.seq(&[op, operand])?;
    let steps = b.zero_or_more(step);
    let fold = b.action("fold", move |ctx| fold(ctx, operand_label));
    b.seq(&[operand, steps, fold])
}

fn fold(ctx: &mut MatcherContext<'_, '_, i64>, operand: &str) -> Result<bool, ParserError> {
    let mut parts = Vec::new();
    collect(ctx.sub_nodes(), operand, &mut parts);
    if let Some(value) = evaluate(ctx, &parts)? {
        ctx.set_node_value(value);
    }
    Ok(true)
}

/// Operands and operators in input order, without looking inside operands.
fn collect<'n>(nodes: &'n [NodeRef<i64>], operand: &str, out: &mut Vec<&'n NodeRef<i64>>) {
    for node in nodes {
        if node.label() == operand || node.label().ends_with("Op") {
            out.push(node);
        } else if node.label() != ILLEGAL {
            collect(node.children(), operand, out);
        }
    }
}

/// `None` when recovery left an operand without a value.
fn evaluate(
    ctx: &MatcherContext<'_, '_, i64>,
    parts: &[&NodeRef<i64>],
) -> Result<Option<i64>, ParserError> {
    let mut parts = parts.iter();
    let Some(mut acc) = parts.next().and_then(|node| node.value().copied()) else {
        return Ok(None);
    };
    while let (Some(op), Some(rhs)) = (parts.next(), parts.next()) {
        let Some(rhs) = rhs.value().copied() else {
            return Ok(None);
        };
        let result = match ctx.node_text(op) {
            "+" => acc.checked_add(rhs),
            "-" => acc.checked_sub(rhs),
            "*" => acc.checked_mul(rhs),
            "/" if rhs == 0 => return Err(ParserError::fault("division by zero")),
            "/" => acc.checked_div(rhs),
            _ => return Ok(None),
        };
        acc = result.ok_or_else(|| ParserError::fault("integer overflow"))?;
    }
    Ok(Some(acc))
}
