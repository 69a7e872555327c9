//! Built-in demo grammars. Every one of them values its tree with integers.

mod calc;
mod chars;
mod list;

#[cfg(test)]
mod calc_tests;
#[cfg(test)]
mod list_tests;
#[cfg(test)]
mod testing;

use parsley_lib::{Grammar, GrammarBuilder, GrammarError, MatcherContext, ParserError, RuleId, walk};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Builtin {
    /// Integer arithmetic with parentheses.
    #[default]
    Calc,
    /// Bracketed, comma separated lowercase words.
    List,
    /// Keywords, identifiers, numbers and punctuation.
    Chars,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Calc, Builtin::List, Builtin::Chars];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Calc => "calc",
            Builtin::List => "list",
            Builtin::Chars => "chars",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Builtin::Calc => "integer arithmetic (+ - * / and parentheses), valued with the result",
            Builtin::List => "bracketed list of lowercase words, valued with the item count",
            Builtin::Chars => "keywords, identifiers, numbers and punctuation, valued with the token count",
        }
    }

    pub fn example(self) -> &'static str {
        match self {
            Builtin::Calc => "(1+2)*3",
            Builtin::List => "[a, bb, c]",
            Builtin::Chars => "let x = 42;",
        }
    }

    pub fn grammar(self) -> Result<Grammar<i64>, GrammarError> {
        match self {
            Builtin::Calc => calc::grammar(),
            Builtin::List => list::grammar(),
            Builtin::Chars => chars::grammar(),
        }
    }
}

/// `Number = Digits`, valued with the digits.
fn number(b: &mut GrammarBuilder<i64>) -> Result<RuleId, GrammarError> {
    let digit = b.char_range('0', '9')?;
    let digits = b.one_or_more(digit);
    let digits = b.leaf_rule("Digits", digits)?;
    let value = b.action("value", |ctx| {
        // A recovered match may still cover the char deleted in front of it.
        let text = ctx
            .matched_text()
            .trim_start_matches(|c: char| !c.is_ascii_digit());
        if text.is_empty() {
            return Ok(true);
        }
        let value = text.parse::<i64>().map_err(ParserError::fault)?;
        ctx.set_node_value(value);
        Ok(true)
    });
    let number = b.seq(&[digits, value])?;
    b.rule("Number", number)
}

/// Action valuing the current rule with the number of `labels` nodes below it.
fn count(
    ctx: &mut MatcherContext<'_, '_, i64>,
    labels: &[&str],
) -> Result<bool, ParserError> {
    let mut count = 0;
    for node in ctx.sub_nodes() {
        walk(node, &mut |node, _| {
            if labels.contains(&node.label()) {
                count += 1;
            }
        });
    }
    ctx.set_node_value(count);
    Ok(true)
}
