//! Shared helpers for engine and matcher tests.

use std::fmt::{Debug, Write};

use parsley_core::InputBuffer;

use crate::engine::{
    Grammar, NoopTracer, ParseRun, ParserError, RunLimits, RunOutcome, Tracer, walk,
};

pub fn run<V: Clone>(grammar: &Grammar<V>, text: &str) -> (RunOutcome<V>, InputBuffer) {
    run_traced(grammar, text, &mut NoopTracer).expect("run failed")
}

pub fn run_traced<V: Clone>(
    grammar: &Grammar<V>,
    text: &str,
    tracer: &mut dyn Tracer,
) -> Result<(RunOutcome<V>, InputBuffer), ParserError> {
    let input = InputBuffer::new(text);
    let outcome =
        ParseRun::new(grammar, &input, RunLimits::default(), tracer).run(grammar.root())?;
    Ok((outcome, input))
}

/// Tree (one node per line, two-space indent) followed by the errors.
pub fn render<V: Debug>(outcome: &RunOutcome<V>, input: &InputBuffer) -> String {
    let mut out = String::new();
    if !outcome.matched {
        out.push_str("no match\n");
    }
    if let Some(root) = &outcome.root {
        walk(root, &mut |node, depth| {
            let _ = write!(
                out,
                "{}{} {}..{}",
                "  ".repeat(depth),
                node.label(),
                node.start().index,
                node.end().index
            );
            if let Some(value) = node.value() {
                let _ = write!(out, " = {value:?}");
            }
            if !node.is_illegal() && node.children().is_empty() {
                let _ = write!(out, " {:?}", node.text(input));
            }
            out.push('\n');
        });
    }
    for error in &outcome.errors {
        let _ = writeln!(
            out,
            "error {}..{}: {}",
            error.start().index,
            error.end().index,
            error.message()
        );
    }
    out.trim_end().to_owned()
}

pub fn parse<V: Clone + Debug>(grammar: &Grammar<V>, text: &str) -> String {
    let (outcome, input) = run(grammar, text);
    render(&outcome, &input)
}
