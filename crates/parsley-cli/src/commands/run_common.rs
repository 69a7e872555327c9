//! Setup shared by `parse` and `trace`.

use std::path::Path;

use parsley_lib::{Error, Grammar};

use super::source;
use crate::grammars::Builtin;

pub struct Prepared {
    pub grammar: Grammar<i64>,
    pub source: String,
    pub path: Option<String>,
}

pub struct PrepareInput<'a> {
    pub grammar: Builtin,
    pub source_text: Option<&'a str>,
    pub source_path: Option<&'a Path>,
}

/// Load the input and build the grammar, exiting with status 2 on failure.
pub fn prepare(input: PrepareInput<'_>) -> Prepared {
    let source = source::load_source(input.source_text, input.source_path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    let grammar = input.grammar.grammar().unwrap_or_else(|e| {
        eprintln!("error: built-in grammar '{}' is broken: {e}", input.grammar.name());
        std::process::exit(2);
    });

    Prepared {
        grammar,
        source,
        path: source::display_path(input.source_path),
    }
}

/// Report an aborted run and exit with status 2.
pub fn exit_with_fault(error: Error) -> ! {
    eprintln!("error: {error}");
    let mut cause = std::error::Error::source(&error);
    while let Some(inner) = cause {
        eprintln!("  caused by: {inner}");
        cause = std::error::Error::source(inner);
    }
    std::process::exit(2);
}
