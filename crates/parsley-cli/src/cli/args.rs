//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose. The same
//! definition is reused with `.hide(true)` where a command accepts but
//! ignores a flag.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::ColorChoice;
use crate::grammars::Builtin;

/// Built-in grammar to parse with (-g/--grammar).
pub fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .short('g')
        .long("grammar")
        .value_name("NAME")
        .default_value("calc")
        .value_parser(value_parser!(Builtin))
        .help("Built-in grammar (see `parsley grammars`)")
}

/// Input file (positional, "-" for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file to parse (\"-\" for stdin)")
}

/// Inline input text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline input text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize output")
}

/// Show char ranges on tree nodes (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show input ranges on tree nodes")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the tree and errors as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Skip the tree after a trace (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Skip the parse tree, show the trace only")
}

/// Context depth limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("1024")
        .value_parser(value_parser!(u32))
        .help("Maximum rule nesting depth")
}
