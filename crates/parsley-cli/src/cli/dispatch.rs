//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap, ignoring hidden flags
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use parsley_lib::{RunLimits, Verbosity};

use super::ColorChoice;
use crate::commands::parse::ParseArgs;
use crate::commands::trace::TraceArgs;
use crate::grammars::Builtin;

pub struct ParseParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Builtin,
    pub spans: bool,
    pub json: bool,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: verbose and no_result are parsed but not extracted (unified flags)
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            grammar: parse_grammar(m),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            grammar: p.grammar,
            spans: p.spans,
            json: p.json,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Builtin,
    pub verbose: u8,
    pub no_result: bool,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: spans and json are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            grammar: parse_grammar(m),
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            grammar: p.grammar,
            verbosity,
            no_result: p.no_result,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_grammar(m: &ArgMatches) -> Builtin {
    m.get_one::<Builtin>("grammar").copied().unwrap_or_default()
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or_else(|| RunLimits::default().get_recursion_limit())
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<ColorChoice>("color")
        .copied()
        .unwrap_or_default()
}
