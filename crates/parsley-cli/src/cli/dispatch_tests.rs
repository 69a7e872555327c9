//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: parse/trace accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use parsley_lib::Verbosity;

use super::*;
use crate::cli::commands::{grammars_command, parse_command, trace_command};
use crate::commands::parse::ParseArgs;
use crate::commands::trace::TraceArgs;
use crate::grammars::Builtin;

#[test]
fn parse_accepts_trace_flags() {
    let cmd = parse_command();
    let result = cmd.try_get_matches_from(["parse", "input.txt", "-vv", "--no-result"]);
    assert!(
        result.is_ok(),
        "parse should accept trace flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = ParseParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("input.txt")));
    // verbose and no_result are parsed but not in ParseParams
}

#[test]
fn trace_accepts_output_flags() {
    let cmd = trace_command();
    let result = cmd.try_get_matches_from(["trace", "-s", "1+2", "--json", "--spans"]);
    assert!(
        result.is_ok(),
        "trace should accept output flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = TraceParams::from_matches(&m);
    assert_eq!(params.source_text.as_deref(), Some("1+2"));
    assert_eq!(params.source_path, None);
}

#[test]
fn source_flag_conflicts_with_positional() {
    let cmd = parse_command();
    let result = cmd.try_get_matches_from(["parse", "input.txt", "-s", "1+2"]);
    assert!(result.is_err(), "-s and SOURCE should conflict");
}

#[test]
fn unknown_grammar_is_rejected() {
    let cmd = parse_command();
    let result = cmd.try_get_matches_from(["parse", "-g", "json", "-s", "{}"]);
    assert!(result.is_err(), "only built-in grammars are accepted");
}

#[test]
fn parse_help_hides_trace_flags() {
    let mut cmd = parse_command();
    let help = cmd.render_help().to_string();

    assert!(
        !help.contains("--no-result"),
        "parse help should not show --no-result"
    );
    assert!(
        !help.contains("Verbosity level"),
        "parse help should not show -v description"
    );
    assert!(help.contains("--spans"), "parse help should show --spans");
}

#[test]
fn trace_help_hides_output_flags() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--json"), "trace help should not show --json");
    assert!(!help.contains("--spans"), "trace help should not show --spans");
    assert!(
        help.contains("--no-result"),
        "trace help should show --no-result"
    );
}

#[test]
fn parse_params_defaults() {
    let m = parse_command()
        .try_get_matches_from(["parse", "-s", "1"])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.grammar, Builtin::Calc);
    assert_eq!(params.recursion_limit, 1024);
    assert_eq!(params.color, ColorChoice::Auto);
    assert!(!params.spans);
    assert!(!params.json);
}

#[test]
fn parse_params_extracts_flags() {
    let m = parse_command()
        .try_get_matches_from([
            "parse",
            "-g",
            "list",
            "-s",
            "[a]",
            "--spans",
            "--json",
            "--recursion-limit",
            "16",
            "--color",
            "never",
        ])
        .unwrap();
    let args: ParseArgs = ParseParams::from_matches(&m).into();

    assert_eq!(args.grammar, Builtin::List);
    assert_eq!(args.source_text.as_deref(), Some("[a]"));
    assert!(args.spans);
    assert!(args.json);
    assert_eq!(args.recursion_limit, 16);
    assert!(!args.color);
}

#[test]
fn trace_verbosity_from_count() {
    let verbosity = |flags: &[&str]| {
        let mut argv = vec!["trace", "-s", "1"];
        argv.extend_from_slice(flags);
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        args.verbosity
    };

    assert_eq!(verbosity(&[]), Verbosity::Default);
    assert_eq!(verbosity(&["-v"]), Verbosity::Verbose);
    assert_eq!(verbosity(&["-vv"]), Verbosity::VeryVerbose);
    assert_eq!(verbosity(&["-vvv"]), Verbosity::VeryVerbose);
}

#[test]
fn trace_params_color_always() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-s", "1", "--color", "always", "--no-result"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert!(args.color);
    assert!(args.no_result);
}

#[test]
fn grammars_takes_no_arguments() {
    let result = grammars_command().try_get_matches_from(["grammars", "extra"]);
    assert!(result.is_err());

    let result = grammars_command().try_get_matches_from(["grammars"]);
    assert!(result.is_ok());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["parsley"]);
    assert!(result.is_err());
}
