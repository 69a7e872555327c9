//! Command builders for the CLI.
//!
//! `parse` and `trace` accept each other's flags, with the ones they
//! ignore hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Add hidden output args (for commands that print no tree).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true)).arg(json_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("parsley")
        .about("PEG parsing with error recovery")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(trace_command())
        .subcommand(grammars_command())
}

/// Parse input and print the tree and the recovered errors.
pub fn parse_command() -> Command {
    let cmd = Command::new("parse")
        .about("Parse input with a built-in grammar")
        .override_usage(
            "\
  parsley parse [-g <NAME>] <SOURCE>
  parsley parse [-g <NAME>] -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  parsley parse -s '1+2*3'                # calc is the default grammar
  parsley parse -s '1+*3' --spans         # recovered tree with ranges
  parsley parse -g list -s '[a, b]' --json
  parsley parse -g chars input.txt"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(grammar_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(cmd)
}

/// Trace every rule invocation of a parse.
///
/// Accepts the parse output flags for unified CLI experience, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace rule execution for debugging")
        .override_usage(
            "\
  parsley trace [-g <NAME>] <SOURCE>
  parsley trace [-g <NAME>] -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  parsley trace -s '1+2'                  # rule entry and exit
  parsley trace -s '1+' -v                # also actions and duplicate errors
  parsley trace -g list -s '[a' -vv --no-result"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(grammar_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_output_args(cmd)
}

/// List the built-in grammars.
pub fn grammars_command() -> Command {
    Command::new("grammars").about("List built-in grammars")
}
