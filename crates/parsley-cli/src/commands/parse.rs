//! Parse input and print the tree, or a JSON report.

use std::path::PathBuf;

use parsley_lib::{ParseDump, Parser};
use serde::Serialize;

use super::run_common::{self, PrepareInput, Prepared};
use crate::grammars::Builtin;

pub struct ParseArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Builtin,
    pub spans: bool,
    pub json: bool,
    pub recursion_limit: u32,
    pub color: bool,
}

#[derive(Serialize)]
struct Report<'r> {
    grammar: &'static str,
    #[serde(flatten)]
    dump: ParseDump<'r, i64>,
}

/// Exit status: 0 for a clean parse, 1 when recovery was needed, 2 when
/// the run aborted.
pub fn run(args: ParseArgs) {
    let Prepared {
        grammar,
        source,
        path,
    } = run_common::prepare(PrepareInput {
        grammar: args.grammar,
        source_text: args.source_text.as_deref(),
        source_path: args.source_path.as_deref(),
    });

    let parser = Parser::builder(&grammar)
        .recursion_limit(args.recursion_limit)
        .build();
    let result = parser
        .parse(&source)
        .unwrap_or_else(|e| run_common::exit_with_fault(e));

    if args.json {
        let report = Report {
            grammar: args.grammar.name(),
            dump: result.dump(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize result: {e}");
                std::process::exit(2);
            }
        }
    } else {
        if let Some(tree) = result.tree() {
            print!("{}", tree.with_spans(args.spans).dump());
        }
        if result.has_errors() {
            let mut printer = result.diagnostics().colored(args.color);
            if let Some(path) = &path {
                printer = printer.path(path);
            }
            eprintln!("{}", printer.render());
        }
    }

    if !result.is_clean() {
        std::process::exit(1);
    }
}
