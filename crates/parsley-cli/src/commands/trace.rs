//! Trace rule execution for debugging.

use std::path::PathBuf;

use parsley_lib::{Colors, Parser, PrintTracer, Style, Verbosity};

use super::run_common::{self, PrepareInput, Prepared};
use crate::grammars::Builtin;

pub struct TraceArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: Builtin,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub recursion_limit: u32,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
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
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new()
        .verbosity(args.verbosity)
        .colored(args.color);

    let result = match parser.parse_with(&source, &mut tracer) {
        Ok(result) => {
            tracer.print();
            result
        }
        Err(e) => {
            tracer.print();
            run_common::exit_with_fault(e);
        }
    };

    if args.no_result {
        return;
    }

    println!("{}", colors.paint(Style::Faint, "---"));
    if let Some(tree) = result.tree() {
        print!("{}", tree.dump());
    }
    if result.has_errors() {
        let mut printer = result.diagnostics().colored(args.color);
        if let Some(path) = &path {
            printer = printer.path(path);
        }
        eprintln!("{}", printer.render());
    }
}
