mod cli;
mod commands;
mod grammars;

use cli::{ParseParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("grammars", _)) => commands::grammars::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
