//! List the built-in grammars.

use std::fmt::Write;

use crate::grammars::Builtin;

pub fn run() {
    print!("{}", listing());
}

/// One line per grammar: name, description and a sample input.
pub fn listing() -> String {
    let width = Builtin::ALL
        .iter()
        .map(|b| b.name().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for builtin in Builtin::ALL {
        writeln!(
            out,
            "{:width$}  {} (e.g. {:?})",
            builtin.name(),
            builtin.description(),
            builtin.example()
        )
        .expect("String write never fails");
    }
    out
}
