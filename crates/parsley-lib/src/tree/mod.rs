//! Parse tree output: an indented text printer and a serializable dump.

mod dump;
mod printer;

#[cfg(test)]
mod dump_tests;

pub use dump::{ErrorDump, NodeDump, ParseDump};
pub use printer::TreePrinter;
