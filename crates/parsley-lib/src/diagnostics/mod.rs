//! Rendering of parse errors against the input they were found in.

mod printer;


pub use printer::DiagnosticsPrinter;
