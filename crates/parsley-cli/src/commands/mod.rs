pub mod grammars;
pub mod parse;
pub mod run_common;
pub mod source;
pub mod trace;

#[cfg(test)]
mod grammars_tests;
