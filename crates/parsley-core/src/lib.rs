#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core value types for the Parsley matching engine.
//!
//! - `InputBuffer` / `InputLocation`: char storage and the immutable cursor over it
//! - `InputChar` / `Characters`: char values with the `Eoi` and `Empty` sentinels,
//!   and the sets used for starter and follower computations
//! - `Colors` / `Style`: terminal styling shared by tracers and the CLI

mod chars;
mod colors;
mod input;

#[cfg(test)]
mod chars_tests;
#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod input_tests;

pub use chars::{Characters, InputChar};
pub use colors::{Colors, Painted, Style};
pub use input::{InputBuffer, InputLocation, Position};
