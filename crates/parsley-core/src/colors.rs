//! Terminal styling for trace and tree output.
//!
//! Output code asks for a `Style` by meaning, not by escape code, and gets
//! back a `Painted` value that wraps itself in ANSI codes only when colors
//! are enabled.

use std::fmt;

const RESET: &str = "\x1b[0m";

/// What a piece of output means. Each style maps to one 16-color ANSI code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Rule labels.
    Label,
    /// Successful matches.
    Success,
    /// Failures, recoveries and parse errors.
    Failure,
    /// Spans, positions and separators.
    Faint,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Label => "\x1b[34m",
            Style::Success => "\x1b[32m",
            Style::Failure => "\x1b[31m",
            Style::Faint => "\x1b[2m",
        }
    }
}

/// Whether output gets ANSI codes. Plain output is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint<T: fmt::Display>(&self, style: Style, value: T) -> Painted<T> {
        Painted {
            code: self.enabled.then(|| style.code()),
            value,
        }
    }
}

/// A value displayed with an optional ANSI prefix and a matching reset.
#[derive(Clone, Copy, Debug)]
pub struct Painted<T> {
    code: Option<&'static str>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}{}{RESET}", self.value),
            None => self.value.fmt(f),
        }
    }
}
