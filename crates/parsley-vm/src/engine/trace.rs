//! Tracing infrastructure for debugging rule execution.
//!
//! The engine reports every rule entry and exit, every action, every
//! recovery and every parse error to a `Tracer`. Tracers receive raw
//! data (levels, labels, locations); formatting happens in the tracer.
//!
//! `NoopTracer` ignores everything. `PrintTracer` collects indented lines.

use std::fmt;

use parsley_core::{Colors, InputLocation, Style};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rule entry/exit, recoveries, accepted errors.
    #[default]
    Default,
    /// Also actions and dropped duplicate errors.
    Verbose,
    /// Also the input char at every event.
    VeryVerbose,
}

/// Recovery tier that resolved a failed enforced rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    Deletion,
    Insertion,
    Resync,
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Recovery::Deletion => "deletion",
            Recovery::Insertion => "insertion",
            Recovery::Resync => "resync",
        })
    }
}

/// Tracer trait for engine instrumentation.
///
/// - `trace_enter` - a rule starts at `level`
/// - `trace_exit` - the rule at `level` finished
/// - `trace_action` - an action runs on the context at `level`
/// - `trace_recover` - a recovery tier fired for the rule at `level`
/// - `trace_error` - a parse error was accepted into the run's list
/// - `trace_error_dropped` - a parse error duplicated an earlier start
pub trait Tracer {
    fn trace_enter(&mut self, level: usize, label: &str, location: InputLocation);

    fn trace_exit(&mut self, level: usize, label: &str, matched: bool, location: InputLocation);

    fn trace_action(&mut self, level: usize, label: &str, location: InputLocation);

    fn trace_recover(&mut self, level: usize, recovery: Recovery, location: InputLocation);

    fn trace_error(&mut self, level: usize, message: &str, location: InputLocation);

    fn trace_error_dropped(&mut self, level: usize, location: InputLocation);
}

/// Tracer that records nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _level: usize, _label: &str, _location: InputLocation) {}

    #[inline(always)]
    fn trace_exit(&mut self, _level: usize, _label: &str, _matched: bool, _location: InputLocation) {}

    #[inline(always)]
    fn trace_action(&mut self, _level: usize, _label: &str, _location: InputLocation) {}

    #[inline(always)]
    fn trace_recover(&mut self, _level: usize, _recovery: Recovery, _location: InputLocation) {}

    #[inline(always)]
    fn trace_error(&mut self, _level: usize, _message: &str, _location: InputLocation) {}

    #[inline(always)]
    fn trace_error_dropped(&mut self, _level: usize, _location: InputLocation) {}
}

/// Tracer that collects one indented line per event.
///
/// ```text
/// > Sum @0
///   > Number @0
///   < Number ok @2
/// < Sum ok @2
/// ```
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, level: usize, body: String, location: InputLocation) {
        let at = format!("@{}", location.index);
        let mut line = format!("{}{body} {}", "  ".repeat(level), self.colors.paint(Style::Faint, at));
        if self.verbosity == Verbosity::VeryVerbose {
            line.push_str(&format!(" {}", location.current));
        }
        self.lines.push(line);
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, level: usize, label: &str, location: InputLocation) {
        let label = self.colors.paint(Style::Label, label);
        self.push(level, format!("> {label}"), location);
    }

    fn trace_exit(&mut self, level: usize, label: &str, matched: bool, location: InputLocation) {
        let outcome = if matched {
            self.colors.paint(Style::Success, "ok")
        } else {
            self.colors.paint(Style::Failure, "fail")
        };
        let label = self.colors.paint(Style::Label, label);
        self.push(level, format!("< {label} {outcome}"), location);
    }

    fn trace_action(&mut self, level: usize, label: &str, location: InputLocation) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.push(level, format!("= action {label}"), location);
    }

    fn trace_recover(&mut self, level: usize, recovery: Recovery, location: InputLocation) {
        let line = format!("! recover {recovery}");
        let line = self.colors.paint(Style::Failure, line).to_string();
        self.push(level, line, location);
    }

    fn trace_error(&mut self, level: usize, message: &str, location: InputLocation) {
        let marker = self.colors.paint(Style::Failure, "! error");
        self.push(level, format!("{marker} {message}"), location);
    }

    fn trace_error_dropped(&mut self, level: usize, location: InputLocation) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.push(level, "! duplicate error".to_owned(), location);
    }
}
