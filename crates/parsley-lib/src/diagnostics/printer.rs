//! Builder-pattern printer for rendering parse errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use parsley_core::InputBuffer;
use parsley_vm::ParseError;

/// Builder for rendering parse errors with various options.
///
/// With snippets on (the default) every error is drawn under the source
/// line it points at. With snippets off each error is one
/// `line:column: message` line.
pub struct DiagnosticsPrinter<'d, V> {
    errors: &'d [ParseError<V>],
    input: &'d InputBuffer,
    path: Option<&'d str>,
    colored: bool,
    snippets: bool,
}

impl<'d, V> DiagnosticsPrinter<'d, V> {
    pub fn new(errors: &'d [ParseError<V>], input: &'d InputBuffer) -> Self {
        Self {
            errors,
            input,
            path: None,
            colored: false,
            snippets: true,
        }
    }

    pub fn path(mut self, path: &'d str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn snippets(mut self, value: bool) -> Self {
        self.snippets = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if !self.snippets {
            return self.format_plain(w);
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, error) in self.errors.iter().enumerate() {
            let mut snippet = Snippet::source(self.input.text())
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(byte_range(error, self.input)));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let report: Vec<Group> =
                vec![Level::ERROR.primary_title(error.message()).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let position = error.position(self.input);
            if let Some(p) = self.path {
                write!(w, "{p}:")?;
            }
            write!(w, "{}:{}: {}", position.line, position.column, error.message())?;
        }
        Ok(())
    }
}

/// Byte span of an error. Empty spans are widened to the char they sit on.
fn byte_range<V>(error: &ParseError<V>, input: &InputBuffer) -> Range<usize> {
    let start = error.start().index;
    let end = error.end().index;
    if end <= start {
        return input.byte_offset(start)..input.byte_offset(start + 1);
    }
    input.byte_offset(start)..input.byte_offset(end)
}
