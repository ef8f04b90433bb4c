//! Text helpers shared by the renderers.

use crate::config::{RenderConfig, RenderStyle};
use crate::error::Result;

/// Lowercase the first character of an identifier, leaving the rest untouched.
///
/// Word boundaries are not converted: `first_name` stays `first_name` and
/// `SocietyName` becomes `societyName`.
pub fn to_camel_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Quote a string literal using JSON escaping, which GraphQL string syntax accepts.
pub(crate) fn quote(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Append-only document buffer that tracks selection depth.
pub(crate) struct Printer<'a> {
    out: String,
    config: &'a RenderConfig,
    depth: usize,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(config: &'a RenderConfig) -> Self {
        Self {
            out: String::with_capacity(128),
            config,
            depth: 0,
        }
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Separate the next token from the previous one.
    pub(crate) fn line(&mut self) {
        match self.config.style {
            RenderStyle::Compact => self.out.push(' '),
            RenderStyle::Pretty => {
                self.out.push('\n');
                for _ in 0..self.depth {
                    self.out.push_str(&self.config.indent);
                }
            }
        }
    }

    /// Open a selection set.
    pub(crate) fn open(&mut self) {
        self.out.push_str(" {");
        self.depth += 1;
    }

    /// Close the innermost selection set.
    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line();
        self.out.push('}');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
