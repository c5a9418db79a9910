//! Console output. Each line is painted in its record's color, the way a
//! browser console applies a `%c` style to everything after it.

use super::{LogRecord, Output, RecordKind};
use crate::fmt::{FormatTemplate, colorize};
use std::io::{self, Write};

/// Stream the terminal output writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    template: FormatTemplate,
    target: Target,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            template: FormatTemplate::default(),
            target: Target::Stdout,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Layout for categorized lines.
    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub const fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Lines ready to print, colored unless colors are off. Tables stay uncolored.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> Vec<String> {
        let lines = record.render(&self.template);
        if !self.colors_enabled || matches!(record.kind, RecordKind::Table(_)) {
            return lines;
        }
        lines
            .iter()
            .map(|line| colorize(line, record.color))
            .collect()
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let lines = self.format_record(record);
        match self.target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
            }
            Target::Stderr => {
                let mut out = io::stderr().lock();
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
