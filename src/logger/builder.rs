//! Stepwise construction of a [`Logger`]. Terminal output gets its own
//! sub-builder; anything else implementing [`Output`] goes through
//! [`LoggerBuilder::output`].

use super::{GateMode, Logger};
use crate::caller::CallerSource;
use crate::category::{Category, CategoryMask};
use crate::fmt::Color;
use crate::output::{Output, Target, TerminalOutput};
use std::collections::HashMap;
use std::sync::atomic::AtomicU32;

pub struct LoggerBuilder {
    mask: CategoryMask,
    gate: GateMode,
    caller_source: CallerSource,
    source_suffix: String,
    labels: HashMap<Category, String>,
    colors: HashMap<Category, Color>,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Every category enabled, `Trace` as the master gate, call-site hints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: CategoryMask::ALL,
            gate: GateMode::default(),
            caller_source: CallerSource::default(),
            source_suffix: String::new(),
            labels: HashMap::new(),
            colors: HashMap::new(),
            outputs: Vec::new(),
        }
    }

    /// Initial mask. The logger can still change it after build.
    #[must_use]
    pub const fn categories(mut self, mask: CategoryMask) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub const fn gate(mut self, gate: GateMode) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub const fn caller_source(mut self, source: CallerSource) -> Self {
        self.caller_source = source;
        self
    }

    /// Appended to the first part of every caller hint, e.g. `".rs"`.
    #[must_use]
    pub fn source_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    /// Overrides the bracketed label for one category.
    #[must_use]
    pub fn label(mut self, category: Category, label: impl Into<String>) -> Self {
        self.labels.insert(category, label.into());
        self
    }

    /// Overrides the line color for one category.
    #[must_use]
    pub fn color(mut self, category: Category, color: Color) -> Self {
        self.colors.insert(category, color);
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            mask: AtomicU32::new(self.mask.bits()),
            gate: self.gate,
            caller_source: self.caller_source,
            source_suffix: self.source_suffix,
            labels: self.labels,
            colors: self.colors,
            outputs: self.outputs,
        }
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    /// Line layout, e.g. `"{timestamp}{tag}{caller}: {msg}"`.
    #[must_use]
    pub fn structure(mut self, template: &str) -> Self {
        self.output = self.output.template(template);
        self
    }

    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.output = self.output.target(target);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
