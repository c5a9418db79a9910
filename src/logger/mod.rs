//! The logger owns the enabled-category mask and fans every record out to its
//! outputs. Build one with [`Logger::builder`] or [`Logger::from_config`].

mod builder;
mod from_config;

pub use builder::{LoggerBuilder, TerminalBuilder};

use crate::caller::{CallerHint, CallerSource};
use crate::category::{Category, CategoryMask};
use crate::fmt::{self, Color, render_table};
use crate::output::{LogRecord, Output, RecordKind};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};

/// Which bit decides whether a categorized line is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateMode {
    /// Only the `Trace` bit counts, whatever the line's own category.
    /// Clearing `Trace` silences every category.
    #[default]
    Trace,
    /// Only the line's own category bit counts.
    Category,
}

impl std::str::FromStr for GateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" | "master" => Ok(Self::Trace),
            "category" | "own" => Ok(Self::Category),
            _ => Err(format!("unknown gate mode: '{s}'")),
        }
    }
}

/// Category-gated console logger.
///
/// Everything except the mask is fixed at build time. The mask lives in an
/// atomic, so a shared `&Logger` can be reconfigured from any thread.
pub struct Logger {
    mask: AtomicU32,
    gate: GateMode,
    caller_source: CallerSource,
    source_suffix: String,
    labels: HashMap<Category, String>,
    colors: HashMap<Category, Color>,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for Logger {
    /// All categories enabled, no outputs.
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Enables every category. Safe to call repeatedly.
    pub fn initialize(&self) {
        self.mask.store(CategoryMask::ALL.bits(), Ordering::Relaxed);
    }

    /// Replaces the mask wholesale. `None` leaves it untouched.
    pub fn set_enabled_categories(&self, mask: Option<CategoryMask>) {
        if let Some(mask) = mask {
            self.mask.store(mask.bits(), Ordering::Relaxed);
        }
    }

    /// Turns one category on without touching the others.
    pub fn enable(&self, category: Category) {
        self.mask.fetch_or(category.bit(), Ordering::Relaxed);
    }

    /// Turns one category off without touching the others.
    pub fn disable(&self, category: Category) {
        self.mask.fetch_and(!category.bit(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn enabled_categories(&self) -> CategoryMask {
        CategoryMask::from_bits(self.mask.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled_categories().contains(category)
    }

    /// Whether a categorized line of `category` would be printed right now.
    #[must_use]
    pub fn would_emit(&self, category: Category) -> bool {
        match self.gate {
            GateMode::Trace => self.is_enabled(Category::Trace),
            GateMode::Category => self.is_enabled(category),
        }
    }

    #[must_use]
    pub const fn gate_mode(&self) -> GateMode {
        self.gate
    }

    #[must_use]
    pub const fn caller_source(&self) -> CallerSource {
        self.caller_source
    }

    /// Label shown in the bracketed tag for `category`.
    #[must_use]
    pub fn label(&self, category: Category) -> &str {
        self.labels
            .get(&category)
            .map_or_else(|| category.label(), String::as_str)
    }

    /// Color used for lines of `category`.
    #[must_use]
    pub fn color(&self, category: Category) -> Color {
        self.colors
            .get(&category)
            .copied()
            .unwrap_or_else(|| Color::for_category(category))
    }

    /// Prints `msg` after a timestamp, in the trace color, when `Trace` is enabled.
    pub fn trace(&self, msg: impl Display) {
        self.trace_with_color(msg, self.color(Category::Trace));
    }

    /// Like [`Logger::trace`] with an explicit color.
    pub fn trace_with_color(&self, msg: impl Display, color: Color) {
        if !self.is_enabled(Category::Trace) {
            return;
        }
        self.dispatch(&LogRecord {
            kind: RecordKind::Trace,
            category: Category::Trace,
            label: self.label(Category::Trace).to_string(),
            color,
            timestamp: fmt::now(),
            caller: CallerHint::Empty,
            message: msg.to_string(),
            description: None,
        });
    }

    /// Prints `value` as a text table when `Trace` is enabled. `description`
    /// becomes a caption line. Values that fail to serialize are skipped.
    pub fn table<T: Serialize + ?Sized>(&self, value: &T, description: Option<&str>) {
        let _ = self.try_table(value, description);
    }

    /// Like [`Logger::table`] but reports values that can't be serialized.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialize`] when `value` has no JSON form,
    /// e.g. a map with non-string keys.
    pub fn try_table<T: Serialize + ?Sized>(
        &self,
        value: &T,
        description: Option<&str>,
    ) -> Result<(), crate::Error> {
        if !self.is_enabled(Category::Trace) {
            return Ok(());
        }
        let value = serde_json::to_value(value)?;
        self.dispatch(&LogRecord {
            kind: RecordKind::Table(render_table(&value)),
            category: Category::Trace,
            label: self.label(Category::Trace).to_string(),
            color: self.color(Category::Trace),
            timestamp: fmt::now(),
            caller: CallerHint::Empty,
            message: String::new(),
            description: description.map(ToString::to_string),
        });
        Ok(())
    }

    /// Shared routine behind the per-category methods: gate, then format a
    /// line with timestamp, tag, caller hint, and payload.
    #[track_caller]
    pub fn log(&self, category: Category, msg: impl Display, description: Option<&str>) {
        if !self.would_emit(category) {
            return;
        }
        let caller = self
            .caller_source
            .resolve(Location::caller())
            .with_suffix(&self.source_suffix);
        self.dispatch(&LogRecord {
            kind: RecordKind::Categorized,
            category,
            label: self.label(category).to_string(),
            color: self.color(category),
            timestamp: fmt::now(),
            caller,
            message: msg.to_string(),
            description: description.map(ToString::to_string),
        });
    }

    #[track_caller]
    pub fn net(&self, msg: impl Display) {
        self.log(Category::Net, msg, None);
    }

    #[track_caller]
    pub fn net_with(&self, msg: impl Display, description: Option<&str>) {
        self.log(Category::Net, msg, description);
    }

    #[track_caller]
    pub fn model(&self, msg: impl Display) {
        self.log(Category::Model, msg, None);
    }

    #[track_caller]
    pub fn model_with(&self, msg: impl Display, description: Option<&str>) {
        self.log(Category::Model, msg, description);
    }

    #[track_caller]
    pub fn business(&self, msg: impl Display) {
        self.log(Category::Business, msg, None);
    }

    #[track_caller]
    pub fn business_with(&self, msg: impl Display, description: Option<&str>) {
        self.log(Category::Business, msg, description);
    }

    #[track_caller]
    pub fn view(&self, msg: impl Display) {
        self.log(Category::View, msg, None);
    }

    #[track_caller]
    pub fn view_with(&self, msg: impl Display, description: Option<&str>) {
        self.log(Category::View, msg, description);
    }

    #[track_caller]
    pub fn config(&self, msg: impl Display) {
        self.log(Category::Config, msg, None);
    }

    #[track_caller]
    pub fn config_with(&self, msg: impl Display, description: Option<&str>) {
        self.log(Category::Config, msg, description);
    }

    /// Sink errors are dropped here; [`Logger::flush`] still reports them.
    fn dispatch(&self, record: &LogRecord) {
        for output in &self.outputs {
            let _ = output.write(record);
        }
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
