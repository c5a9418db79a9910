//! Sinks for rendered lines. The `Output` trait lets embedders route lines
//! somewhere other than the console without touching the logger.

mod memory;
mod terminal;

pub use memory::MemoryOutput;
pub use terminal::{Target, TerminalOutput};

use crate::caller::CallerHint;
use crate::category::Category;
use crate::fmt::{Color, FormatTemplate, FormatValues};

/// What kind of line a record produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// Timestamp, category tag, caller hint, payload, laid out by the output's template.
    Categorized,
    /// Timestamp followed by the payload. No tag, no caller hint.
    Trace,
    /// Pre-rendered table rows, optionally preceded by the description as a caption.
    Table(Vec<String>),
}

/// Built per call, rendered, then dropped.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub kind: RecordKind,
    pub category: Category,
    /// Display label for the bracketed tag.
    pub label: String,
    pub color: Color,
    pub timestamp: String,
    pub caller: CallerHint,
    pub message: String,
    pub description: Option<String>,
}

impl LogRecord {
    /// Message with the description, if any, as a `description: ` prefix.
    #[must_use]
    pub fn payload(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("{description}: {}", self.message)
            }
            _ => self.message.clone(),
        }
    }

    /// Plain-text lines for this record. Categorized records go through `template`.
    #[must_use]
    pub fn render(&self, template: &FormatTemplate) -> Vec<String> {
        match &self.kind {
            RecordKind::Categorized => {
                let values = FormatValues::new()
                    .timestamp(&self.timestamp)
                    .tag(format!("[{}]", self.label))
                    .category(self.category.as_str())
                    .caller(self.caller.to_string())
                    .msg(self.payload());
                vec![template.render(&values)]
            }
            RecordKind::Trace => vec![format!("{}{}", self.timestamp, self.payload())],
            RecordKind::Table(rows) => {
                let caption = self.description.iter().filter(|d| !d.is_empty()).cloned();
                caption.chain(rows.iter().cloned()).collect()
            }
        }
    }
}

/// `Send + Sync` so a `Logger` can be shared across threads.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
