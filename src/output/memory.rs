//! In-memory sink. Clones share one buffer, so a caller can hand one clone to
//! the builder and read lines back through another.

use super::{LogRecord, Output, RecordKind};
use crate::fmt::{FormatTemplate, colorize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
    colors_enabled: bool,
    template: FormatTemplate,
}

impl MemoryOutput {
    /// Plain text, default template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.buffer())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock leaves the Vec intact.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Output for MemoryOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut lines = record.render(&self.template);
        if self.colors_enabled && !matches!(record.kind, RecordKind::Table(_)) {
            for line in &mut lines {
                *line = colorize(line, record.color);
            }
        }
        self.buffer().extend(lines);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
