//! Rendering a log line touches colors, templates, clock formatting, and table
//! layout. Each concern lives in its own module.

mod color;
mod format;
pub mod table;
pub mod timestamp;

pub use color::{Color, colorize};
pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use table::render_table;
pub use timestamp::{format_clock, now};
