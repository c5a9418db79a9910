//! `catlog` - category-gated, colorized console logging with caller hints.
//!
//! Every line belongs to a functional category (network, data model,
//! business logic, view, configuration, trace). A bit mask decides at runtime
//! which categories reach the console, and each line carries a wall-clock
//! stamp, a bracketed category label, and a short hint naming its call site.
//!
//! # Example
//!
//! ```
//! use catlog::{Category, Logger};
//!
//! let logger = Logger::builder().terminal().colors(false).done().build();
//!
//! logger.net("connected to lobby server");
//! logger.model_with("score=120", Some("player"));
//!
//! logger.set_enabled_categories(Some(Category::Net | Category::Trace));
//! // Still printed: with the default gate only the `Trace` bit counts.
//! logger.view("menu opened");
//! logger.trace("plain trace line");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `catlog` command line tool

pub mod caller;
pub mod category;
pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use caller::{CallerHint, CallerSource};
pub use category::{Category, CategoryMask, ParseCategoryError};
pub use config::Config;
pub use error::Error;
pub use fmt::Color;
pub use logger::{GateMode, Logger, LoggerBuilder};
pub use output::{LogRecord, MemoryOutput, Output, TerminalOutput};
