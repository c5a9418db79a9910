//! The process-wide logger, for code that would rather not thread a
//! `&Logger` through every call.
//!
//! Created on first use with a colored terminal output and every category
//! enabled. [`install`] swaps in a custom logger, but only before that first use.

use crate::category::{Category, CategoryMask};
use crate::fmt::Color;
use crate::logger::Logger;
use serde::Serialize;
use std::fmt::Display;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with defaults if nothing was installed.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::builder().terminal().done().build())
}

/// Installs `logger` as the process-wide logger.
///
/// # Errors
/// Hands `logger` back if the global logger already exists.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// Enables every category on the global logger. Idempotent.
pub fn initialize() {
    logger().initialize();
}

pub fn set_enabled_categories(mask: Option<CategoryMask>) {
    logger().set_enabled_categories(mask);
}

pub fn enable(category: Category) {
    logger().enable(category);
}

pub fn disable(category: Category) {
    logger().disable(category);
}

#[must_use]
pub fn enabled_categories() -> CategoryMask {
    logger().enabled_categories()
}

pub fn trace(msg: impl Display) {
    logger().trace(msg);
}

pub fn trace_with_color(msg: impl Display, color: Color) {
    logger().trace_with_color(msg, color);
}

pub fn table<T: Serialize + ?Sized>(value: &T, description: Option<&str>) {
    logger().table(value, description);
}

#[track_caller]
pub fn net(msg: impl Display, description: Option<&str>) {
    logger().log(Category::Net, msg, description);
}

#[track_caller]
pub fn model(msg: impl Display, description: Option<&str>) {
    logger().log(Category::Model, msg, description);
}

#[track_caller]
pub fn business(msg: impl Display, description: Option<&str>) {
    logger().log(Category::Business, msg, description);
}

#[track_caller]
pub fn view(msg: impl Display, description: Option<&str>) {
    logger().log(Category::View, msg, description);
}

#[track_caller]
pub fn config(msg: impl Display, description: Option<&str>) {
    logger().log(Category::Config, msg, description);
}

/// The crate's own notes (config fallbacks and the like), sent to the
/// `Config` category. Dropped if the global logger doesn't exist yet.
#[track_caller]
pub(crate) fn diagnostic(msg: &str) {
    if let Some(logger) = GLOBAL.get() {
        logger.config(msg);
    }
}
