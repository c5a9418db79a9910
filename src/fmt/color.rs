//! Each category prints in its own 24-bit color so a busy console can be
//! scanned by eye.

use crate::category::Category;
use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so the category palette can be compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Config files specify colors as `#RRGGBB` hex strings. Falls back to
    /// white on malformed input so a typo in config doesn't break rendering.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or_else(Self::white)
    }

    /// Strict variant of [`Color::from_hex`] for callers that want to report bad input.
    #[must_use]
    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape; callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Default for `trace` output.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(0xff, 0xff, 0xff)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(0xff, 0x61, 0x00)
    }

    #[must_use]
    pub const fn violet() -> Self {
        Self::new(0xff, 0x00, 0xff)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(0x00, 0xff, 0xff)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(0x00, 0xff, 0x00)
    }

    #[must_use]
    pub const fn gray() -> Self {
        Self::new(0x80, 0x80, 0x80)
    }

    /// Fixed color bound to each category's entry point.
    #[must_use]
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Net => Self::orange(),
            Category::Model => Self::violet(),
            Category::Business => Self::cyan(),
            Category::View => Self::green(),
            Category::Config => Self::gray(),
            Category::Trace => Self::white(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Most callers just want "make this text colored" without managing reset sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
