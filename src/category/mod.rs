//! Functional categories that gate which messages reach the console.
//!
//! Each category owns one bit so any combination can be enabled at once; the
//! `None` sentinel of the bit scheme is [`CategoryMask::NONE`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// Bit values follow declaration order: `Net = 1` through `Trace = 32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Requests, sockets, and wire-level traffic.
    Net = 1,
    /// Data structures and their state changes.
    Model = 2,
    /// Business rules and workflow decisions.
    Business = 4,
    /// Screens, widgets, and presentation updates.
    View = 8,
    /// Configuration loading and changes.
    Config = 16,
    /// Plain tracing output. Also the master switch for every categorized line.
    Trace = 32,
}

impl Category {
    /// Lowercase because config files and CLI args use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Net => "net",
            Self::Model => "model",
            Self::Business => "business",
            Self::View => "view",
            Self::Config => "config",
            Self::Trace => "trace",
        }
    }

    /// The single bit this category occupies in a [`CategoryMask`].
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Default display label used for the bracketed tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Net => "network log",
            Self::Model => "data log",
            Self::Business => "business log",
            Self::View => "view log",
            Self::Config => "config log",
            Self::Trace => "trace log",
        }
    }

    /// Looks up the category owning exactly `bit`.
    #[must_use]
    pub fn from_bit(bit: u32) -> Option<Self> {
        Self::all().into_iter().find(|c| c.bit() == bit)
    }

    /// Declaration order, which is also ascending bit order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Net,
            Self::Model,
            Self::Business,
            Self::View,
            Self::Config,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell an unknown category name apart from other failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl ParseCategoryError {
    /// The rejected input, verbatim.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "net" | "network" => Ok(Self::Net),
            "model" | "data" => Ok(Self::Model),
            "business" | "biz" => Ok(Self::Business),
            "view" => Ok(Self::View),
            "config" | "cfg" => Ok(Self::Config),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Bitwise OR of enabled categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryMask(u32);

impl CategoryMask {
    /// Silences everything.
    pub const NONE: Self = Self(0);

    /// Union of every known category.
    pub const ALL: Self = Self(
        Category::Net.bit()
            | Category::Model.bit()
            | Category::Business.bit()
            | Category::View.bit()
            | Category::Config.bit()
            | Category::Trace.bit(),
    );

    /// Unknown bits are dropped so the mask only ever holds known categories.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn with(self, category: Category) -> Self {
        Self(self.0 | category.bit())
    }

    #[must_use]
    pub const fn without(self, category: Category) -> Self {
        Self(self.0 & !category.bit())
    }

    /// Enabled categories in ascending bit order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::all().into_iter().filter(move |c| self.contains(*c))
    }
}

impl From<Category> for CategoryMask {
    fn from(category: Category) -> Self {
        Self(category.bit())
    }
}

impl FromIterator<Category> for CategoryMask {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl BitOr for CategoryMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Category> for CategoryMask {
    type Output = Self;

    fn bitor(self, rhs: Category) -> Self {
        self.with(rhs)
    }
}

impl BitOr for Category {
    type Output = CategoryMask;

    fn bitor(self, rhs: Self) -> CategoryMask {
        CategoryMask::from(self).with(rhs)
    }
}

impl BitOrAssign<Category> for CategoryMask {
    fn bitor_assign(&mut self, rhs: Category) {
        *self = self.with(rhs);
    }
}

impl BitAnd for CategoryMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for CategoryMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl fmt::Display for CategoryMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Category::as_str).collect();
        f.write_str(&names.join("|"))
    }
}

/// Accepts `none`, `all`, a raw number, or names joined by `|` or `,`.
impl FromStr for CategoryMask {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "none" => return Ok(Self::NONE),
            "all" => return Ok(Self::ALL),
            _ => {}
        }
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Ok(Self::from_bits(bits));
        }
        trimmed
            .split(['|', ','])
            .filter(|part| !part.trim().is_empty())
            .map(str::parse::<Category>)
            .collect()
    }
}
