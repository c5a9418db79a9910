//! Caller hints: the short `[file->line]` segment that tells a reader where a
//! line came from.
//!
//! The default source is the call site captured by `#[track_caller]`. The
//! stack-walking heuristic in [`stack`] remains available for callers that
//! want function names instead of line numbers.

pub mod stack;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// Resolved hint, rendered by `Display` as `""`, `"[a]"`, or `"[a->b]"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallerHint {
    #[default]
    Empty,
    Single(String),
    Pair(String, String),
}

impl CallerHint {
    /// `[stem->line]` for the given call site.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::Pair(
            file_stem(location.file()).to_string(),
            location.line().to_string(),
        )
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Appends `suffix` to the first part, e.g. `.rs` to turn a stem back into a filename.
    #[must_use]
    pub fn with_suffix(self, suffix: &str) -> Self {
        if suffix.is_empty() {
            return self;
        }
        match self {
            Self::Empty => Self::Empty,
            Self::Single(name) => Self::Single(format!("{name}{suffix}")),
            Self::Pair(first, second) => Self::Pair(format!("{first}{suffix}"), second),
        }
    }
}

impl fmt::Display for CallerHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Single(name) => write!(f, "[{name}]"),
            Self::Pair(first, second) => write!(f, "[{first}->{second}]"),
        }
    }
}

/// Where the logger gets its caller hint from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerSource {
    /// Call site recorded by `#[track_caller]`.
    #[default]
    Location,
    /// Captured backtrace, first frame outside the logger.
    Stack,
    /// No hint at all.
    None,
}

impl CallerSource {
    /// Resolves the hint for one log call. `location` is the `#[track_caller]` site.
    #[must_use]
    pub fn resolve(self, location: &Location<'_>) -> CallerHint {
        match self {
            Self::Location => CallerHint::from_location(location),
            Self::Stack => stack::resolve(),
            Self::None => CallerHint::Empty,
        }
    }
}

impl FromStr for CallerSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "location" | "loc" => Ok(Self::Location),
            "stack" | "backtrace" => Ok(Self::Stack),
            "none" | "off" => Ok(Self::None),
            _ => Err(format!("unknown caller source: '{s}'")),
        }
    }
}

/// Bare file name without directory or extension.
///
/// The directory is cut at the last `/` or `\`, the extension at the last `.`
/// after it. Input without either separator comes back unchanged.
#[must_use]
pub fn file_stem(path: &str) -> &str {
    let start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &path[start..];
    match name.rfind('.') {
        Some(0) | None => name,
        Some(end) => &name[..end],
    }
}
