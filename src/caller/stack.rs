//! Caller hints recovered from stack traces.
//!
//! Frames are reduced to a `(name, location)` pair. A qualified name
//! (`Type::method`, `Class.method`) yields a two-part hint; otherwise the bare
//! file name of the location is used.

use super::{CallerHint, file_stem};
use regex::Regex;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::LazyLock;

/// Frames to skip in a raw trace before reaching the caller: the capture
/// itself plus the logger's own call chain.
pub const STACK_SKIP_DEPTH: usize = 5;

/// `  12: crate::module::function`
static FRAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+:\s+(.+?)\s*$").expect("Invalid frame regex"));

/// `             at ./src/lib.rs:10:5`
static LOCATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+at\s+(.+?)\s*$").expect("Invalid location regex"));

/// Mangling hash left on some symbol names.
static HASH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("Invalid hash regex"));

/// Frames from these prefixes belong to the capture machinery or the logger.
const INTERNAL_PREFIXES: &[&str] = &[
    "std::backtrace",
    "std::sys::backtrace",
    "core::",
    "catlog::",
    "<catlog::",
];

/// One stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub location: Option<String>,
}

impl Frame {
    /// Splits `"<name> <location>"` at the first whitespace outside `<...>`.
    /// Leading `at ` is dropped.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let line = line.strip_prefix("at ").unwrap_or(line).trim_start();
        match split_name(line) {
            Some((name, location)) => Self {
                name: name.to_string(),
                location: Some(location.trim().to_string()),
            },
            None => Self {
                name: line.to_string(),
                location: None,
            },
        }
    }

    /// Two trailing segments of a qualified name, if there are at least two.
    fn qualified_parts(&self) -> Option<(String, String)> {
        let mut segments = symbol_segments(&self.name);
        let member = segments.pop()?;
        let owner = segments.pop()?;
        Some((owner, member))
    }

    fn hint(&self) -> CallerHint {
        if let Some((owner, member)) = self.qualified_parts() {
            return CallerHint::Pair(owner, member);
        }
        let location = self
            .location
            .as_deref()
            .map(|l| l.trim_matches(['(', ')']));
        match location {
            Some(location) if !location.is_empty() => {
                CallerHint::Single(file_stem(location).to_string())
            }
            _ if !self.name.is_empty() => CallerHint::Single(self.name.clone()),
            _ => CallerHint::Empty,
        }
    }
}

/// Splits at the first whitespace that isn't inside angle brackets, so
/// `<app::Foo as app::Bar>::baz src/foo.rs` keeps its qualified name whole.
fn split_name(line: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in line.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                return Some((&line[..i], &line[i + c.len_utf8()..]));
            }
            _ => {}
        }
    }
    None
}

/// Path segments of a symbol without trait qualifier, generic arguments,
/// closure markers, or mangling hash.
///
/// `<app::Foo as app::Handler>::handle` gives `["app", "Foo", "handle"]`;
/// `app::run::{{closure}}` gives `["app", "run"]`; `Foo.bar` gives `["Foo", "bar"]`.
fn symbol_segments(name: &str) -> Vec<String> {
    let name = HASH_SUFFIX.replace(name, "");
    let path = strip_generics(&unqualify(&name));
    let separator = if path.contains("::") { "::" } else { "." };
    path.split(separator)
        .filter(|segment| !segment.is_empty() && !segment.starts_with("{{"))
        .map(ToString::to_string)
        .collect()
}

/// `<T as Trait>::method` becomes `T::method`. Other names pass through.
fn unqualify(name: &str) -> String {
    let Some(inner) = name.strip_prefix('<') else {
        return name.to_string();
    };
    let Some(close) = closing_angle(inner) else {
        return name.to_string();
    };
    let self_type = &inner[..close];
    let self_type = self_type.split_once(" as ").map_or(self_type, |(ty, _)| ty);
    let self_type = self_type.trim_start_matches('&').trim_start_matches("mut ");
    format!("{self_type}{}", &inner[close + 1..])
}

/// Index of the `>` that closes an already-open `<`.
fn closing_angle(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_generics(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut depth = 0usize;
    for c in path.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Picks `frames[skip]` and turns it into a hint. Too few frames yields `Empty`.
#[must_use]
pub fn hint_from_frames(frames: &[Frame], skip: usize) -> CallerHint {
    frames.get(skip).map_or(CallerHint::Empty, Frame::hint)
}

/// Parses a textual trace, one frame per line, and applies [`STACK_SKIP_DEPTH`].
///
/// The caller frame only counts when at least one frame follows it, so a
/// trace that ends on the caller yields `Empty`. Blank lines are ignored.
#[must_use]
pub fn hint_from_trace(trace: &str) -> CallerHint {
    let frames: Vec<Frame> = trace
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Frame::parse)
        .collect();
    if frames.len() <= STACK_SKIP_DEPTH + 1 {
        return CallerHint::Empty;
    }
    hint_from_frames(&frames, STACK_SKIP_DEPTH)
}

/// Frames of the current thread's stack, innermost first.
///
/// Returns nothing when the platform can't produce a backtrace.
#[must_use]
pub fn capture_frames() -> Vec<Frame> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    parse_backtrace(&backtrace.to_string())
}

/// Parses std's `Backtrace` display format: a numbered symbol line, then an
/// optional indented `at file:line:col` line.
#[must_use]
pub fn parse_backtrace(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    for line in text.lines() {
        if let Some(caps) = LOCATION_LINE.captures(line) {
            if let Some(frame) = frames.last_mut()
                && frame.location.is_none()
            {
                frame.location = Some(caps[1].to_string());
            }
        } else if let Some(caps) = FRAME_LINE.captures(line) {
            frames.push(Frame {
                name: caps[1].to_string(),
                location: None,
            });
        }
    }
    frames
}

/// Hint for the first frame outside the capture machinery and the logger.
#[must_use]
pub fn resolve() -> CallerHint {
    let frames = capture_frames();
    let first_external = frames
        .iter()
        .position(|f| !INTERNAL_PREFIXES.iter().any(|p| f.name.starts_with(p)));
    first_external.map_or(CallerHint::Empty, |i| hint_from_frames(&frames[i..], 0))
}
