//! The layout of a categorized line is a template such as
//! `{timestamp}{tag}{caller}: {msg}`, so projects can reorder or drop columns
//! without touching the logger.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `[HH:MM:SS:mmm]`
    Timestamp,
    /// Bracketed category label, e.g. `[network log]`.
    Tag,
    /// Raw category name, e.g. `net`.
    Category,
    /// Caller hint, possibly empty.
    Caller,
    Msg,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Tag => "tag",
            Self::Category => "category",
            Self::Caller => "caller",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Tag,
        Self::Category,
        Self::Caller,
        Self::Msg,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and unknown `{names}` pass through untouched.
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed once, rendered for every line.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Layout used for categorized lines unless configured otherwise.
    pub const DEFAULT: &'static str = "{timestamp}{tag}{caller}: {msg}";

    /// Turns `"{timestamp}{tag} {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }

            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Tag => &values.tag,
                        Placeholder::Category => &values.category,
                        Placeholder::Caller => &values.caller,
                        Placeholder::Msg => &values.msg,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

/// One field per placeholder, so a typo is a compile error rather than a blank column.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub tag: String,
    pub category: String,
    pub caller: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}
