//! Placeholder scanning.
//!
//! Splits text into literal spans and `${NAME}` placeholders in a single
//! left-to-right pass. Matches are non-overlapping and leftmost: a `${` is
//! closed by the first `}` that follows it, and must enclose at least one
//! character. Anything else (`${}`, an unclosed `${`, a lone `$`) is literal.

/// A `${NAME}` placeholder found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The whole matched text, including `${` and `}`.
    pub token: &'a str,
    /// The variable name between the braces.
    pub name: &'a str,
}

/// One piece of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A placeholder to substitute.
    Placeholder(Placeholder<'a>),
}

impl<'a> Segment<'a> {
    /// The input text this segment was produced from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        match *self {
            Self::Literal(text) => text,
            Self::Placeholder(placeholder) => placeholder.token,
        }
    }
}

/// Lazy iterator over the segments of a string.
///
/// Empty literal spans are never yielded, so an input with no placeholders
/// yields exactly one literal (or nothing, for the empty string).
///
/// # Examples
///
/// ```
/// use ytfetch::expand::scan::{segments, Segment};
///
/// let parts: Vec<_> = segments("${HOME}/music/song.mp3").collect();
/// assert_eq!(parts.len(), 2);
/// assert!(matches!(parts[0], Segment::Placeholder(p) if p.name == "HOME"));
/// assert_eq!(parts[1], Segment::Literal("/music/song.mp3"));
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    pending: Option<Placeholder<'a>>,
}

/// Scan `text` into literal and placeholder segments.
#[must_use]
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        rest: text,
        pending: None,
    }
}

/// Collect only the placeholders in `text`, in order of appearance.
///
/// # Examples
///
/// ```
/// use ytfetch::expand::scan::placeholders;
///
/// let names: Vec<_> = placeholders("${A}/x/${B}.mp3").map(|p| p.name).collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub fn placeholders(text: &str) -> impl Iterator<Item = Placeholder<'_>> {
    segments(text).filter_map(|segment| match segment {
        Segment::Placeholder(placeholder) => Some(placeholder),
        Segment::Literal(_) => None,
    })
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(placeholder) = self.pending.take() {
            return Some(Segment::Placeholder(placeholder));
        }
        if self.rest.is_empty() {
            return None;
        }

        let Some((start, end)) = find_placeholder(self.rest) else {
            let literal = self.rest;
            self.rest = "";
            return Some(Segment::Literal(literal));
        };

        let literal = &self.rest[..start];
        let token = &self.rest[start..end];
        let placeholder = Placeholder {
            token,
            name: &token[2..token.len() - 1],
        };
        self.rest = &self.rest[end..];

        if literal.is_empty() {
            Some(Segment::Placeholder(placeholder))
        } else {
            self.pending = Some(placeholder);
            Some(Segment::Literal(literal))
        }
    }
}

/// Byte range of the leftmost placeholder in `text`.
fn find_placeholder(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = text[from..].find("${") {
        let start = from + offset;
        let name_start = start + 2;
        // no closing brace anywhere after this point means no later match either
        let close = name_start + text[name_start..].find('}')?;
        if close > name_start {
            return Some((start, close + 1));
        }
        from = start + 1;
    }
    None
}
