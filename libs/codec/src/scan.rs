//! Locating ULID-shaped tokens in free text.
//!
//! A token is ULID-shaped when it is 26 uppercase Crockford symbols and the
//! leading symbol is `0`–`7`. Shape does not depend on word boundaries, so a
//! ULID glued to other symbols is still found.

use std::sync::OnceLock;

use regex::Regex;

/// Pattern for a ULID-shaped token.
pub const ULID_PATTERN: &str = "[0-7][0-9A-HJKMNP-TV-Z]{25}";

fn ulid_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ULID_PATTERN).expect("ULID pattern is valid"))
}

fn whole_ulid_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("^{ULID_PATTERN}$")).expect("ULID pattern is valid"))
}

/// A ULID-shaped token and its byte range in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UlidMatch<'t> {
    start: usize,
    end: usize,
    text: &'t str,
}

impl<'t> UlidMatch<'t> {
    /// Byte offset of the first symbol.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the last symbol.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The matched token.
    #[must_use]
    pub const fn as_str(&self) -> &'t str {
        self.text
    }
}

impl<'t> From<regex::Match<'t>> for UlidMatch<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Self {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        }
    }
}

/// Returns true if the whole of `s` is ULID-shaped.
#[must_use]
pub fn is_ulid_shaped(s: &str) -> bool {
    whole_ulid_regex().is_match(s)
}

/// Finds every non-overlapping ULID-shaped token in `text`.
#[must_use]
pub fn find_all(text: &str) -> Vec<UlidMatch<'_>> {
    ulid_regex().find_iter(text).map(UlidMatch::from).collect()
}

/// Finds the ULID-shaped token under the cursor at byte `offset`.
///
/// A cursor sitting right after the last symbol still counts as inside the
/// token.
#[must_use]
pub fn find_at(text: &str, offset: usize) -> Option<UlidMatch<'_>> {
    ulid_regex()
        .find_iter(text)
        .take_while(|m| m.start() <= offset)
        .find(|m| offset <= m.end())
        .map(UlidMatch::from)
}
