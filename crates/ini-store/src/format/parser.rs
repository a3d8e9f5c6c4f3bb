//! Line-oriented parser for the INI text format.
//!
//! The parser walks lines in order with a single piece of state: the name of
//! the most recently declared section (the "current section" cursor).  There
//! is no lookahead and no recovery – the first malformed line aborts the
//! parse with a [`ParseError`] carrying its 1-based line number.

use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::store::ConfigStore;

/// The literal key-value separator: space, equals, space.
const SEPARATOR: &str = " = ";

/// Comment marker – a line whose first character is `;` is ignored.
const COMMENT_CHAR: char = ';';

/// Errors that can occur while parsing INI text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A key-value line lacks the ` = ` separator.
    #[error("line {line}: missing ` = ` separator in {content:?}")]
    MissingSeparator { line: usize, content: String },

    /// A key-value line appeared before any section header was declared.
    #[error("line {line}: key-value pair before any section header")]
    KeyValueBeforeSection { line: usize },

    /// A section header opened with `[` but the line does not end with `]`.
    #[error("line {line}: unterminated section header {content:?}")]
    UnterminatedHeader { line: usize, content: String },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Splits a key-value line on the first occurrence of the ` = ` separator.
///
/// Only the first occurrence splits; a value like `"a = b"` in
/// `key = a = b` stays intact as the value's tail.  Keys and values are
/// taken verbatim – no trimming.
///
/// # Errors
///
/// Returns [`ParseError::MissingSeparator`] when the separator is absent.
/// `line` is the 1-based line number reported in the error.
pub fn split_key_value(content: &str, line: usize) -> Result<(&str, &str), ParseError> {
    content
        .split_once(SEPARATOR)
        .ok_or_else(|| ParseError::MissingSeparator {
            line,
            content: content.to_string(),
        })
}

impl ConfigStore {
    /// Parses `content` into this store, appending to whatever it already
    /// holds.
    ///
    /// The content is split on `'\n'`; trailing empty lines produced by a
    /// trailing newline fall to the blank-line skip rule.  For one-shot
    /// parsing of a fresh store, `content.parse::<ConfigStore>()` is
    /// equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on the first malformed line.  The store may
    /// contain entries from lines preceding the error.
    pub fn load_from_str(&mut self, content: &str) -> Result<(), ParseError> {
        self.parse_lines(content.split('\n'))
    }

    /// Parses an ordered sequence of lines, maintaining the current-section
    /// cursor across them.
    fn parse_lines<'a>(
        &mut self,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), ParseError> {
        // The cursor starts unset: key-value lines are rejected until the
        // first header declares a section.
        let mut current: Option<String> = None;

        for (idx, raw) in lines.into_iter().enumerate() {
            let line_no = idx + 1;

            if raw.is_empty() || raw.starts_with(COMMENT_CHAR) {
                continue;
            }

            if let Some(rest) = raw.strip_prefix('[') {
                // Header line.  The name is everything between the brackets;
                // it may be empty and is never trimmed.
                let name = rest.strip_suffix(']').ok_or_else(|| {
                    ParseError::UnterminatedHeader {
                        line: line_no,
                        content: raw.to_string(),
                    }
                })?;
                trace!(section = name, line = line_no, "declaring section");
                self.declare_section(name);
                current = Some(name.to_string());
                continue;
            }

            let (key, value) = split_key_value(raw, line_no)?;
            let section = current
                .as_deref()
                .ok_or(ParseError::KeyValueBeforeSection { line: line_no })?;
            self.set(section, key, value);
        }

        Ok(())
    }
}

impl FromStr for ConfigStore {
    type Err = ParseError;

    /// Parses a complete INI document into a fresh store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_store::ConfigStore;
    ///
    /// let store: ConfigStore = "[net]\nport = 8080\n".parse().unwrap();
    /// assert_eq!(store.get("net", "port"), Some("8080"));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut store = ConfigStore::new();
        store.load_from_str(s)?;
        Ok(store)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
