//! In-memory configuration store domain entity.
//!
//! A [`ConfigStore`] holds sections in the order their headers were first
//! encountered, and within each section an insertion-ordered map of keys to
//! string values.  It knows nothing about the text format; parsing and
//! serialization live in [`crate::format`].

use std::collections::HashMap;

use indexmap::IndexMap;

/// The key-value entries of a single section, in insertion order.
///
/// Insertion order is what makes serialization deterministic: emitting the
/// same store twice always produces identical text.
pub type SectionEntries = IndexMap<String, String>;

/// An ordered collection of named sections holding string key-value pairs.
///
/// Two pieces of state work together:
///
/// - `section_order` records every section *header* in the order it was seen
///   during parsing, duplicates included.  Serialization replays this list.
/// - `sections` maps each section name to its current entries.  Keys are
///   unique within a section; setting an existing key overwrites (last write
///   wins).
///
/// The two are deliberately decoupled: [`ConfigStore::set`] on a section
/// that was never declared by a header creates the section map but does
/// *not* append to `section_order`, so that section is invisible to
/// serialization while still answering [`ConfigStore::get`].
///
/// # Examples
///
/// ```rust
/// use ini_store::ConfigStore;
///
/// let mut store: ConfigStore = "[server]\nhost = localhost\n".parse().unwrap();
/// assert_eq!(store.get("server", "host"), Some("localhost"));
/// store.set("server", "port", "8080");
/// assert_eq!(store.get("server", "port"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    /// Section names in first-seen header order, duplicates preserved.
    pub(crate) section_order: Vec<String>,
    /// Section name → insertion-ordered key-value entries.
    pub(crate) sections: HashMap<String, SectionEntries>,
}

impl ConfigStore {
    /// Creates a new empty store with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, or `None` if the section or key is absent.
    ///
    /// A key holding an empty string returns `Some("")` – absence and an
    /// empty value are distinct answers.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(key)
            .map(String::as_str)
    }

    /// Sets `key` to `value` in `section`, creating the section map if it
    /// does not exist.  Setting the same key twice keeps the last value.
    ///
    /// This never appends to the serialization order: a section created only
    /// through `set` will not appear in [`crate::format`] output until a
    /// header for it is parsed.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Returns the section names in header order, duplicates included.
    pub fn section_names(&self) -> &[String] {
        &self.section_order
    }

    /// Returns the entries of `section`, or `None` if no such section exists.
    pub fn section(&self, name: &str) -> Option<&SectionEntries> {
        self.sections.get(name)
    }

    /// Returns `true` if the store holds no sections at all, declared or not.
    pub fn is_empty(&self) -> bool {
        self.section_order.is_empty() && self.sections.is_empty()
    }

    /// Declares `name` as the next section in serialization order and
    /// installs a fresh empty entry map for it, discarding prior content.
    ///
    /// Redeclaring an existing name resets that section (reset-on-redeclare)
    /// while the order list gains a second entry for it.
    pub(crate) fn declare_section(&mut self, name: &str) {
        self.section_order.push(name.to_string());
        self.sections.insert(name.to_string(), SectionEntries::new());
    }
}
