//! Serializer from a [`ConfigStore`] back to INI text.
//!
//! Serialization replays `section_order`: each recorded header is emitted as
//! `[name]` followed by that section's current entries in insertion order.
//! Two consequences fall out of replaying the order list verbatim:
//!
//! - A name recorded twice is emitted twice, and both occurrences carry the
//!   section's *current* content in full.
//! - A section created only via [`ConfigStore::set`] (never declared by a
//!   header) is absent from the order list and produces no output at all.
//!
//! Comments and blank lines are never emitted.

use std::fmt;

use crate::store::ConfigStore;

impl ConfigStore {
    /// Serializes the store to one string per output line.
    ///
    /// Output is deterministic: section order follows the header order and
    /// keys within a section follow insertion order.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for name in &self.section_order {
            lines.push(format!("[{name}]"));
            if let Some(entries) = self.sections.get(name) {
                for (key, value) in entries {
                    lines.push(format!("{key} = {value}"));
                }
            }
        }
        lines
    }

    /// Serializes the store to a single string, every line (including the
    /// last) followed by `'\n'`.
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for line in self.to_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ini_string())
    }
}
