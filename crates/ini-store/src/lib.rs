//! # ini-store
//!
//! Minimal INI-style configuration store: parse bracketed `[section]` headers
//! followed by `key = value` lines into memory, query and mutate the result,
//! and serialize it back to text or a file.
//!
//! This crate has zero dependencies on network sockets, async runtimes, or
//! UI frameworks.  The only I/O it performs is the explicit file load/save in
//! the [`persist`] module.
//!
//! # Architecture overview
//!
//! The crate is split into three modules, each owning one concern:
//!
//! - **`store`** – The in-memory data model.  A [`ConfigStore`] owns the
//!   ordered list of section names and a map from section name to its
//!   key-value entries.  Pure data plus accessors, no parsing.
//!
//! - **`format`** – How text becomes a store and back.  The parser walks
//!   lines with a single "current section" cursor; the writer replays the
//!   section order and emits `[name]` / `key = value` lines.
//!
//! - **`persist`** – Thin file wrappers around the format module.  All
//!   failures are typed errors propagated to the caller; the library never
//!   terminates the process.

// Declare the three top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/format/mod.rs).
pub mod format;
pub mod persist;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `ini_store::ConfigStore` instead of `ini_store::store::ConfigStore`.
pub use format::parser::ParseError;
pub use persist::{load_from_file, FileError};
pub use store::ConfigStore;
