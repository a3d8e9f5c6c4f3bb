//! Text format module containing the line parser and the serializer.
//!
//! Wire format:
//! ```text
//! [sectionName]
//! key = value
//! key2 = value2
//! ```
//! One section header or key-value pair per line.  The key-value separator is
//! the literal three characters `" = "` (space, equals, space) – no quoting,
//! no escaping, no whitespace trimming, no case normalization.  Lines that
//! are empty or start with `;` are skipped on read and never emitted on
//! write.

pub mod parser;
pub mod writer;

pub use parser::ParseError;
