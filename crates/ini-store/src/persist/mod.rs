//! File persistence for [`ConfigStore`].
//!
//! Thin wrappers around [`crate::format`]: load reads the whole file and
//! hands it to the parser, save writes the serialized snapshot, truncating
//! any existing file.  Every failure is a typed [`FileError`] propagated to
//! the caller – the library never terminates the process on I/O problems.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::format::parser::ParseError;
use crate::store::ConfigStore;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid INI text.
    #[error("failed to parse INI file: {0}")]
    Parse(#[from] ParseError),
}

/// Loads a [`ConfigStore`] from the INI file at `path`.
///
/// # Errors
///
/// Returns [`FileError::Io`] when the file cannot be opened or read
/// (including when it does not exist), and [`FileError::Parse`] when its
/// content is malformed.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ConfigStore, FileError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store: ConfigStore = content.parse()?;
    debug!(
        path = %path.display(),
        sections = store.section_names().len(),
        "loaded config file"
    );
    Ok(store)
}

impl ConfigStore {
    /// Writes the serialized snapshot of this store to `path`, creating the
    /// file if absent and truncating it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Io`] when the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_ini_string()).map_err(|source| FileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            sections = self.section_names().len(),
            "saved config file"
        );
        Ok(())
    }
}
