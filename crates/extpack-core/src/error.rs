use std::path::PathBuf;
use thiserror::Error;

/// Fatal assembly failures.
///
/// Missing optional inputs are not errors: they degrade to a warning and
/// land in [`crate::AssembleReport::skipped`].
#[derive(Debug, Error)]
pub enum PackError {
    /// An exclusion pattern failed to compile.
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// An include path cannot be expressed relative to the project root.
    #[error("include path '{path}' is not under project root '{root}'")]
    InvalidRoot { path: PathBuf, root: PathBuf },

    /// Two queued entries target the same archive path.
    ///
    /// First-writer-wins would make the archive depend on write order, so
    /// the assembler refuses instead.
    #[error("duplicate archive entry '{dest}' (from '{first}' and '{second}')")]
    DuplicateEntry {
        dest: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The output archive could not be created or finalized.
    #[error("cannot write archive '{path}': {message}")]
    Output { path: PathBuf, message: String },

    /// Unrecoverable I/O failure while reading an input or writing the archive.
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A packaging spec file could not be read or parsed.
    #[error("cannot load spec '{path}': {message}")]
    SpecParse { path: PathBuf, message: String },
}

impl PackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Io {
            path: path.into(),
            source,
        }
    }
}
