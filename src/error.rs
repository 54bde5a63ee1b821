use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the migration
#[derive(Error, Debug)]
pub enum FixError {
    #[error("IO error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Anchor mismatch for '{name}': line {index} does not contain \"{marker}\"")]
    AnchorMismatch {
        name: String,
        index: usize,
        marker: String,
    },

    #[error("Region '{name}' not found: no line contains \"{marker}\"")]
    RegionNotFound { name: String, marker: String },

    #[error("Region '{name}' matched {count} times, expected exactly one")]
    MultipleMatches { name: String, count: usize },

    #[error("Region '{name}' starting at line {start_line} has no closing \"{closer}\"")]
    UnterminatedRegion {
        name: String,
        start_line: usize,
        closer: String,
    },

    #[error("File was modified between read and write: {}", path.display())]
    ConcurrentModification { path: PathBuf },
}

impl FixError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new anchor mismatch error
    pub fn anchor_mismatch(
        name: impl Into<String>,
        index: usize,
        marker: impl Into<String>,
    ) -> Self {
        Self::AnchorMismatch {
            name: name.into(),
            index,
            marker: marker.into(),
        }
    }

    /// Create a new region not found error
    pub fn region_not_found(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::RegionNotFound {
            name: name.into(),
            marker: marker.into(),
        }
    }

    /// Create a new multiple matches error
    pub fn multiple_matches(name: impl Into<String>, count: usize) -> Self {
        Self::MultipleMatches {
            name: name.into(),
            count,
        }
    }

    /// Create a new unterminated region error
    pub fn unterminated_region(
        name: impl Into<String>,
        start_line: usize,
        closer: impl Into<String>,
    ) -> Self {
        Self::UnterminatedRegion {
            name: name.into(),
            start_line,
            closer: closer.into(),
        }
    }

    /// Create a new concurrent modification error
    pub fn concurrent_modification(path: impl Into<PathBuf>) -> Self {
        Self::ConcurrentModification { path: path.into() }
    }
}

/// Result type alias using FixError
pub type FixResult<T> = Result<T, FixError>;

/// Contextual error mapping function for IO operations
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> FixError {
    let path = path.into();
    move |err| FixError::io_error(err, path)
}
