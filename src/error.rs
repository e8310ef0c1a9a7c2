use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the classification library.
///
/// Every variant is terminal for the current invocation; there is no retry
/// policy. Files copied before the failure remain in place.
#[derive(Debug, Error)]
pub enum SortError {
    /// The root path supplied on the command line does not exist or is not
    /// a directory.
    #[error("path does not exist or is not a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A candidate file could not be opened or parsed as a supported image.
    ///
    /// This aborts the whole run: skipping the file would desynchronize the
    /// progress totals computed by the count pass from the work actually done.
    #[error("cannot read image {}: {}", .path.display(), .reason)]
    UnreadableImage { path: PathBuf, reason: String },

    /// Listing the root directory failed.
    #[error("failed to scan {}: {}", .path.display(), .source)]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating a bucket directory or copying a file failed.
    #[error("filesystem operation failed on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnreadableImage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
