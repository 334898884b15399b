/// Errors fetching one icon from a source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("icon {0} not found")]
    NotFound(String),

    #[error("failed to read icon {id}: {reason}")]
    Io { id: String, reason: String },

    #[error("failed to download icon {id}: {reason}")]
    Http { id: String, reason: String },

    #[error("icon {0} is not an SVG document")]
    NotSvg(String),
}

/// Errors reading a manifest.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to parse manifest: {0}")]
    ParseError(String),

    #[error("icon {id} has unsupported standard {standard}")]
    UnknownStandard { id: String, standard: String },

    #[error("icon {0} appears more than once")]
    DuplicateId(String),
}

/// Errors writing a package. Failed fetches are not errors; see
/// [`PackageReport::skipped`](crate::PackageReport::skipped).
#[derive(Debug, Clone, thiserror::Error)]
pub enum PackageError {
    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to serialize manifest: {0}")]
    Serialize(String),

    #[error("failed to build archive {path}: {reason}")]
    Archive { path: String, reason: String },
}
