//! Error types for dnn-preproc.

/// Result type alias for dnn-preproc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for dnn-preproc.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read the model catalog.
    #[error("failed to read model catalog '{path}'")]
    CatalogRead {
        /// Path to the catalog.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the model catalog.
    #[error("failed to parse model catalog '{path}'")]
    CatalogParse {
        /// Path to the catalog.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog's top-level node is not a mapping of aliases.
    #[error("model catalog '{path}' must be a mapping of model aliases")]
    CatalogShape {
        /// Path to the catalog.
        path: std::path::PathBuf,
    },

    /// A catalog field is neither a scalar nor a numeric sequence.
    #[error("Unexpected field format: '{field}' of model '{alias}'")]
    UnexpectedFieldFormat {
        /// Model alias.
        alias: String,
        /// Field name.
        field: String,
    },

    /// A sequence element in a catalog field is not a number.
    #[error("Unexpected value format: element {index} of '{field}' in model '{alias}'")]
    UnexpectedValueFormat {
        /// Model alias.
        alias: String,
        /// Field name.
        field: String,
        /// Position of the offending element.
        index: usize,
    },

    /// Default of a boolean flag is not a boolean.
    #[error("invalid default for flag '--{name}': {value}")]
    InvalidFlagDefault {
        /// Option name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// File not found in any search location.
    #[error("File {filename} not found! Please specify a valid path.")]
    FileNotFound {
        /// Requested file name.
        filename: String,
    },

    /// Command-line parsing failed.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Failed to serialize JSON output.
    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Exit status the binary reports for this error.
    ///
    /// Malformed catalog values and missing files keep the status 0 that
    /// sample programs have always reported for them.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnexpectedFieldFormat { .. }
            | Self::UnexpectedValueFormat { .. }
            | Self::FileNotFound { .. } => 0,
            Self::Cli(e) => e.exit_code(),
            _ => 1,
        }
    }
}
