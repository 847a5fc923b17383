//! Error types for map generation, configuration and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Weights handed to a weighted selection do not sum to one
    ///
    /// Raised for kernel probability tables at construction time and for
    /// move distributions during a step.
    ProbabilitySum {
        /// Which table or distribution was checked
        table: String,
        /// The actual sum of the weights
        sum: f64,
    },

    /// Circularity lookup for a kernel size missing from the size table
    MissingKernelSize {
        /// Kernel size without a table entry
        size: usize,
    },

    /// Kernel side length must be odd and positive
    InvalidKernelSize {
        /// The rejected side length
        size: usize,
    },

    /// Roulette selection walked every option without reaching the draw
    NoOptionSelected {
        /// Number of options offered
        options: usize,
        /// The uniform draw that was never reached
        draw: f64,
    },

    /// Options and weights passed to a selection differ in length
    LengthMismatch {
        /// Number of options
        options: usize,
        /// Number of weights
        weights: usize,
    },

    /// A step or finishing pass was requested after the run already ended
    AlreadyFinished {
        /// Iteration at which the request happened
        iteration: usize,
    },

    /// Failed to parse a configuration file
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to serialize a document
    Serialization {
        /// Description of the document being written
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ProbabilitySum { table, sum } => {
                write!(f, "Probabilities of {table} sum to {sum}, expected 1")
            }
            Self::MissingKernelSize { size } => {
                write!(f, "Kernel size {size} has no entry in the kernel table")
            }
            Self::InvalidKernelSize { size } => {
                write!(f, "Kernel size {size} is invalid (must be odd and positive)")
            }
            Self::NoOptionSelected { options, draw } => {
                write!(
                    f,
                    "No option was selected from {options} options (draw {draw})"
                )
            }
            Self::LengthMismatch { options, weights } => {
                write!(
                    f,
                    "Selection received {options} options but {weights} weights"
                )
            }
            Self::AlreadyFinished { iteration } => {
                write!(f, "Generation already finished (iteration {iteration})")
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::Serialization { operation, source } => {
                write!(f, "Failed to serialize {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> GenerationError {
    let path = path.into();
    move |source| GenerationError::FileSystem {
        path,
        operation,
        source,
    }
}
