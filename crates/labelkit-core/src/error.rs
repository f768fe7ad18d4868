//! Error handling for LabelKit
//!
//! Every failure of a print or preview request falls into one of three
//! terminal categories:
//! - Capture errors (surface not ready, output buffer unavailable, encoding)
//! - Dispatch errors (the external print service failed)
//! - Busy (another request for the same document is still in flight)
//!
//! None of them is retried. All error types use `thiserror`.

use thiserror::Error;

/// Capture & rasterize error type
///
/// Raised by the capture pipeline before anything is handed to a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No render surface is attached, or it produced no snapshot
    #[error("Label surface is not ready for capture")]
    NotReady,

    /// The output raster could not be allocated
    #[error("Could not create a {width}x{height} render target")]
    RenderContext {
        /// Requested raster width in pixels.
        width: u32,
        /// Requested raster height in pixels.
        height: u32,
    },

    /// The output raster could not be encoded
    #[error("Failed to encode label image: {reason}")]
    Encode {
        /// The reason reported by the encoder.
        reason: String,
    },
}

/// Dispatch error type
///
/// Represents failures of the external print/preview service. Messages are
/// shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A required external tool is not installed
    #[error("{tool} not found. Please install the CUPS client tools")]
    ToolNotFound {
        /// The executable that could not be spawned.
        tool: String,
    },

    /// An external tool ran and reported failure
    #[error("{tool} failed: {stderr}")]
    CommandFailed {
        /// The executable that failed.
        tool: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// File system failure while staging the artifact
    #[error("I/O error: {reason}")]
    Io {
        /// The reason for the I/O error.
        reason: String,
    },

    /// Generic dispatch error
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl From<std::io::Error> for DispatchError {
    fn from(err: std::io::Error) -> Self {
        DispatchError::Io {
            reason: err.to_string(),
        }
    }
}

/// Main error type for LabelKit
#[derive(Error, Debug)]
pub enum Error {
    /// Capture pipeline error
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Print service error
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A print or preview request is already running for this document
    #[error("A print or preview request is already in progress")]
    Busy,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if error is a capture error
    pub fn is_capture_error(&self) -> bool {
        matches!(self, Error::Capture(_))
    }

    /// Check if error is a dispatch error
    pub fn is_dispatch_error(&self) -> bool {
        matches!(self, Error::Dispatch(_))
    }

    /// Check if the request was rejected because another one is running
    pub fn is_busy(&self) -> bool {
        matches!(self, Error::Busy)
    }
}

/// Result type using LabelKit Error
pub type Result<T> = std::result::Result<T, Error>;
