//! Error types for article-extractor.
//!
//! Only precondition violations surface as errors. A document in which no
//! element can be selected is not an error: the pipeline falls back to the
//! serialized `<body>` and reports that through [`crate::Strategy`].

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document tree has no root `<html>` element to work on.
    #[error("missing document")]
    MissingDocument,

    /// Reading the HTML input stream failed.
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
