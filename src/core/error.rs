use thiserror::Error;

/// Errors that can occur while extracting a fiscal document.
///
/// These are the only two failure modes: either the payload is not
/// well-formed XML at all, or it is XML that belongs to neither supported
/// schema. Everything below the document root degrades permissively —
/// missing or non-numeric fields become empty strings or zero, never errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Input could not be parsed as XML.
    #[error("{file}: malformed XML: {message}")]
    MalformedDocument {
        /// Originating filename, for diagnostics only.
        file: String,
        /// Parser error description.
        message: String,
    },

    /// Well-formed XML, but no NF-e or CT-e root element was found.
    #[error("{file}: document matches neither the NF-e nor the CT-e schema")]
    UnrecognizedSchema {
        /// Originating filename, for diagnostics only.
        file: String,
    },
}
