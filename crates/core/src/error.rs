//! Engine error types.
//!
//! Storage failures carry the key they occurred on. Query parse failures
//! carry the offset and the remaining input suffix for diagnostics.

use thiserror::Error;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// A read from one of the backing stores failed.
    #[error("storage read failed for `{key}`: {source}")]
    StorageRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A write to one of the backing stores failed.
    #[error("storage write failed for `{key}`: {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored or submitted document could not be encoded or decoded.
    #[error("bad document `{key}`: {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The query string failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// What went wrong while lexing or parsing a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A quoted atom was never closed.
    UnterminatedString,
    /// No atom characters at the current position.
    NoAtom,
    /// A key atom was not followed by `:`.
    ExpectedColon,
}

impl ParseErrorKind {
    fn message(self) -> &'static str {
        match self {
            ParseErrorKind::UnterminatedString => "expected end of quoted string",
            ParseErrorKind::NoAtom => "expected atom",
            ParseErrorKind::ExpectedColon => "expected colon",
        }
    }
}

/// A query parse failure with position context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset into the query string.
    pub offset: usize,
    /// The unconsumed remainder of the query string.
    pub rest: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at offset {}: `{}`",
            self.kind.message(),
            self.offset,
            self.rest
        )
    }
}

impl std::error::Error for ParseError {}
