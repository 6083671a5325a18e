use mediatype_parse::{Malformed, ParseError};

/// Why a `MediaType` could not be built, or its charset not resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not have the shape `type/subtype; attribute=value`.
    #[error("invalid media type, {kind} at position {pos}")]
    InvalidMediaType {
        /// Byte offset at which the problem was found.
        pos: usize,
        /// What was wrong.
        kind: Malformed,
    },
    /// A type, subtype or attribute is not a token, or a parameter value
    /// is not ASCII.
    #[error("invalid token {0:?}")]
    InvalidToken(String),
    /// The type is `*` but the subtype is not.
    #[error("wildcard type with a concrete subtype in {0:?}")]
    WildcardMismatch(String),
    /// The `charset` value is not a legal charset name.
    #[error("illegal charset name {0:?}")]
    InvalidCharsetName(String),
    /// The `charset` value names no known encoding.
    #[error("unsupported charset {0:?}")]
    UnsupportedCharset(String),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        match err {
            ParseError::InvalidMediaType { pos, kind } => Error::InvalidMediaType { pos, kind },
            ParseError::InvalidToken(token) => Error::InvalidToken(token),
            ParseError::WildcardMismatch(essence) => Error::WildcardMismatch(essence),
        }
    }
}
