//! Internal types for the `mediatype` crate.
//!
//! Parsing runs in three steps: [`split`] matches the grammar and cuts the
//! input into type, subtype and parameter tail, [`scan_params`] turns the
//! tail into attribute/value pairs, and [`Mime::create`] normalizes the
//! pieces.

use std::borrow::Cow;
use std::fmt;

mod params;
mod rfc2045;

pub use self::params::{scan_params, ParamList};
pub use self::rfc2045::{is_token, is_token_str, split, Split};

/// The wildcard used by media ranges, for the type and the subtype.
pub const WILDCARD: &str = "*";

/// The only attribute whose value is normalized (to uppercase).
pub const CHARSET: &str = "charset";

/// A normalized `(type, subtype, parameters)` triple.
#[derive(Clone, Debug)]
pub struct Mime {
    pub type_: Cow<'static, str>,
    pub subtype: Cow<'static, str>,
    pub params: ParamList,
}

/// Why an input could not be parsed or created.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not match the grammar.
    #[error("invalid media type, {kind} at position {pos}")]
    InvalidMediaType {
        pos: usize,
        kind: Malformed,
    },
    /// A type, subtype or attribute is not a token, or a value is not
    /// ASCII.
    #[error("invalid token {0:?}")]
    InvalidToken(String),
    /// `*` type with a concrete subtype.
    #[error("wildcard type with a concrete subtype in {0:?}")]
    WildcardMismatch(String),
}

/// What was wrong with the shape of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Malformed {
    /// No `/` after the type.
    MissingSlash,
    /// Nothing after the `/`.
    MissingSubtype,
    /// An attribute without `=`.
    MissingEqual,
    /// An `=` without a value.
    MissingValue,
    /// A quoted value without its closing `"`.
    MissingQuote,
    /// A byte that is not allowed where it was found.
    UnexpectedByte(u8),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Malformed::MissingSlash => f.write_str("a slash (/) was missing between the type and subtype"),
            Malformed::MissingSubtype => f.write_str("the subtype was missing"),
            Malformed::MissingEqual => f.write_str("an equals sign (=) was missing between a parameter and its value"),
            Malformed::MissingValue => f.write_str("a parameter value was missing"),
            Malformed::MissingQuote => f.write_str("a quote (\") was missing from a parameter value"),
            Malformed::UnexpectedByte(byte) if byte == b' ' || byte.is_ascii_graphic() => {
                write!(f, "unexpected {:?}", byte as char)
            },
            Malformed::UnexpectedByte(byte) => write!(f, "unexpected byte {:#04X}", byte),
        }
    }
}

// ===== impl Mime =====

impl Mime {
    /// A parameterless `Mime` from already normalized parts.
    #[inline]
    pub const fn from_static(type_: &'static str, subtype: &'static str) -> Mime {
        Mime {
            type_: Cow::Borrowed(type_),
            subtype: Cow::Borrowed(subtype),
            params: ParamList::new(),
        }
    }

    /// Validates and normalizes already split pieces.
    pub fn create<I, K, V>(type_: &str, subtype: &str, params: I) -> Result<Mime, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let type_ = normalize_token(type_)?;
        let subtype = normalize_token(subtype)?;
        if type_ == WILDCARD && subtype != WILDCARD {
            return Err(ParseError::WildcardMismatch(format!("{}/{}", type_, subtype)));
        }

        Ok(Mime {
            type_: Cow::Owned(type_),
            subtype: Cow::Owned(subtype),
            params: normalize_params(params)?,
        })
    }

    /// Whether the type or the subtype is the wildcard.
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.type_ == WILDCARD || self.subtype == WILDCARD
    }
}

/// Parses and normalizes a media type or media range.
pub fn parse(s: &str) -> Result<Mime, ParseError> {
    let split = split(s)?;
    let params = scan_params(s, split.params_start())?;
    Mime::create(split.type_(), split.subtype(), params)
}

/// Checks that `token` is a token and lowercases it.
pub fn normalize_token(token: &str) -> Result<String, ParseError> {
    if is_token_str(token) {
        Ok(token.to_ascii_lowercase())
    } else {
        Err(ParseError::InvalidToken(token.to_owned()))
    }
}

/// Normalizes attribute/value pairs into a `ParamList`.
///
/// Attributes are lowercased, a `charset` value is uppercased, other values
/// are kept verbatim. A repeated attribute keeps its first position and its
/// last value.
///
/// Values must be ASCII, the only text a quoted string can carry.
pub fn normalize_params<I, K, V>(params: I) -> Result<ParamList, ParseError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut list = ParamList::new();
    for (name, value) in params {
        let name = normalize_token(name.as_ref())?;
        let value = value.as_ref();
        if !value.is_ascii() {
            return Err(ParseError::InvalidToken(value.to_owned()));
        }
        let value = if name == CHARSET {
            value.to_ascii_uppercase()
        } else {
            value.to_owned()
        };
        list.insert(name, value);
    }
    Ok(list)
}
