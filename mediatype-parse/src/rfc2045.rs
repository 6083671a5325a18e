use crate::{Malformed, ParseError};

// From [RFC2045](https://tools.ietf.org/html/rfc2045#section-5.1):
//
// >     content := "Content-Type" ":" type "/" subtype
// >                *(";" parameter)
// >     parameter := attribute "=" value
// >     attribute := token
// >     value := token / quoted-string
// >     token := 1*<any (US-ASCII) CHAR except SPACE, CTLs,
// >                 or tspecials>
// >     tspecials :=  "(" / ")" / "<" / ">" / "@" /
// >                   "," / ";" / ":" / "\" / <">
// >                   "/" / "[" / "]" / "?" / "="
//
// Media ranges from [HTTP](https://tools.ietf.org/html/rfc2616#section-14.1)
// reuse the same grammar, `*` being an ordinary token character.
//
// Whitespace is only accepted between a `;` and the following attribute.

/// The three pieces of an input that matched the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split<'a> {
    source: &'a str,
    slash: usize,
    semicolon: Option<usize>,
}

impl<'a> Split<'a> {
    /// The raw type token.
    #[inline]
    pub fn type_(&self) -> &'a str {
        &self.source[..self.slash]
    }

    /// The raw subtype token.
    #[inline]
    pub fn subtype(&self) -> &'a str {
        &self.source[self.slash + 1..self.params_start()]
    }

    /// The raw parameter tail, starting at the first `;`, or `""`.
    #[inline]
    pub fn params(&self) -> &'a str {
        &self.source[self.params_start()..]
    }

    /// Byte offset of the parameter tail in the source.
    #[inline]
    pub fn params_start(&self) -> usize {
        self.semicolon.unwrap_or(self.source.len())
    }
}

#[inline]
fn unexpected(pos: usize, byte: u8) -> ParseError {
    ParseError::InvalidMediaType {
        pos,
        kind: Malformed::UnexpectedByte(byte),
    }
}

#[inline]
fn malformed(pos: usize, kind: Malformed) -> ParseError {
    ParseError::InvalidMediaType { pos, kind }
}

/// Matches `s` against `type "/" subtype *(";" *WS attribute "=" value)`.
///
/// Nothing is normalized here, the pieces are returned as they appear.
pub fn split(s: &str) -> Result<Split<'_>, ParseError> {
    let mut iter = s.bytes().enumerate();

    // toplevel
    let slash;
    loop {
        match iter.next() {
            Some((_, c)) if is_token(c) => (),
            Some((i, b'/')) if i > 0 => {
                slash = i;
                break;
            },
            None => return Err(malformed(s.len(), Malformed::MissingSlash)),
            Some((pos, byte)) => return Err(unexpected(pos, byte)),
        }
    }

    // sublevel
    let semicolon;
    loop {
        match iter.next() {
            Some((_, c)) if is_token(c) => (),
            Some((i, b';')) if i > slash + 1 => {
                semicolon = i;
                break;
            },
            None if s.len() > slash + 1 => {
                return Ok(Split {
                    source: s,
                    slash,
                    semicolon: None,
                });
            },
            None => return Err(malformed(s.len(), Malformed::MissingSubtype)),
            Some((pos, byte)) => return Err(unexpected(pos, byte)),
        }
    }

    // params
    'params: loop {
        let mut seen_attribute = false;
        'attribute: loop {
            match iter.next() {
                Some((_, b' ')) | Some((_, b'\t')) | Some((_, b'\r')) | Some((_, b'\n'))
                    if !seen_attribute => (),
                Some((_, c)) if is_token(c) => seen_attribute = true,
                Some((_, b'=')) if seen_attribute => break 'attribute,
                None => return Err(malformed(s.len(), Malformed::MissingEqual)),
                Some((pos, byte)) => return Err(unexpected(pos, byte)),
            }
        }

        match iter.next() {
            Some((_, b'"')) => {
                'quoted: loop {
                    match iter.next() {
                        Some((_, b'"')) => break 'quoted,
                        Some((_, b'\\')) => match iter.next() {
                            Some((_, c)) if c.is_ascii() => (),
                            Some((pos, byte)) => return Err(unexpected(pos, byte)),
                            None => return Err(malformed(s.len(), Malformed::MissingQuote)),
                        },
                        Some((_, c)) if c.is_ascii() => (),
                        Some((pos, byte)) => return Err(unexpected(pos, byte)),
                        None => return Err(malformed(s.len(), Malformed::MissingQuote)),
                    }
                }
                match iter.next() {
                    Some((_, b';')) => continue 'params,
                    None => break 'params,
                    Some((pos, byte)) => return Err(unexpected(pos, byte)),
                }
            },
            Some((_, c)) if is_token(c) => loop {
                match iter.next() {
                    Some((_, c)) if is_token(c) => (),
                    Some((_, b';')) => continue 'params,
                    None => break 'params,
                    Some((pos, byte)) => return Err(unexpected(pos, byte)),
                }
            },
            None => return Err(malformed(s.len(), Malformed::MissingValue)),
            Some((pos, byte)) => return Err(unexpected(pos, byte)),
        }
    }

    Ok(Split {
        source: s,
        slash,
        semicolon: Some(semicolon),
    })
}

macro_rules! byte_map {
    ($($flag:expr,)*) => ([
        $($flag != 0,)*
    ])
}

static TOKEN_MAP: [bool; 256] = byte_map![
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Whether `c` may appear in a token.
#[inline]
pub fn is_token(c: u8) -> bool {
    TOKEN_MAP[c as usize]
}

/// Whether the whole of `s` is a single token.
#[inline]
pub fn is_token_str(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token)
}
