use std::fmt;

use encoding_rs::Encoding;

use crate::Error;

/// The `charset` parameter of a `MediaType`, resolved to an encoding.
///
/// # Example
///
/// ```
/// let mt = mediatype::MediaType::parse("text/html; charset=utf-8").unwrap();
/// let charset = mt.charset().unwrap().unwrap();
///
/// assert_eq!(charset.name(), "UTF-8");
/// assert_eq!(charset.encoding(), encoding_rs::UTF_8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset<'a> {
    name: &'a str,
    encoding: &'static Encoding,
}

impl<'a> Charset<'a> {
    /// The parameter value, as stored (uppercase).
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The encoding the name resolves to.
    ///
    /// Labels are resolved the way the WHATWG Encoding Standard does, so
    /// the encoding's own name may differ from [`name`](Charset::name),
    /// e.g. `ISO-8859-1` resolves to `windows-1252`.
    #[inline]
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl<'a> fmt::Debug for Charset<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Charset")
            .field("name", &self.name)
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

impl<'a> fmt::Display for Charset<'a> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub(crate) fn resolve(name: &str) -> Result<Charset<'_>, Error> {
    if !is_legal_name(name) {
        log::debug!("illegal charset name {:?}", name);
        return Err(Error::InvalidCharsetName(name.to_owned()));
    }

    match Encoding::for_label(name.as_bytes()) {
        Some(encoding) => Ok(Charset { name, encoding }),
        None => {
            log::debug!("charset {:?} is not a known encoding label", name);
            Err(Error::UnsupportedCharset(name.to_owned()))
        }
    }
}

// A letter or digit, then letters, digits, `-`, `+`, `:`, `_` and `.`.
fn is_legal_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(c) if c.is_ascii_alphanumeric() => (),
        _ => return false,
    }
    bytes.all(|c| c.is_ascii_alphanumeric() || matches!(c, b'-' | b'+' | b':' | b'_' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        let charset = resolve("UTF-8").unwrap();
        assert_eq!(charset.name(), "UTF-8");
        assert_eq!(charset.encoding(), encoding_rs::UTF_8);

        let charset = resolve("SHIFT_JIS").unwrap();
        assert_eq!(charset.encoding(), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn test_resolve_keeps_label() {
        let charset = resolve("ISO-8859-1").unwrap();
        assert_eq!(charset.name(), "ISO-8859-1");
        assert_eq!(charset.encoding(), encoding_rs::WINDOWS_1252);
        assert_eq!(charset.to_string(), "ISO-8859-1");
    }

    #[test]
    fn test_resolve_illegal() {
        assert_eq!(resolve("").unwrap_err(), Error::InvalidCharsetName("".into()));
        assert_eq!(resolve("UTF 8").unwrap_err(), Error::InvalidCharsetName("UTF 8".into()));
        assert_eq!(resolve("-UTF8").unwrap_err(), Error::InvalidCharsetName("-UTF8".into()));
    }

    #[test]
    fn test_resolve_unsupported() {
        assert_eq!(
            resolve("X-NO-SUCH-CHARSET").unwrap_err(),
            Error::UnsupportedCharset("X-NO-SUCH-CHARSET".into())
        );
    }

    #[test]
    fn test_legal_names() {
        assert!(is_legal_name("UTF-8"));
        assert!(is_legal_name("ISO_8859-1:1987"));
        assert!(is_legal_name("x.y+z"));
        assert!(is_legal_name("8BIT"));
        assert!(!is_legal_name("_UTF8"));
        assert!(!is_legal_name("UTF/8"));
        assert!(!is_legal_name("Straße"));
    }
}
