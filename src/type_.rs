use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use encoding_rs::Encoding;
use mediatype_parse::{is_token_str, Mime, CHARSET};

use crate::charset::{self, Charset};
use crate::{cmp, Error, Params};

/// A parsed media type, or media range.
///
/// A `MediaType` is always normalized: the type, subtype and parameter
/// names are lowercase, the `charset` value is uppercase, and other
/// values are kept as written. It is immutable; the `with_*` and
/// `without_*` methods return modified copies.
///
/// ## Note about wildcards (`*`)
///
/// The type and subtype may be the wildcard `*`, in which case the value
/// is a media range such as `text/*` or `*/*`, usable with
/// [`is`](MediaType::is). A wildcard type always comes with a wildcard
/// subtype.
///
/// # Example
///
/// ```
/// let mt = mediatype::MediaType::parse("Text/HTML; Charset=utf-8").unwrap();
///
/// assert_eq!(mt.type_(), mediatype::TEXT);
/// assert_eq!(mt.subtype(), mediatype::HTML);
/// assert_eq!(mt.param("charset"), Some("UTF-8"));
/// assert_eq!(mt.to_string(), "text/html; charset=UTF-8");
/// ```
#[derive(Clone)]
pub struct MediaType {
    pub(crate) mime: Mime,
}

impl MediaType {
    pub(crate) const fn from_static(type_: &'static str, subtype: &'static str) -> MediaType {
        MediaType {
            mime: Mime::from_static(type_, subtype),
        }
    }

    /// Parse a string as a `MediaType`.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::parse("text/plain").unwrap();
    /// assert_eq!(mt, mediatype::TEXT_PLAIN);
    ///
    /// let range = mediatype::MediaType::parse("text/*").unwrap();
    /// assert!(range.has_wildcard());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not a valid media type or range.
    pub fn parse(source: &str) -> Result<MediaType, Error> {
        match mediatype_parse::parse(source) {
            Ok(mime) => Ok(MediaType { mime }),
            Err(err) => {
                log::trace!("rejected media type {:?}: {}", source, err);
                Err(err.into())
            }
        }
    }

    /// Build a `MediaType` without parameters.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::new("Image", "PNG").unwrap();
    /// assert_eq!(mt, mediatype::IMAGE_PNG);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`create`](MediaType::create).
    #[inline]
    pub fn new(type_: &str, subtype: &str) -> Result<MediaType, Error> {
        MediaType::create(type_, subtype, None::<(&str, &str)>)
    }

    /// Build a `MediaType` from already split pieces.
    ///
    /// The pieces are normalized exactly as [`parse`](MediaType::parse)
    /// does. Values are taken verbatim, they need no quoting, but they must
    /// be ASCII.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::create(
    ///     "multipart",
    ///     "form-data",
    ///     [("boundary", "a b"), ("Charset", "utf-8")],
    /// ).unwrap();
    ///
    /// assert_eq!(mt.to_string(), "multipart/form-data; boundary=\"a b\"; charset=UTF-8");
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidToken` if the type, subtype or an attribute is not a token
    /// or a value is not ASCII, `WildcardMismatch` if only the type is `*`.
    pub fn create<I, K, V>(type_: &str, subtype: &str, params: I) -> Result<MediaType, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mime = Mime::create(type_, subtype, params)?;
        Ok(MediaType { mime })
    }

    /// Get the top level media type for this `MediaType`.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::TEXT_PLAIN;
    /// assert_eq!(mt.type_(), "text");
    /// assert_eq!(mt.type_(), mediatype::TEXT);
    /// ```
    #[inline]
    pub fn type_(&self) -> &str {
        &self.mime.type_
    }

    /// Get the subtype of this `MediaType`.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::TEXT_PLAIN;
    /// assert_eq!(mt.subtype(), "plain");
    /// assert_eq!(mt.subtype(), mediatype::PLAIN);
    /// ```
    #[inline]
    pub fn subtype(&self) -> &str {
        &self.mime.subtype
    }

    /// Look up a parameter by name, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = "multipart/form-data; boundary=ABCDEFG".parse::<mediatype::MediaType>().unwrap();
    /// assert_eq!(mt.param(mediatype::BOUNDARY), Some("ABCDEFG"));
    /// assert_eq!(mt.param("Boundary"), Some("ABCDEFG"));
    /// assert!(mt.param(mediatype::CHARSET).is_none());
    /// ```
    #[inline]
    pub fn param(&self, attr: &str) -> Option<&str> {
        self.mime.params.get(attr)
    }

    /// The parameters, in insertion order.
    #[inline]
    pub fn params(&self) -> Params<'_> {
        Params::new(&self.mime.params)
    }

    /// Returns true if the media type has at least one parameter.
    ///
    /// # Example
    ///
    /// ```
    /// let plain_text: mediatype::MediaType = "text/plain".parse().unwrap();
    /// assert_eq!(plain_text.has_params(), false);
    ///
    /// let plain_text_utf8: mediatype::MediaType = "text/plain; charset=utf-8".parse().unwrap();
    /// assert_eq!(plain_text_utf8.has_params(), true);
    /// ```
    #[inline]
    pub fn has_params(&self) -> bool {
        !self.mime.params.is_empty()
    }

    /// Returns true if the type or the subtype is `*`.
    ///
    /// # Example
    ///
    /// ```
    /// assert!(mediatype::STAR_STAR.has_wildcard());
    /// assert!(mediatype::TEXT_STAR.has_wildcard());
    /// assert!(!mediatype::TEXT_PLAIN.has_wildcard());
    /// ```
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.mime.has_wildcard()
    }

    /// Resolve the `charset` parameter.
    ///
    /// Returns `Ok(None)` when there is no `charset` parameter.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::parse("text/plain; charset=shift_jis").unwrap();
    /// let charset = mt.charset().unwrap().unwrap();
    /// assert_eq!(charset.name(), "SHIFT_JIS");
    /// assert_eq!(charset.encoding(), encoding_rs::SHIFT_JIS);
    ///
    /// assert!(mediatype::TEXT_PLAIN.charset().unwrap().is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidCharsetName` if the value is not a legal charset name,
    /// `UnsupportedCharset` if it names no known encoding.
    pub fn charset(&self) -> Result<Option<Charset<'_>>, Error> {
        self.param(CHARSET).map(charset::resolve).transpose()
    }

    /// A copy with the `charset` parameter set to `encoding`.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::TEXT_HTML.with_charset(encoding_rs::UTF_8);
    /// assert_eq!(mt.to_string(), "text/html; charset=UTF-8");
    /// ```
    pub fn with_charset(&self, encoding: &'static Encoding) -> MediaType {
        let mut mt = self.clone();
        mt.mime
            .params
            .insert(CHARSET.to_owned(), encoding.name().to_ascii_uppercase());
        mt
    }

    /// A copy with `attr` set to `value`.
    ///
    /// An existing parameter keeps its position.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::parse("text/html; charset=utf-8; level=1").unwrap();
    /// let mt = mt.with_param("Charset", "iso-8859-1").unwrap();
    /// assert_eq!(mt.to_string(), "text/html; charset=ISO-8859-1; level=1");
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidToken` if `attr` is not a token or `value` is not ASCII.
    #[inline]
    pub fn with_param(&self, attr: &str, value: &str) -> Result<MediaType, Error> {
        self.with_params(Some((attr, value)))
    }

    /// A copy with every parameter of `params` set.
    ///
    /// Existing parameters keep their position and get the new value, new
    /// ones are appended in the given order.
    ///
    /// # Errors
    ///
    /// `InvalidToken` if an attribute is not a token or a value is not
    /// ASCII. Nothing is applied in that case.
    pub fn with_params<I, K, V>(&self, params: I) -> Result<MediaType, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params = mediatype_parse::normalize_params(params)?;
        let mut mt = self.clone();
        mt.mime.params.overlay(params);
        Ok(mt)
    }

    /// A copy without the parameter `attr`, matched ignoring ASCII case.
    ///
    /// Removing a parameter that is not set returns an equal copy.
    ///
    /// # Example
    ///
    /// ```
    /// let mt = mediatype::MediaType::parse("text/html; charset=utf-8; level=1").unwrap();
    /// assert_eq!(mt.without_param("CHARSET"), "text/html; level=1");
    /// assert_eq!(mt.without_param("q"), mt);
    /// ```
    pub fn without_param(&self, attr: &str) -> MediaType {
        let mut mt = self.clone();
        mt.mime.params.remove(attr);
        mt
    }

    /// A copy without any parameters.
    pub fn without_params(&self) -> MediaType {
        MediaType {
            mime: Mime {
                type_: self.mime.type_.clone(),
                subtype: self.mime.subtype.clone(),
                params: Default::default(),
            },
        }
    }

    /// Returns true if this media type falls within `range`.
    ///
    /// The type and subtype must be equal, or `*` in `range`. Every
    /// parameter of `range` must be present here with the same value;
    /// extra parameters here are allowed. This is not symmetric.
    ///
    /// # Example
    ///
    /// ```
    /// let html = mediatype::MediaType::parse("text/html; charset=utf-8").unwrap();
    ///
    /// assert!(html.is(&mediatype::TEXT_STAR));
    /// assert!(html.is(&mediatype::TEXT_HTML));
    /// assert!(!mediatype::TEXT_STAR.is(&html));
    ///
    /// let latin1 = mediatype::MediaType::parse("text/*; charset=iso-8859-1").unwrap();
    /// assert!(!html.is(&latin1));
    /// ```
    #[inline]
    pub fn is(&self, range: &MediaType) -> bool {
        cmp::within(&self.mime, &range.mime)
    }
}

fn write_value(f: &mut fmt::Formatter, value: &str) -> fmt::Result {
    if is_token_str(value) {
        return f.write_str(value);
    }

    f.write_char('"')?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

impl PartialEq for MediaType {
    #[inline]
    fn eq(&self, other: &MediaType) -> bool {
        cmp::mime_eq(&self.mime, &other.mime)
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        cmp::hash(&self.mime, state);
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, s: &str) -> bool {
        cmp::str_eq(&self.mime, s)
    }
}

impl<'a> PartialEq<&'a str> for MediaType {
    #[inline]
    fn eq(&self, s: &&'a str) -> bool {
        self == *s
    }
}

impl<'a> PartialEq<MediaType> for &'a str {
    #[inline]
    fn eq(&self, mt: &MediaType) -> bool {
        mt == self
    }
}

impl PartialEq<MediaType> for str {
    #[inline]
    fn eq(&self, mt: &MediaType) -> bool {
        mt == self
    }
}

impl FromStr for MediaType {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<MediaType, Self::Err> {
        MediaType::parse(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.mime.type_)?;
        f.write_char('/')?;
        f.write_str(&self.mime.subtype)?;
        for (name, value) in self.mime.params.iter() {
            f.write_str("; ")?;
            f.write_str(name)?;
            f.write_char('=')?;
            write_value(f, value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn mt(s: &str) -> MediaType {
        MediaType::parse(s).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let parsed = mt("text/html; charset=utf-8");
        let rendered = parsed.to_string();
        assert_eq!(rendered, "text/html; charset=UTF-8");
        assert_eq!(mt(&rendered), parsed);
    }

    #[test]
    fn test_case_normalization() {
        assert_eq!(mt("TEXT/HTML"), mt("text/html"));
        assert_eq!(mt("TEXT/HTML").to_string(), "text/html");
        assert_eq!(mt("Text/Plain; Foo=BAR").to_string(), "text/plain; foo=BAR");
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(
            MediaType::parse("*/html").unwrap_err(),
            Error::WildcardMismatch("*/html".into())
        );
        assert_eq!(
            MediaType::new("*", "html").unwrap_err(),
            Error::WildcardMismatch("*/html".into())
        );

        let star = mt("*/*");
        assert!(star.has_wildcard());
        assert_eq!(star, STAR_STAR);
        assert!(mt("text/*").has_wildcard());
        assert!(!mt("text/html").has_wildcard());
    }

    #[test]
    fn test_quoted_value_escaping() {
        let parsed = mt("application/x; name=\"a\\\"b\"");
        assert_eq!(parsed.param("name"), Some("a\"b"));
        assert_eq!(parsed.to_string(), "application/x; name=\"a\\\"b\"");
        assert_eq!(mt(&parsed.to_string()), parsed);
    }

    #[test]
    fn test_render_quotes_non_tokens() {
        let created = MediaType::create(
            "application",
            "x",
            [("a", "plain"), ("b", "two words"), ("c", ""), ("d", "back\\slash"), ("e", "x/y")],
        )
        .unwrap();
        assert_eq!(
            created.to_string(),
            r#"application/x; a=plain; b="two words"; c=""; d="back\\slash"; e="x/y""#
        );
        assert_eq!(mt(&created.to_string()), created);
    }

    #[test]
    fn test_quoted_token_renders_unquoted() {
        assert_eq!(mt("text/plain; a=\"b\"").to_string(), "text/plain; a=b");
    }

    #[test]
    fn test_containment_is_not_symmetric() {
        let html = MediaType::new("text", "html").unwrap();
        let text = MediaType::new("text", "*").unwrap();
        assert!(html.is(&text));
        assert!(!text.is(&html));
    }

    #[test]
    fn test_with_param_overlay() {
        let created = MediaType::create("text", "html", [("charset", "UTF-8")]).unwrap();
        let overlaid = created.with_param("charset", "ISO-8859-1").unwrap();

        assert_eq!(overlaid.params().len(), 1);
        let charset = overlaid.charset().unwrap().unwrap();
        assert_eq!(charset.name(), "ISO-8859-1");
        assert_eq!(charset.encoding(), encoding_rs::WINDOWS_1252);

        // the original is untouched
        assert_eq!(created.param("charset"), Some("UTF-8"));
    }

    #[test]
    fn test_with_params_order() {
        let base = mt("text/plain; a=1; b=2");
        let overlaid = base.with_params([("C", "3"), ("A", "x")]).unwrap();
        assert_eq!(overlaid.to_string(), "text/plain; a=x; b=2; c=3");

        assert_eq!(
            base.with_params([("ok", "1"), ("not ok", "2")]).unwrap_err(),
            Error::InvalidToken("not ok".into())
        );
        assert_eq!(base.with_param("", "1").unwrap_err(), Error::InvalidToken("".into()));
    }

    #[test]
    fn test_with_param_normalizes_charset() {
        let with = TEXT_PLAIN.with_param("CHARSET", "utf-8").unwrap();
        assert_eq!(with.to_string(), "text/plain; charset=UTF-8");
    }

    #[test]
    fn test_with_charset() {
        assert_eq!(TEXT_PLAIN.with_charset(encoding_rs::UTF_8).to_string(), "text/plain; charset=UTF-8");
        assert_eq!(
            TEXT_PLAIN.with_charset(encoding_rs::SHIFT_JIS).to_string(),
            "text/plain; charset=SHIFT_JIS"
        );

        let replaced = mt("text/plain; charset=us-ascii; a=1").with_charset(encoding_rs::UTF_8);
        assert_eq!(replaced.to_string(), "text/plain; charset=UTF-8; a=1");
        assert_eq!(replaced.charset().unwrap().unwrap().encoding(), encoding_rs::UTF_8);
    }

    #[test]
    fn test_charset_errors() {
        let illegal = mt("text/plain; charset=\"utf 8\"");
        assert_eq!(illegal.charset().unwrap_err(), Error::InvalidCharsetName("UTF 8".into()));

        let unknown = mt("text/plain; charset=x-no-such-charset");
        assert_eq!(
            unknown.charset().unwrap_err(),
            Error::UnsupportedCharset("X-NO-SUCH-CHARSET".into())
        );

        assert_eq!(TEXT_PLAIN.charset().unwrap(), None);
    }

    #[test]
    fn test_without_param() {
        let base = mt("text/html; charset=utf-8; level=1");
        assert_eq!(base.without_param("Charset").to_string(), "text/html; level=1");
        assert_eq!(base.without_param("nope"), base);
        assert_eq!(base.without_params(), TEXT_HTML);
        assert!(!base.without_params().has_params());
    }

    #[test]
    fn test_malformed_rejected() {
        assert_eq!(
            MediaType::parse("text").unwrap_err(),
            Error::InvalidMediaType { pos: 4, kind: Malformed::MissingSlash }
        );
        assert!(matches!(
            MediaType::parse("text/html; charset=\"utf-8").unwrap_err(),
            Error::InvalidMediaType { kind: Malformed::MissingQuote, .. }
        ));
        assert!(matches!(
            MediaType::parse("te xt/html").unwrap_err(),
            Error::InvalidMediaType { kind: Malformed::UnexpectedByte(b' '), .. }
        ));
        assert!(matches!(
            MediaType::parse("text/html; charset=").unwrap_err(),
            Error::InvalidMediaType { kind: Malformed::MissingValue, .. }
        ));
        assert!("".parse::<MediaType>().is_err());
        assert!("text/".parse::<MediaType>().is_err());
        assert!("text/html;".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_create_rejects_bad_tokens() {
        assert_eq!(
            MediaType::new("te xt", "html").unwrap_err(),
            Error::InvalidToken("te xt".into())
        );
        assert_eq!(
            MediaType::create("text", "html", [("a=b", "c")]).unwrap_err(),
            Error::InvalidToken("a=b".into())
        );
    }

    #[test]
    fn test_non_ascii_values_rejected() {
        assert_eq!(
            MediaType::create("text", "plain", [("a", "\u{e9}")]).unwrap_err(),
            Error::InvalidToken("\u{e9}".into())
        );
        assert_eq!(
            TEXT_PLAIN.with_param("name", "caf\u{e9}").unwrap_err(),
            Error::InvalidToken("caf\u{e9}".into())
        );

        // every accepted value renders to something parse takes back
        let created = MediaType::create("text", "plain", [("a", "\u{7f}\"\\\t")]).unwrap();
        assert_eq!(MediaType::parse(&created.to_string()).unwrap(), created);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", TEXT_PLAIN), "\"text/plain\"");
        assert_eq!(
            format!("{:?}", mt("text/plain; a=\"b c\"")),
            r#""text/plain; a=\"b c\"""#
        );
    }

    #[test]
    fn test_accessors() {
        let parsed = mt("Multipart/Form-Data; Boundary=XyZ");
        assert_eq!(parsed.type_(), MULTIPART);
        assert_eq!(parsed.subtype(), FORM_DATA);
        assert_eq!(parsed.param(BOUNDARY), Some("XyZ"));
        assert!(parsed.has_params());
        assert!(!TEXT_PLAIN.has_params());
    }
}
