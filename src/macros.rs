use std::borrow::Cow;

use mediatype_parse::{Mime, ParamList};

use super::MediaType;

/// Creates a `MediaType` from a string literal, checked at compile time.
///
/// The literal is parsed and normalized while compiling, an invalid
/// literal is a compile error.
///
/// # Example
///
/// ```
/// let mt = mediatype::media_type!("Text/HTML; Charset=utf-8");
/// assert_eq!(mt, mediatype::TEXT_HTML.with_charset(encoding_rs::UTF_8));
/// ```
#[macro_export]
macro_rules! media_type {
    ($s:literal) => {
        $crate::MediaType::private_from_proc_macro($crate::private::media_type_parts!($s))
    };
}

impl MediaType {
    /// **DO NOT CALL THIS FUNCTION.**
    ///
    /// This function has no backwards-compatibility guarantees. It can and
    /// *will* change, and your code *will* break.
    ///
    /// # Tests
    ///
    /// ```
    /// let foo = mediatype::media_type!("text/foo");
    /// assert_eq!(foo.type_(), mediatype::TEXT);
    /// assert_eq!(foo.subtype(), "foo");
    /// assert!(!foo.has_params());
    /// ```
    ///
    /// # Uppercase
    ///
    /// ```
    /// mediatype::media_type!("TEXT/PLAIN");
    /// ```
    ///
    /// # Ranges
    ///
    /// ```
    /// mediatype::media_type!("text/*");
    /// ```
    ///
    /// ```compile_fail
    /// mediatype::media_type!("*/html");
    /// ```
    ///
    /// # Malformed
    ///
    /// ```compile_fail
    /// mediatype::media_type!("te xt/html");
    /// ```
    ///
    /// ```compile_fail
    /// mediatype::media_type!("text/html; charset=\"utf-8");
    /// ```
    ///
    /// # String literal
    ///
    /// ```compile_fail
    /// mediatype::media_type!(text/foo);
    /// ```
    ///
    /// ```compile_fail
    /// mediatype::media_type!("text/foo", "+json");
    /// ```
    #[doc(hidden)]
    pub fn private_from_proc_macro(
        (type_, subtype, params): (&'static str, &'static str, &'static [(&'static str, &'static str)]),
    ) -> MediaType {
        let mut list = ParamList::new();
        for &(name, value) in params {
            list.insert(name.to_owned(), value.to_owned());
        }

        MediaType {
            mime: Mime {
                type_: Cow::Borrowed(type_),
                subtype: Cow::Borrowed(subtype),
                params: list,
            },
        }
    }
}
