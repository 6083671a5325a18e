//! # MediaType
//!
//! Strongly typed media types (`text/html; charset=UTF-8`) and media
//! ranges (`text/*`), as used by `Content-Type` and `Accept`.
//!
//! ## What is a MediaType?
//!
//! Example media type string: `text/plain`
//!
//! ```
//! let plain_text: mediatype::MediaType = "text/plain".parse().unwrap();
//! assert_eq!(plain_text, mediatype::TEXT_PLAIN);
//! ```
//!
//! Parsing normalizes: type, subtype and parameter names are lowercased,
//! the `charset` value is uppercased.
//!
//! ```
//! let mt = mediatype::MediaType::parse("Text/HTML; Charset=\"utf-8\"").unwrap();
//! assert_eq!(mt.to_string(), "text/html; charset=UTF-8");
//! ```
//!
//! ## Inspecting MediaTypes
//!
//! ```
//! let mt = mediatype::TEXT_PLAIN;
//! match (mt.type_(), mt.subtype()) {
//!     (mediatype::TEXT, mediatype::PLAIN) => println!("plain text!"),
//!     (mediatype::TEXT, _) => println!("structured text"),
//!     _ => println!("not text"),
//! }
//! ```
//!
//! ## Matching against media ranges
//!
//! ```
//! let html = mediatype::MediaType::parse("text/html; charset=utf-8").unwrap();
//!
//! assert!(html.is(&mediatype::TEXT_STAR));
//! assert!(html.is(&mediatype::STAR_STAR));
//! assert!(!html.is(&mediatype::IMAGE_STAR));
//! ```

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub use mediatype_parse::Malformed;

pub use self::charset::Charset;
pub use self::error::Error;
pub use self::params::{Iter, Params};
pub use self::type_::MediaType;

mod charset;
mod cmp;
mod error;
#[cfg(feature = "macro")]
mod macros;
mod params;
#[cfg(feature = "serde1")]
mod serde;
mod type_;

#[doc(hidden)]
#[cfg(feature = "macro")]
pub mod private {
    pub use mediatype_macro::media_type_parts;
}

macro_rules! names {
    ($($id:ident, $e:expr;)*) => (
        $(
        #[doc = concat!("`", $e, "`")]
        pub const $id: &str = $e;
        )*

        #[test]
        fn test_names_macro_consts() {
            $(
            assert_eq!($id.to_ascii_lowercase(), $id);
            assert!(mediatype_parse::is_token_str($id), "{:?} is not a token", $id);
            )*
        }
    )
}

names! {
    STAR, "*";

    TEXT, "text";
    IMAGE, "image";
    AUDIO, "audio";
    VIDEO, "video";
    APPLICATION, "application";
    MULTIPART, "multipart";
    MESSAGE, "message";
    MODEL, "model";
    FONT, "font";

    // common text/ subtypes
    PLAIN, "plain";
    HTML, "html";
    XML, "xml";
    JAVASCRIPT, "javascript";
    CSS, "css";
    CSV, "csv";
    EVENT_STREAM, "event-stream";
    VCARD, "vcard";

    // common application/ subtypes
    JSON, "json";
    WWW_FORM_URLENCODED, "x-www-form-urlencoded";
    MSGPACK, "msgpack";
    OCTET_STREAM, "octet-stream";
    PDF, "pdf";

    // common font/ subtypes
    WOFF, "woff";
    WOFF2, "woff2";

    // multipart/ subtypes
    FORM_DATA, "form-data";

    // common image/ subtypes
    BMP, "bmp";
    GIF, "gif";
    JPEG, "jpeg";
    PNG, "png";
    SVG, "svg+xml";

    // audio/ and video/ subtypes
    BASIC, "basic";
    MPEG, "mpeg";
    MP4, "mp4";
    OGG, "ogg";

    // parameters
    CHARSET, "charset";
    BOUNDARY, "boundary";
}

macro_rules! mimes {
    ($($id:ident, $type_:literal, $subtype:literal;)+) => (
        $(
        #[doc = concat!("`", $type_, "/", $subtype, "`")]
        pub const $id: MediaType = MediaType::from_static($type_, $subtype);
        )+

        #[test]
        fn test_mimes_macro_consts() {
            $(
            let parsed = MediaType::parse(concat!($type_, "/", $subtype)).unwrap();
            assert_eq!($id, parsed, "{}", stringify!($id));
            assert_eq!($id.to_string(), concat!($type_, "/", $subtype));
            assert!(!$id.has_params());
            )+
        }
    )
}

mimes! {
    STAR_STAR, "*", "*";

    TEXT_STAR, "text", "*";
    TEXT_PLAIN, "text", "plain";
    TEXT_HTML, "text", "html";
    TEXT_XML, "text", "xml";
    TEXT_CSS, "text", "css";
    TEXT_CSV, "text", "csv";
    TEXT_JAVASCRIPT, "text", "javascript";
    TEXT_EVENT_STREAM, "text", "event-stream";
    TEXT_VCARD, "text", "vcard";

    IMAGE_STAR, "image", "*";
    IMAGE_JPEG, "image", "jpeg";
    IMAGE_GIF, "image", "gif";
    IMAGE_PNG, "image", "png";
    IMAGE_BMP, "image", "bmp";
    IMAGE_SVG, "image", "svg+xml";

    AUDIO_STAR, "audio", "*";
    AUDIO_BASIC, "audio", "basic";
    AUDIO_MPEG, "audio", "mpeg";
    AUDIO_OGG, "audio", "ogg";

    VIDEO_STAR, "video", "*";
    VIDEO_MPEG, "video", "mpeg";
    VIDEO_MP4, "video", "mp4";
    VIDEO_OGG, "video", "ogg";

    FONT_WOFF, "font", "woff";
    FONT_WOFF2, "font", "woff2";

    APPLICATION_STAR, "application", "*";
    APPLICATION_JSON, "application", "json";
    APPLICATION_XML, "application", "xml";
    APPLICATION_JAVASCRIPT, "application", "javascript";
    APPLICATION_WWW_FORM_URLENCODED, "application", "x-www-form-urlencoded";
    APPLICATION_OCTET_STREAM, "application", "octet-stream";
    APPLICATION_MSGPACK, "application", "msgpack";
    APPLICATION_PDF, "application", "pdf";

    MULTIPART_FORM_DATA, "multipart", "form-data";
}
