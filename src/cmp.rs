use std::hash::{Hash, Hasher};

use mediatype_parse::{Mime, WILDCARD};

pub(crate) fn str_eq(mime: &Mime, s: &str) -> bool {
    mediatype_parse::parse(s)
        .map(|other_mime| mime_eq(mime, &other_mime))
        .unwrap_or(false)
}

pub(crate) fn mime_eq(a: &Mime, b: &Mime) -> bool {
    essence_eq(a, b) && a.params == b.params
}

fn essence_eq(a: &Mime, b: &Mime) -> bool {
    a.type_ == b.type_ && a.subtype == b.subtype
}

/// Whether `mime` falls within `range`.
///
/// Parameters of `range` must all be present in `mime` with equal values;
/// extra parameters on `mime` are fine.
pub(crate) fn within(mime: &Mime, range: &Mime) -> bool {
    (range.type_ == WILDCARD || range.type_ == mime.type_)
        && (range.subtype == WILDCARD || range.subtype == mime.subtype)
        && mime.params.contains_all(&range.params)
}

pub(crate) fn hash<H: Hasher>(mime: &Mime, state: &mut H) {
    mime.type_.hash(state);
    mime.subtype.hash(state);

    // Equality ignores parameter order, so must the hash. Names are
    // unique, sorting by them gives a canonical order.
    let mut params = mime.params.iter().collect::<Vec<_>>();
    params.sort_unstable_by(|a, b| a.0.cmp(b.0));
    params.hash(state);
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::*;

    fn hash_of(mt: &MediaType) -> u64 {
        let mut hasher = DefaultHasher::new();
        mt.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_is_order_independent() {
        let a = MediaType::parse("application/x-custom; param1=a; param2=b").unwrap();
        let b = MediaType::parse("application/x-custom; param2=b; param1=a").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_eq_is_case_insensitive_where_normalized() {
        let a = MediaType::parse("TEXT/HTML; Charset=utf-8").unwrap();
        let b = MediaType::parse("text/html; charset=UTF-8").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_eq_values_are_case_sensitive() {
        let a = MediaType::parse("multipart/form-data; boundary=ABC").unwrap();
        let b = MediaType::parse("multipart/form-data; boundary=abc").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_eq_param_count() {
        let a = MediaType::parse("text/plain; a=1").unwrap();
        let b = MediaType::parse("text/plain; a=1; b=2").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_ne!(TEXT_PLAIN, a);
    }

    #[test]
    fn test_str_eq() {
        let mt = MediaType::parse("text/plain; charset=utf-8; foo=bar").unwrap();
        assert_eq!(mt, "TEXT/PLAIN; foo=bar; charset=\"utf-8\"");
        assert_eq!("text/plain;charset=UTF-8;foo=bar", mt);
        assert_ne!(mt, "text/plain; charset=utf-8; foo=BAR");
        assert_ne!(mt, "not a media type");
    }

    #[test]
    fn test_within_wildcards() {
        assert!(TEXT_HTML.is(&STAR_STAR), "*/* matches everything");
        assert!(TEXT_HTML.is(&TEXT_STAR), "text/* matches text/html");
        assert!(TEXT_PLAIN.is(&TEXT_STAR), "text/* matches text/plain");
        assert!(!IMAGE_GIF.is(&TEXT_STAR), "text/* doesn't match image/gif");
        assert!(TEXT_HTML.is(&TEXT_HTML));
        assert!(!TEXT_HTML.is(&TEXT_PLAIN));
    }

    #[test]
    fn test_within_is_not_symmetric() {
        let html = MediaType::new("text", "html").unwrap();
        let text = MediaType::new("text", "*").unwrap();
        assert!(html.is(&text));
        assert!(!text.is(&html));
        assert!(!STAR_STAR.is(&TEXT_STAR));
        assert!(TEXT_STAR.is(&STAR_STAR));
    }

    #[test]
    fn test_within_params() {
        let mt = MediaType::create("text", "plain", [("charset", "UTF-8"), ("q", "1")]).unwrap();

        let range = MediaType::create("text", "plain", [("charset", "UTF-8")]).unwrap();
        assert!(mt.is(&range));

        let range = MediaType::create("text", "*", [("charset", "utf-8")]).unwrap();
        assert!(mt.is(&range), "charset is compared after normalization");

        let range = MediaType::create("text", "plain", [("charset", "UTF-8"), ("boundary", "x")]).unwrap();
        assert!(!mt.is(&range), "boundary is absent on the media type");

        let range = MediaType::create("text", "plain", [("q", "0.5")]).unwrap();
        assert!(!mt.is(&range), "q is an ordinary parameter");

        assert!(!TEXT_PLAIN.is(&mt));
    }
}
