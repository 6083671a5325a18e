use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use mediatype_parse::ParamList;

/// A read-only view of the parameters of a `MediaType`.
///
/// Iteration follows insertion order. Lookups are ASCII case-insensitive
/// on the attribute, exact on the value.
///
/// # Example
///
/// ```
/// let mt = mediatype::MediaType::parse(
///     "multipart/form-data; charset=utf-8; boundary=AbC"
/// ).unwrap();
/// let params = mt.params();
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("BOUNDARY"), Some("AbC"));
/// assert!(params.contains_value("UTF-8"));
/// assert_eq!(params.keys().collect::<Vec<_>>(), ["charset", "boundary"]);
/// ```
#[derive(Clone, Copy)]
pub struct Params<'a> {
    list: &'a ParamList,
}

impl<'a> Params<'a> {
    #[inline]
    pub(crate) fn new(list: &'a ParamList) -> Params<'a> {
        Params { list }
    }

    /// Looks up the value of a parameter.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.list.get(name)
    }

    /// Whether a parameter with this name is set.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether any parameter has exactly this value.
    pub fn contains_value(&self, value: &str) -> bool {
        self.values().any(|v| v == value)
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether there are no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterates over `(name, value)` pairs.
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.list.as_slice().iter(),
        }
    }

    /// Iterates over the parameter names.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(name, _)| name)
    }

    /// Iterates over the parameter values.
    pub fn values(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|(_, value)| value)
    }
}

impl<'a> IntoIterator for Params<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> PartialEq for Params<'a> {
    #[inline]
    fn eq(&self, other: &Params<'a>) -> bool {
        self.list == other.list
    }
}

impl<'a> fmt::Debug for Params<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over the parameters of a `MediaType`.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> fmt::Debug for Iter<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Iter").finish()
    }
}
