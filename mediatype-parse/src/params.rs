use std::borrow::Cow;
use std::collections::HashMap;
use std::mem;

use crate::{Malformed, ParseError};

/// Ordered, duplicate-free list of parameters.
///
/// Names are stored lowercase; lookups compare them ASCII
/// case-insensitively. The pairs live in a `Vec` for ordering, with a
/// name to position index beside it.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    entries: Vec<(String, String)>,
    // `None` until the first insert, so `new` can stay `const`.
    index: Option<HashMap<String, usize>>,
}

impl ParamList {
    /// An empty list.
    #[inline]
    pub const fn new() -> ParamList {
        ParamList {
            entries: Vec::new(),
            index: None,
        }
    }

    /// Number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Whether `name` is set to exactly `value`.
    #[inline]
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    /// Whether every parameter of `other` is also in `self`, with the same
    /// value.
    pub fn contains_all(&self, other: &ParamList) -> bool {
        other.iter().all(|(name, value)| self.contains(name, value))
    }

    /// Sets `name` to `value`.
    ///
    /// An existing parameter keeps its position and gets the new value,
    /// which is returned. A new parameter goes to the end.
    pub fn insert(&mut self, mut name: String, value: String) -> Option<String> {
        name.make_ascii_lowercase();
        let index = self.index.get_or_insert_with(HashMap::new);
        match index.get(&name).copied() {
            Some(i) => Some(mem::replace(&mut self.entries[i].1, value)),
            None => {
                index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Inserts every parameter of `other`, in order.
    pub fn overlay(&mut self, other: ParamList) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Removes `name`, returning its value if it was set.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let i = self.position(name)?;
        let (name, value) = self.entries.remove(i);
        if let Some(index) = self.index.as_mut() {
            index.remove(&name);
            for (pos, (later, _)) in self.entries.iter().enumerate().skip(i) {
                if let Some(slot) = index.get_mut(later.as_str()) {
                    *slot = pos;
                }
            }
        }
        Some(value)
    }

    /// The parameters, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let index = self.index.as_ref()?;
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            index.get(&name.to_ascii_lowercase()).copied()
        } else {
            index.get(name).copied()
        }
    }
}

impl PartialEq for ParamList {
    // Order doesn't matter, names are unique so equal lengths plus
    // one-sided containment is enough.
    fn eq(&self, other: &ParamList) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

impl Eq for ParamList {}

/// Scans the parameter tail of `s`, which starts at byte `start`.
///
/// `start` is the index of the first `;`, or `s.len()` when there are no
/// parameters. Attributes are returned trimmed but otherwise untouched,
/// quoted values are returned unquoted with quoted-pairs resolved.
pub fn scan_params(s: &str, start: usize) -> Result<Vec<(&str, Cow<'_, str>)>, ParseError> {
    let mut params = Vec::new();
    let mut pos = start;
    while pos < s.len() {
        let (attribute, next) = read_attribute(s, pos)?;
        let (value, next) = read_value(s, next)?;
        params.push((attribute, value));
        pos = next;
    }
    Ok(params)
}

// `pos` is at a `;`. Returns the attribute and the index following its `=`.
fn read_attribute(s: &str, pos: usize) -> Result<(&str, usize), ParseError> {
    match s.as_bytes()[pos] {
        b';' => (),
        byte => {
            return Err(ParseError::InvalidMediaType {
                pos,
                kind: Malformed::UnexpectedByte(byte),
            })
        }
    }

    let start = pos + 1;
    match s[start..].find('=') {
        Some(eq) => Ok((s[start..start + eq].trim(), start + eq + 1)),
        None => Err(ParseError::InvalidMediaType {
            pos: s.len(),
            kind: Malformed::MissingEqual,
        }),
    }
}

// `pos` is just past a `=`. Returns the value and the index of the byte
// following it (a `;` or the end).
fn read_value(s: &str, pos: usize) -> Result<(Cow<'_, str>, usize), ParseError> {
    let bytes = s.as_bytes();
    match bytes.get(pos) {
        Some(b'"') => {
            let mut is_quoted_pair = false;
            for (i, &c) in bytes.iter().enumerate().skip(pos + 1) {
                if is_quoted_pair {
                    is_quoted_pair = false;
                } else if c == b'\\' {
                    is_quoted_pair = true;
                } else if c == b'"' {
                    let value = quoted_string::unquote_unchecked(&s[pos..=i]);
                    return Ok((value, i + 1));
                }
            }
            Err(ParseError::InvalidMediaType {
                pos: s.len(),
                kind: Malformed::MissingQuote,
            })
        },
        Some(b';') | None => Err(ParseError::InvalidMediaType {
            pos,
            kind: Malformed::MissingValue,
        }),
        Some(_) => {
            let end = s[pos..].find(';').map_or(s.len(), |i| pos + i);
            Ok((Cow::Borrowed(&s[pos..end]), end))
        },
    }
}
