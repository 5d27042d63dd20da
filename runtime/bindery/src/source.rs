use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;

use crate::errors::DecodeError;

/// The flat, multi-valued input of a binding operation.
///
/// Each key maps to one or more values, in the order they were supplied.
/// A [`SourceMap`] is never mutated while a target is being bound.
///
/// # Example
///
/// ```rust
/// use bindery::SourceMap;
///
/// let source = SourceMap::from_query("room_ids=1&room_ids=2&name=Hi%20there");
/// assert_eq!(source.get("room_ids"), Some(&["1".to_string(), "2".to_string()][..]));
/// assert_eq!(source.first("name"), Some("Hi there"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap(IndexMap<String, Vec<String>>);

impl SourceMap {
    /// An empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Keys and values are percent-decoded and `+` is interpreted as a space.
    /// Repeated keys accumulate their values in order.
    pub fn from_query(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Build a source out of the raw captures of a router match.
    ///
    /// Values are percent-decoded, keys are used as they are.
    /// If a value is not valid UTF8 once decoded, a [`DecodeError`] is returned.
    pub fn from_encoded_path_params<'a, I>(params: I) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut source = Self::new();
        for (key, raw) in params {
            let value = percent_decode_str(raw)
                .decode_utf8()
                .map_err(|e| DecodeError {
                    invalid_key: key.to_owned(),
                    invalid_raw_segment: raw.to_owned(),
                    source: e,
                })?;
            source.append(key, value.into_owned());
        }
        Ok(source)
    }

    /// Add a value under `key`, after any value already stored there.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all the values stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(key.into(), values)
    }

    /// All the values stored under `key`, in order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// The first value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)?.first().map(String::as_str)
    }

    /// Returns `true` if `key` is present, even with no values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys and their values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for SourceMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.append(key, value);
        }
        source
    }
}

impl From<HashMap<String, Vec<String>>> for SourceMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        // Sort to keep iteration order independent of the hasher.
        Self(map.into_iter().collect::<BTreeMap<_, _>>().into_iter().collect())
    }
}

impl From<BTreeMap<String, Vec<String>>> for SourceMap {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map.into_iter().collect())
    }
}
