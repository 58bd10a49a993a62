use std::collections::{BTreeMap, HashMap};

use crate::errors::Result;

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f32) -> String {
    let result = if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x:.3}")
    };
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.')
    } else {
        result.as_str()
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Parse a string to an f32
pub fn strp(s: &str) -> Result<f32> {
    Ok(s.trim().parse::<f32>()?)
}

/// Returns iterator over whitespace-or-comma separated values
///
/// Runs of delimiters collapse, so no empty items are produced.
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// AttrMap - an order preserving map for storing element attributes.
///
/// Implemented with a BTreeMap for key-ordered iteration, and a separate
/// mapping from 'user-key' to index, with the BTreeMap keyed on an (index,
/// user-key) pair.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    attrs: BTreeMap<(usize, String), String>,
    index_map: HashMap<String, usize>,
    next_index: usize,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-update the given key/value into the AttrMap.
    /// If the key is already present, update in place; otherwise append.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let index = *self.index_map.entry(key.clone()).or_insert_with(|| {
            self.next_index += 1;
            self.next_index
        });
        self.attrs.insert((index, key), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index_map.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let index = *self.index_map.get(key)?;
        self.attrs
            .get(&(index, key.to_string()))
            .map(|v| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.index_map.remove(key)?;
        self.attrs.remove(&(index, key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs
            .iter()
            .map(|((_, k), v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut am = Self::new();
        for (k, v) in iter {
            am.insert(k, v);
        }
        am
    }
}

impl From<Vec<(String, String)>> for AttrMap {
    fn from(value: Vec<(String, String)>) -> Self {
        value.into_iter().collect()
    }
}
