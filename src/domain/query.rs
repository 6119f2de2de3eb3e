//! A query is a set of `attribute = value` filters applied to records.
//!
//! Matching is conjunctive: a record is kept only if every filter matches.
//! Comparison is loose in the same way query-string values are loose: the text
//! `"1000"` matches the numeric id `1000`, and blank text counts as zero.
//! List-valued attributes (group members) match if
//! any element matches; the full list is never compared.
//!
//! A filter naming an attribute the record type does not have can never
//! match, so such a query always returns an empty result.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use super::{Field, Id, Record};

/// The value side of a single filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// An integer value.
    Int(i64),
    /// A text value, such as a raw query-string parameter.
    Text(String),
}

impl FilterValue {
    /// Checks this value against a single record attribute.
    #[must_use]
    pub fn matches(&self, field: Field<'_>) -> bool {
        match field {
            Field::Text(text) => self.matches_text(text),
            Field::Id(id) => self.matches_id(id),
            Field::List(items) => items.iter().any(|item| self.matches_text(item)),
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        match self {
            Self::Text(value) => value == text,
            Self::Int(value) => coerce_number(text) == Some(*value),
        }
    }

    fn matches_id(&self, id: Id) -> bool {
        let Some(id) = id else {
            return false;
        };
        match self {
            Self::Int(value) => *value == id,
            Self::Text(value) => coerce_number(value) == Some(id),
        }
    }
}

/// Numeric coercion for loose comparison. Surrounding whitespace is ignored
/// and blank text counts as zero; anything else must be a whole integer.
fn coerce_number(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Some(0)
    } else {
        trimmed.parse().ok()
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A mapping from attribute name to the value it must match.
///
/// An empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, FilterValue>);

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, returning the query for chaining.
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Adds a filter, replacing any previous value for the same attribute.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Option<FilterValue> {
        self.0.insert(attribute.into(), value.into())
    }

    /// Removes the filter on `attribute`, if any.
    pub fn remove(&mut self, attribute: &str) -> Option<FilterValue> {
        self.0.remove(attribute)
    }

    /// Moves the filter on `from` to `to`.
    ///
    /// Any existing filter on `to` is replaced. Nothing happens if there is no
    /// filter on `from`.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(value) = self.remove(from) {
            self.insert(to, value);
        }
    }

    /// Returns the value the given attribute is filtered on.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&FilterValue> {
        self.0.get(attribute)
    }

    /// Returns `true` if there are no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the filters in attribute order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, FilterValue> {
        self.0.iter()
    }

    /// Returns `true` if the record satisfies every filter.
    #[must_use]
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.0.iter().all(|(attribute, value)| {
            record
                .attribute(attribute)
                .is_some_and(|field| value.matches(field))
        })
    }

    /// Keeps the records that satisfy every filter, in their original order.
    #[must_use]
    pub fn filter<R: Record>(&self, records: Vec<R>) -> Vec<R> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(attribute, value)| (attribute.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a FilterValue);
    type IntoIter = btree_map::Iter<'a, String, FilterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
