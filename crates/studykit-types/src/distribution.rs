use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::str::FromStr;

/// Separator between base category and variant in raw column names ("INTJ-A").
pub const DEFAULT_SEPARATOR: char = '-';

/// A raw column name split into base category and optional variant.
///
/// The split happens at the first `separator`. A name without the separator,
/// or one that starts with it, is its own base category. An empty suffix
/// ("INTJ-") counts as no variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnName {
    pub raw: String,
    pub base: String,
    pub variant: Option<String>,
}

impl ColumnName {
    pub fn parse(raw: &str, separator: char) -> Self {
        match raw.split_once(separator) {
            Some((base, variant)) if !base.is_empty() => Self {
                raw: raw.to_string(),
                base: base.to_string(),
                variant: (!variant.is_empty()).then(|| variant.to_string()),
            },
            _ => Self {
                raw: raw.to_string(),
                base: raw.to_string(),
                variant: None,
            },
        }
    }
}

/// Category name to value, iterated in lexicographic category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryVector(BTreeMap<String, f64>);

impl CategoryVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(category.into(), value)
    }

    /// Add `value` to the category, starting from zero.
    pub fn accumulate(&mut self, category: &str, value: f64) {
        *self.0.entry(category.to_string()).or_insert(0.0) += value;
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.iter().map(|(k, v)| (k.clone(), f(*v))).collect())
    }
}

impl FromIterator<(String, f64)> for CategoryVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for CategoryVector {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl<'a> IntoIterator for &'a CategoryVector {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whether a row is read per raw column or per aggregated base category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Aggregated,
    Raw,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Aggregated => write!(f, "aggregated"),
            Granularity::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "aggregated" => Ok(Granularity::Aggregated),
            "raw" => Ok(Granularity::Raw),
            _ => Err(Error::UnknownGranularity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(raw: &str) -> (String, Option<String>) {
        let name = ColumnName::parse(raw, DEFAULT_SEPARATOR);
        (name.base, name.variant)
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        assert_eq!(parts("INTJ-A"), ("INTJ".to_string(), Some("A".to_string())));
        assert_eq!(
            parts("INTJ-T-x"),
            ("INTJ".to_string(), Some("T-x".to_string()))
        );
    }

    #[test]
    fn test_parse_without_separator_is_own_base() {
        assert_eq!(parts("INTJ"), ("INTJ".to_string(), None));
    }

    #[test]
    fn test_parse_edge_separators() {
        assert_eq!(parts("-A"), ("-A".to_string(), None));
        assert_eq!(parts("INTJ-"), ("INTJ".to_string(), None));
    }

    #[test]
    fn test_parse_custom_separator() {
        let name = ColumnName::parse("ENFP_T", '_');
        assert_eq!(name.base, "ENFP");
        assert_eq!(name.variant.as_deref(), Some("T"));
        assert_eq!(name.raw, "ENFP_T");
    }

    #[test]
    fn test_vector_iterates_in_category_order() {
        let v: CategoryVector = [("b", 1.0), ("a", 2.0), ("c", 3.0)].into_iter().collect();
        let order: Vec<&str> = v.categories().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(v.sum(), 6.0);
    }

    #[test]
    fn test_accumulate_sums_into_category() {
        let mut v = CategoryVector::new();
        v.accumulate("INTJ", 5.0);
        v.accumulate("INTJ", 3.0);
        assert_eq!(v.get("INTJ"), Some(8.0));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_granularity_round_trip() {
        for g in [Granularity::Aggregated, Granularity::Raw] {
            assert_eq!(g.to_string().parse::<Granularity>(), Ok(g));
        }
        assert!("fine".parse::<Granularity>().is_err());
    }
}
