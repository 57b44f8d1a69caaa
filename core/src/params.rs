//! Query parameters and the table of documented defaults.
//!
//! # Design
//! `QueryParameters` is built fresh per call and iterates by name, so the
//! rendered query string is deterministic. `DefaultParameters` is read-only;
//! the query builder consults it only to drop parameters that would not
//! change the API's behavior.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::BaseFilter;

/// A single parameter value: a scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    /// Wire form. Lists are joined with `;` in input order.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Text(s) => s.clone(),
            ParamValue::Bool(b) => b.to_string(),
            ParamValue::List(items) => items.join(";"),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(n: $t) -> Self {
                ParamValue::Int(i64::from(n))
            }
        })*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<BaseFilter> for ParamValue {
    fn from(base: BaseFilter) -> Self {
        ParamValue::Text(base.as_str().to_string())
    }
}

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(items: &[T]) -> Self {
        ParamValue::List(items.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ParamValue {
    fn from(items: [T; N]) -> Self {
        ParamValue::List(items.iter().map(ToString::to_string).collect())
    }
}

/// Named parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    values: BTreeMap<String, ParamValue>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter, returning the previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParameters::new();
        for (k, v) in iter {
            params.insert(k.as_ref(), v);
        }
        params
    }
}

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGESIZE: i64 = 30;
pub const DEFAULT_FROMDATE: i64 = 0;
pub const DEFAULT_TODATE: i64 = i64::MAX;
pub const DEFAULT_ORDER: &str = "desc";
pub const DEFAULT_SORT: &str = "activity";
pub const DEFAULT_MIN: i64 = i64::MIN;
pub const DEFAULT_MAX: i64 = i64::MAX;

/// Documented API defaults. A parameter equal to its default is omitted
/// from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultParameters {
    values: BTreeMap<&'static str, ParamValue>,
}

impl DefaultParameters {
    pub fn standard() -> Self {
        let values = BTreeMap::from([
            ("page", ParamValue::Int(DEFAULT_PAGE)),
            ("pagesize", ParamValue::Int(DEFAULT_PAGESIZE)),
            ("fromdate", ParamValue::Int(DEFAULT_FROMDATE)),
            ("todate", ParamValue::Int(DEFAULT_TODATE)),
            ("order", ParamValue::Text(DEFAULT_ORDER.to_string())),
            ("sort", ParamValue::Text(DEFAULT_SORT.to_string())),
            ("min", ParamValue::Int(DEFAULT_MIN)),
            ("max", ParamValue::Int(DEFAULT_MAX)),
            ("tagged", ParamValue::List(Vec::new())),
            ("include", ParamValue::List(Vec::new())),
            ("exclude", ParamValue::List(Vec::new())),
            ("unsafe", ParamValue::Bool(false)),
            ("base", ParamValue::Text(BaseFilter::Default.as_str().to_string())),
        ]);
        Self { values }
    }

    /// An empty table; nothing is ever omitted.
    pub fn none() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// True only for an exact match: same variant, same value.
    pub fn is_default(&self, name: &str, value: &ParamValue) -> bool {
        self.values.get(name) == Some(value)
    }
}

impl Default for DefaultParameters {
    fn default() -> Self {
        Self::standard()
    }
}
