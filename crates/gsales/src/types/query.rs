//! Filter, sort and pagination descriptors for collection queries

use serde::{Deserialize, Serialize};
use serde_json::Value;

use gsales_transport::Params;

use crate::error::Result;

/// Comparison applied by a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Field equals value
    #[serde(rename = "is")]
    Equal,
    /// Field differs from value
    #[serde(rename = "isnot")]
    NotEqual,
    /// SQL-style pattern match (`%` wildcard)
    #[serde(rename = "like")]
    Like,
    /// Field greater than value
    #[serde(rename = "gt")]
    GreaterThan,
    /// Field greater than or equal to value
    #[serde(rename = "ge")]
    GreaterOrEqual,
    /// Field less than value
    #[serde(rename = "lt")]
    LessThan,
    /// Field less than or equal to value
    #[serde(rename = "le")]
    LessOrEqual,
}

/// A single predicate on a field. Several filters are combined with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Field name as known to the remote service
    pub field: String,
    /// Comparison operator
    pub operator: Operator,
    /// Value compared against
    pub value: Value,
}

impl Filter {
    /// Create a filter.
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// `field = value`
    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::Equal, value)
    }

    /// `field != value`
    pub fn not_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::NotEqual, value)
    }

    /// `field LIKE pattern`
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(field, Operator::Like, Value::String(pattern.into()))
    }

    /// `field > value`
    pub fn greater_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::GreaterThan, value)
    }

    /// `field < value`
    pub fn less_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::LessThan, value)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Ordering of a collection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Field to order by
    pub field: String,
    /// Direction
    pub direction: Direction,
}

impl Sort {
    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Filter, sort and pagination of a collection query.
///
/// Every part is optional; absent parts are not sent, so the remote service
/// applies its own defaults.
///
/// ```
/// use gsales::{CollectionQuery, Filter, Sort};
///
/// let query = CollectionQuery::new()
///     .filter(Filter::equal("status", 1))
///     .filter(Filter::like("title", "Spring%"))
///     .sort(Sort::desc("created"))
///     .limit(20)
///     .offset(40);
///
/// let params = query.to_params().unwrap();
/// assert_eq!(params["filter"].as_array().unwrap().len(), 2);
/// assert_eq!(params["limit"], 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectionQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
}

impl CollectionQuery {
    /// An empty query: remote defaults for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter; all filters must match.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.push(filter);
        self
    }

    /// Add several filters; all filters must match.
    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filter.extend(filters);
        self
    }

    /// Set the ordering.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Limit the number of returned entities.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first `offset` entities.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Named parameters for the remote call, containing only present parts.
    pub fn to_params(&self) -> Result<Params> {
        match serde_json::to_value(self)? {
            Value::Object(params) => Ok(params),
            _ => Ok(Params::new()),
        }
    }
}

impl From<Vec<Filter>> for CollectionQuery {
    fn from(filter: Vec<Filter>) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}

/// Named parameters for a count call: the `filter` key exactly as
/// [`CollectionQuery::to_params`] would send it.
pub fn filter_params(filters: &[Filter]) -> Result<Params> {
    let mut params = Params::new();
    if !filters.is_empty() {
        params.insert("filter".to_string(), serde_json::to_value(filters)?);
    }
    Ok(params)
}
