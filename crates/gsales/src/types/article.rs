//! Article types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identifier::{Entity, Identifier};

/// Article attributes, as sent when creating an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleBase {
    /// Article number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artno: Option<String>,

    /// Title
    #[serde(default, deserialize_with = "super::lenient::string_or_default")]
    pub title: String,

    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit of measure (e.g. "pcs", "h")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Net price per unit
    #[serde(
        default,
        deserialize_with = "super::lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// Tax rate in percent
    #[serde(
        default,
        deserialize_with = "super::lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax: Option<f64>,

    /// Attributes not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleBase {
    /// Create article attributes with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the article number.
    pub fn artno(mut self, artno: impl Into<String>) -> Self {
        self.artno = Some(artno.into());
        self
    }

    /// Set the unit.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the net price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the tax rate.
    pub fn tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }
}

/// A persisted article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier assigned by the service
    pub id: Identifier,

    /// Article attributes
    #[serde(flatten)]
    pub data: ArticleBase,
}

impl Entity for Article {
    fn id(&self) -> Identifier {
        self.id
    }
}
