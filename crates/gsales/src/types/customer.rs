//! Customer types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identifier::{Entity, Identifier};

/// Customer attributes, as sent when creating a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerBase {
    /// Customer number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customerno: Option<String>,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    /// Mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Attributes not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerBase {
    /// Create customer attributes for a company.
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            ..Self::default()
        }
    }

    /// Create customer attributes for a person.
    pub fn person(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            ..Self::default()
        }
    }

    /// Set the customer number.
    pub fn customerno(mut self, customerno: impl Into<String>) -> Self {
        self.customerno = Some(customerno.into());
        self
    }

    /// Set the mail address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A persisted customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Identifier assigned by the service
    pub id: Identifier,

    /// Customer attributes
    #[serde(flatten)]
    pub data: CustomerBase,
}

impl Entity for Customer {
    fn id(&self) -> Identifier {
        self.id
    }
}
