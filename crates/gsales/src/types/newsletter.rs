//! Newsletter and recipient types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identifier::{Entity, Identifier};

/// Newsletter attributes, as sent when creating a newsletter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsletterBase {
    /// Internal title
    #[serde(default, deserialize_with = "super::lenient::string_or_default")]
    pub title: String,

    /// Mail subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Sender name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,

    /// Sender address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,

    /// Plain text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,

    /// HTML body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    /// Attributes not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewsletterBase {
    /// Create newsletter attributes with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the mail subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the sender.
    pub fn from(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self.from_email = Some(email.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content_text = Some(text.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content_html = Some(html.into());
        self
    }
}

/// A persisted newsletter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newsletter {
    /// Identifier assigned by the service
    pub id: Identifier,

    /// Creation time
    #[serde(
        default,
        with = "super::datetime::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<NaiveDateTime>,

    /// Time the newsletter was last spooled for delivery
    #[serde(
        default,
        with = "super::datetime::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub spooled: Option<NaiveDateTime>,

    /// Newsletter attributes
    #[serde(flatten)]
    pub data: NewsletterBase,
}

impl Newsletter {
    /// Whether the newsletter has been spooled at least once.
    pub fn is_spooled(&self) -> bool {
        self.spooled.is_some()
    }
}

impl Entity for Newsletter {
    fn id(&self) -> Identifier {
        self.id
    }
}

/// Recipient attributes, as sent when adding a recipient to a newsletter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientBase {
    /// Mail address
    #[serde(default, deserialize_with = "super::lenient::string_or_default")]
    pub email: String,

    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    /// Company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Attributes not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RecipientBase {
    /// Create recipient attributes for an address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set first and last name.
    pub fn name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self.lastname = Some(lastname.into());
        self
    }

    /// Set the company.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// A recipient attached to a newsletter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Identifier assigned by the service
    pub id: Identifier,

    /// Newsletter the recipient belongs to, when reported
    #[serde(
        default,
        rename = "newsletterid",
        skip_serializing_if = "Option::is_none"
    )]
    pub newsletter_id: Option<Identifier>,

    /// Customer the recipient was created from, when reported
    #[serde(default, rename = "customerid", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Identifier>,

    /// Recipient attributes
    #[serde(flatten)]
    pub data: RecipientBase,
}

impl Entity for Recipient {
    fn id(&self) -> Identifier {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_newsletter_deserialization() {
        let newsletter: Newsletter = serde_json::from_value(json!({
            "id": 7,
            "title": "Spring",
            "subject": "Spring offers",
            "created": "2015-03-01 08:30:00",
            "spooled": "0000-00-00 00:00:00",
            "template": "default"
        }))
        .unwrap();

        assert_eq!(newsletter.id(), Identifier::new(7));
        assert!(newsletter.created.is_some());
        assert!(!newsletter.is_spooled());
        assert_eq!(newsletter.data.subject.as_deref(), Some("Spring offers"));
        assert_eq!(newsletter.data.extra.get("template"), Some(&json!("default")));
        assert!(!newsletter.data.extra.contains_key("created"));
    }

    #[test]
    fn test_newsletter_base_builder() {
        let base = NewsletterBase::new("Spring")
            .subject("Hello")
            .from("Shop", "shop@example.com")
            .text("plain")
            .html("<p>html</p>");

        let json = serde_json::to_value(&base).unwrap();
        assert_eq!(json["from_email"], "shop@example.com");
        assert_eq!(json["content_html"], "<p>html</p>");
    }

    #[test]
    fn test_recipient_deserialization() {
        let recipient: Recipient = serde_json::from_value(json!({
            "id": "31",
            "newsletterid": "7",
            "email": "jane@example.com",
            "firstname": "Jane"
        }))
        .unwrap();

        assert_eq!(recipient.id(), Identifier::new(31));
        assert_eq!(recipient.newsletter_id, Some(Identifier::new(7)));
        assert_eq!(recipient.customer_id, None);
        assert_eq!(recipient.data.firstname.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_recipient_base_serialization() {
        let base = RecipientBase::new("jane@example.com").name("Jane", "Doe");
        assert_eq!(
            serde_json::to_value(&base).unwrap(),
            json!({"email": "jane@example.com", "firstname": "Jane", "lastname": "Doe"})
        );
    }
}
