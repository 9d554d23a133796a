//! Newsletters resource
//!
//! Besides the shared operations, newsletters manage their recipient list and
//! can be spooled for delivery.

use serde_json::Value;
use tracing::info;

use gsales_transport::Params;

use super::{Context, Procedures, ResourceKind};
use crate::api::{Api, decode, decode_integer};
use crate::error::Result;
use crate::types::{
    Customer, EntityRef, Identifier, Newsletter, NewsletterBase, Recipient, RecipientBase,
};

const RECIPIENTS: &str = "getNewsletterRecipients";
const ADD_RECIPIENT: &str = "addNewsletterRecipient";
const ADD_CUSTOMER_AS_RECIPIENT: &str = "addNewsletterRecipientByCustomerId";
const REMOVE_RECIPIENT: &str = "removeNewsletterRecipient";
const SPOOL: &str = "spoolNewsletter";

/// Newsletter resource kind.
#[derive(Debug, Clone, Copy)]
pub struct NewsletterResource;

impl ResourceKind for NewsletterResource {
    type Entity = Newsletter;
    type Base = NewsletterBase;

    const NAME: &'static str = "newsletter";

    const PROCEDURES: Procedures = Procedures {
        get: "getNewsletter",
        list: "getNewsletters",
        // the service really spells it this way
        count: "getNewlettersCount",
        create: "createNewsletter",
        update: "updateNewsletter",
        delete: "deleteNewsletter",
        id_param: "newsletterid",
    };
}

/// Newsletters resource.
///
/// ```no_run
/// # use gsales::Client;
/// # async fn example(client: Client) -> gsales::Result<()> {
/// let newsletters = client.newsletters();
/// newsletters.add_customer_as_recipient(7, 99).await?;
/// newsletters.spool(7).await?;
/// # Ok(())
/// # }
/// ```
pub type Newsletters = Context<NewsletterResource>;

impl Context<NewsletterResource> {
    /// Recipients of a newsletter. An unanswered list is empty.
    pub async fn recipients<'n>(
        &self,
        newsletter: impl Into<EntityRef<'n, Newsletter>>,
    ) -> Result<Vec<Recipient>> {
        let params = newsletter_params(newsletter.into())?;
        match self.api().invoke_raw(RECIPIENTS, params).await? {
            Value::Null => Ok(Vec::new()),
            value => decode(RECIPIENTS, value),
        }
    }

    /// Add a recipient to a newsletter. Returns the service's result code.
    pub async fn add_recipient<'n>(
        &self,
        newsletter: impl Into<EntityRef<'n, Newsletter>>,
        recipient: &RecipientBase,
    ) -> Result<i64> {
        let mut params = newsletter_params(newsletter.into())?;
        params.insert("data".to_string(), serde_json::to_value(recipient)?);
        invoke_integer(self.api(), ADD_RECIPIENT, params).await
    }

    /// Add an existing customer as recipient of a newsletter.
    pub async fn add_customer_as_recipient<'n, 'c>(
        &self,
        newsletter: impl Into<EntityRef<'n, Newsletter>>,
        customer: impl Into<EntityRef<'c, Customer>>,
    ) -> Result<i64> {
        let mut params = newsletter_params(newsletter.into())?;
        let customer_id = customer.into().resolve()?;
        params.insert("customerid".to_string(), Value::from(customer_id));
        invoke_integer(self.api(), ADD_CUSTOMER_AS_RECIPIENT, params).await
    }

    /// Remove a recipient from a newsletter.
    pub async fn remove_recipient<'n, 'r>(
        &self,
        newsletter: impl Into<EntityRef<'n, Newsletter>>,
        recipient: impl Into<EntityRef<'r, Recipient>>,
    ) -> Result<i64> {
        let mut params = newsletter_params(newsletter.into())?;
        let recipient_id = recipient.into().resolve()?;
        params.insert("recipientid".to_string(), Value::from(recipient_id));
        invoke_integer(self.api(), REMOVE_RECIPIENT, params).await
    }

    /// Spool a newsletter for delivery to its recipients.
    pub async fn spool<'n>(&self, newsletter: impl Into<EntityRef<'n, Newsletter>>) -> Result<i64> {
        let params = newsletter_params(newsletter.into())?;
        let result = invoke_integer(self.api(), SPOOL, params).await?;
        info!(result, "Newsletter spooled");
        Ok(result)
    }
}

fn newsletter_params(newsletter: EntityRef<'_, Newsletter>) -> Result<Params> {
    let id: Identifier = newsletter.resolve()?;
    let mut params = Params::new();
    params.insert(NewsletterResource::PROCEDURES.id_param.to_string(), Value::from(id));
    Ok(params)
}

async fn invoke_integer(api: &Api, procedure: &str, params: Params) -> Result<i64> {
    let value = api.invoke_raw(procedure, params).await?;
    decode_integer(procedure, &value)
}
