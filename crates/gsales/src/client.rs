//! Main client implementation for the gSales API

use std::fmt;
use std::sync::{Arc, OnceLock};

use gsales_transport::{TracingTransport, Transport};

use crate::{
    api::Api,
    config::ClientConfig,
    error::{Error, Result},
    resources::{Articles, Customers, Newsletters},
};

/// Main client for interacting with the gSales API.
///
/// The client is a cheap handle: clones share the transport and the lazily
/// created resource contexts.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gsales::Client;
/// use gsales_transport::MockTransport;
///
/// let client = Client::new(Arc::new(MockTransport::new()));
/// let _articles = client.articles();
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api: Api,

    articles: OnceLock<Articles>,
    newsletters: OnceLock<Newsletters>,
    customers: OnceLock<Customers>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").field("api", &self.inner.api).finish()
    }
}

impl Client {
    /// Create a client dispatching through `transport` with the default
    /// configuration.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::from_api(Api::new(transport))
    }

    /// Create a client from a transport and a configuration.
    pub fn from_transport(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        let transport: Arc<dyn Transport> = if config.trace_calls {
            Arc::new(TracingTransport::new(transport))
        } else {
            transport
        };

        Self::from_api(Api::new(transport).with_payload_logging(config.log_payloads))
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    fn from_api(api: Api) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                api,
                articles: OnceLock::new(),
                newsletters: OnceLock::new(),
                customers: OnceLock::new(),
            }),
        }
    }

    /// Access the articles resource.
    pub fn articles(&self) -> &Articles {
        self.inner
            .articles
            .get_or_init(|| Articles::new(self.inner.api.clone()))
    }

    /// Access the newsletters resource.
    pub fn newsletters(&self) -> &Newsletters {
        self.inner
            .newsletters
            .get_or_init(|| Newsletters::new(self.inner.api.clone()))
    }

    /// Access the customers resource.
    pub fn customers(&self) -> &Customers {
        self.inner
            .customers
            .get_or_init(|| Customers::new(self.inner.api.clone()))
    }

    /// The generic entity context, for procedures without a typed wrapper.
    ///
    /// ```no_run
    /// # use gsales::Client;
    /// # async fn example(client: Client) -> gsales::Result<()> {
    /// let mut params = gsales_transport::Params::new();
    /// params.insert("invoiceid".into(), 5.into());
    /// let raw = client.api().invoke_raw("getInvoice", params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn api(&self) -> &Api {
        &self.inner.api
    }
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    config: ClientConfig,
}

impl ClientBuilder {
    /// Set the transport remote calls are dispatched through.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Log every remote call with its latency.
    pub fn trace_calls(mut self, enabled: bool) -> Self {
        self.config.trace_calls = enabled;
        self
    }

    /// Log request and response payloads at `trace` level.
    pub fn log_payloads(mut self, enabled: bool) -> Self {
        self.config.log_payloads = enabled;
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if no transport was set.
    pub fn build(self) -> Result<Client> {
        let transport = self
            .transport
            .ok_or_else(|| Error::MissingConfig("transport".to_string()))?;
        Ok(Client::from_transport(transport, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use gsales_transport::MockTransport;
    use serde_json::json;

    #[test]
    fn test_builder_requires_transport() {
        let result = Client::builder().trace_calls(true).build();
        assert_matches!(result, Err(Error::MissingConfig(what)) if what == "transport");
    }

    #[test]
    fn test_trace_calls_wraps_transport() {
        let client = Client::builder()
            .transport(Arc::new(MockTransport::new()))
            .trace_calls(true)
            .build()
            .unwrap();

        // the decorator reports the wrapped transport's name
        assert_eq!(client.api().transport().name(), "mock");
        assert!(format!("{client:?}").contains("mock"));
    }

    #[test]
    fn test_resource_lazy_initialization() {
        let client = Client::new(Arc::new(MockTransport::new()));

        assert!(std::ptr::eq(client.articles(), client.articles()));
        assert!(std::ptr::eq(client.newsletters(), client.newsletters()));
        assert!(std::ptr::eq(client.customers(), client.customers()));
    }

    #[test]
    fn test_clones_share_resources() {
        let client1 = Client::new(Arc::new(MockTransport::new()));
        let client2 = client1.clone();

        assert!(std::ptr::eq(client1.articles(), client2.articles()));
    }

    #[tokio::test]
    async fn test_traced_client_dispatches_through_inner_transport() {
        let mock = Arc::new(MockTransport::new());
        mock.respond("getArticle", json!({"id": 1, "title": "Pen"}));

        let client = Client::builder()
            .transport(mock.clone())
            .config(ClientConfig {
                trace_calls: true,
                log_payloads: true,
            })
            .build()
            .unwrap();

        let article = client.articles().get(1).await.unwrap();
        assert_eq!(article.data.title, "Pen");
        assert_eq!(mock.calls().len(), 1);
    }
}
