//! Generic entity context
//!
//! [`Api`] owns the transport and implements the four shapes of remote call
//! every resource is built from: fetch one entity, fetch a collection, count a
//! collection, and invoke an arbitrary procedure. Resource contexts only
//! choose procedure names and parameter keys.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use gsales_transport::{Params, RemoteCall, Transport};

use crate::error::{Error, Result};
use crate::types::{CollectionQuery, Filter, Identifier, filter_params};

/// Dispatches remote calls through a [`Transport`] and decodes their results.
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    log_payloads: bool,
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("transport", &self.transport.name())
            .field("log_payloads", &self.log_payloads)
            .finish()
    }
}

impl Api {
    /// Create a context over `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            log_payloads: false,
        }
    }

    /// Log request parameters and results at `trace` level.
    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Fetch one entity by identifier.
    ///
    /// Sends `{id_param: id}` to `procedure`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the transport reports the entity as absent or the
    /// service answers `null`; [`Error::Remote`] for any other failure.
    pub async fn fetch_entity<T>(
        &self,
        procedure: &str,
        id_param: &str,
        id: Identifier,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut params = Params::new();
        params.insert(id_param.to_string(), Value::from(id));

        match self.invoke_raw(procedure, params).await? {
            Value::Null => Err(Error::NotFound {
                procedure: procedure.to_string(),
                message: Some(format!("no entity with {id_param} {id}")),
            }),
            value => decode(procedure, value),
        }
    }

    /// Fetch a collection, sending only the parts of `query` that are set.
    ///
    /// A `null` result is an empty collection.
    pub async fn fetch_collection<T>(
        &self,
        procedure: &str,
        query: &CollectionQuery,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.invoke_raw(procedure, query.to_params()?).await? {
            Value::Null => Ok(Vec::new()),
            value => decode(procedure, value),
        }
    }

    /// Count the entities matching `filters`.
    ///
    /// The `filter` parameter is the one [`Api::fetch_collection`] would send
    /// for the same filters.
    pub async fn fetch_collection_count(&self, procedure: &str, filters: &[Filter]) -> Result<u64> {
        let value = self.invoke_raw(procedure, filter_params(filters)?).await?;
        decode_count(procedure, &value)
    }

    /// Invoke `procedure` and decode its result into `T`.
    pub async fn invoke<T>(&self, procedure: &str, params: Params) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = self.invoke_raw(procedure, params).await?;
        decode(procedure, value)
    }

    /// Invoke `procedure` and return its result undecoded.
    ///
    /// # Errors
    ///
    /// Transport failures are mapped by [`Error::from_transport`].
    pub async fn invoke_raw(&self, procedure: &str, params: Params) -> Result<Value> {
        let call = RemoteCall::with_params(procedure, params);
        debug!(
            transport = self.transport.name(),
            procedure,
            params = ?call.param_names(),
            "Dispatching remote call"
        );
        if self.log_payloads {
            let payload = Value::Object(call.params.clone());
            trace!(procedure, payload = %payload, "Request payload");
        }

        match self.transport.call(call).await {
            Ok(value) => {
                debug!(procedure, null = value.is_null(), "Remote call succeeded");
                if self.log_payloads {
                    trace!(procedure, payload = %value, "Response payload");
                }
                Ok(value)
            }
            Err(error) => {
                let error = Error::from_transport(procedure, error);
                if error.is_not_found() {
                    debug!(procedure, "Remote entity not found");
                } else {
                    warn!(procedure, error = %error, "Remote call failed");
                }
                Err(error)
            }
        }
    }
}

pub(crate) fn decode<T: DeserializeOwned>(procedure: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::Decode {
        procedure: procedure.to_string(),
        source,
    })
}

/// An integer-valued JSON number, including float-shaped ones such as `3.0`.
fn integral(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn decode_count(procedure: &str, value: &Value) -> Result<u64> {
    let count = match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| integral(number).and_then(|n| u64::try_from(n).ok())),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    count.ok_or_else(|| unexpected(procedure, "a count", value))
}

/// Decode a status flag: a boolean, an integer (non-zero is `true`), or one of
/// the strings `"1"`, `"0"`, `"true"` and `"false"`.
pub(crate) fn decode_flag(procedure: &str, value: &Value) -> Result<bool> {
    let flag = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => integral(number).map(|n| n != 0),
        Value::String(text) => match text.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    };
    flag.ok_or_else(|| unexpected(procedure, "a boolean status", value))
}

/// Decode an integer result: an integer, a numeric string, or a boolean as 1/0.
pub(crate) fn decode_integer(procedure: &str, value: &Value) -> Result<i64> {
    let integer = match value {
        Value::Number(number) => integral(number),
        Value::String(text) => text.trim().parse().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    };
    integer.ok_or_else(|| unexpected(procedure, "an integer", value))
}

fn unexpected(procedure: &str, expected: &str, value: &Value) -> Error {
    Error::UnexpectedResponse {
        procedure: procedure.to_string(),
        message: format!("expected {expected}, got {value}"),
    }
}
