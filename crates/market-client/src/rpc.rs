//! Aptos fullnode REST transport.
//!
//! Thin wrapper over `reqwest` exposing the two read-only entry points the
//! marketplace needs: account-resource snapshots and `view` function calls.
//! No retries and no failover — a failed fetch surfaces to the caller, who
//! decides whether to re-trigger it.

use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Read-only fullnode client.
pub struct NodeClient {
    http: reqwest::Client,
    base: Url,
}

impl NodeClient {
    pub fn new(node_url: &str) -> Result<Self, Error> {
        let base = Url::parse(node_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// `GET /v1/accounts/{address}/resource/{resource_type}`.
    ///
    /// Returns the resource envelope; the caller digs into `data`.
    pub async fn get_account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> Result<Value, Error> {
        let url = self
            .base
            .join(&format!("v1/accounts/{address}/resource/{resource_type}"))?;
        debug!(%url, "fetching account resource");
        let response = self.http.get(url).send().await?;
        Self::into_json(response).await
    }

    /// `POST /v1/view` — run a read-only view function.
    ///
    /// The node renders view results as a JSON array of return values.
    pub async fn view(
        &self,
        function: &str,
        type_arguments: &[String],
        arguments: &[Value],
    ) -> Result<Vec<Value>, Error> {
        let url = self.base.join("v1/view")?;
        debug!(%url, function, "view call");
        let body = json!({
            "function": function,
            "type_arguments": type_arguments,
            "arguments": arguments,
        });
        let response = self.http.post(url).json(&body).send().await?;
        let value = Self::into_json(response).await?;
        match value {
            Value::Array(values) => Ok(values),
            other => Err(Error::Chain(format!(
                "view result is not an array: {other}"
            ))),
        }
    }

    /// Decode a response, mapping non-2xx statuses to [`Error::Chain`] with
    /// the node's error message when one is present.
    async fn into_json(response: reqwest::Response) -> Result<Value, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no error message");
        Err(Error::Chain(format!("{status}: {message}")))
    }
}
