//! Request construction and response classification.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::core::client::constants::VERSION_HEADER;
use crate::core::{ApiVersion, HttpRequest, PlaidError, Transport};

/// The decoded body of a successful call. No schema is enforced.
pub type Response = Map<String, Value>;

/// Builds requests against one host and API version and sends them through a [`Transport`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    host: String,
    version: ApiVersion,
    transport: Arc<dyn Transport>,
}

impl RequestBuilder {
    /// `host` is used as a verbatim prefix for every path and should end with `/`.
    pub fn new(host: impl Into<String>, version: ApiVersion, transport: Arc<dyn Transport>) -> Self {
        Self {
            host: host.into(),
            version,
            transport,
        }
    }

    /// The host prefix.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The version sent in the `Plaid-Version` header.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Serializes `params` as the JSON body of a request to `host + path`.
    ///
    /// The path is appended without normalization.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError::Encode` if `params` cannot be serialized.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        params: &Map<String, Value>,
    ) -> Result<HttpRequest, PlaidError> {
        let body = serde_json::to_vec(params).map_err(PlaidError::Encode)?;

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            HeaderName::from_static(VERSION_HEADER),
            HeaderValue::from_static(self.version.as_str()),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.host, path),
            headers,
            body,
        })
    }

    /// Sends `request` and decodes a 2xx body as a JSON object.
    ///
    /// # Errors
    ///
    /// - `PlaidError::Request` for any status outside `200..300`, carrying the raw body.
    /// - `PlaidError::Decode` / `PlaidError::UnexpectedBody` if a 2xx body is not a JSON object.
    /// - Whatever the transport reports for network failures.
    pub async fn do_request(&self, request: &HttpRequest) -> Result<Response, PlaidError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(method = %request.method, url = %request.url, version = %self.version, "sending request");

        let resp = self.transport.send(request).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status, url = %request.url, bytes = resp.body.len(), "received response");

        if !(200..300).contains(&resp.status) {
            return Err(PlaidError::Request {
                status: resp.status,
                url: request.url.clone(),
                body: resp.body,
            });
        }

        let value: Value =
            serde_json::from_slice(&resp.body).map_err(|source| PlaidError::Decode {
                url: request.url.clone(),
                source,
            })?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(PlaidError::UnexpectedBody {
                url: request.url.clone(),
            }),
        }
    }
}
