use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::core::PlaidError;
use crate::core::client::constants::USER_AGENT;

/// A fully built request, ready to hand to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method. Every Plaid operation uses `POST`.
    pub method: Method,
    /// Absolute URL: environment host followed by the operation path.
    pub url: String,
    /// Version and content-type headers.
    pub headers: HeaderMap,
    /// JSON-encoded parameters.
    pub body: Vec<u8>,
}

/// What a [`Transport`] hands back: the status line and the raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// The future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, PlaidError>> + Send + 'a>>;

/// Sends a single request and returns the response, whatever its status.
///
/// Implementations must not classify statuses; that is done by
/// [`RequestBuilder::do_request`](crate::RequestBuilder::do_request).
/// Timeouts and cancellation are the transport's business.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Sends `request` and resolves to the raw response.
    fn send<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a>;
}

/// The default [`Transport`], backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing `reqwest::Client` (custom proxies, TLS roots, ...).
    #[must_use]
    pub const fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Builds a client with the crate's user agent and optional timeouts.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError::Http` if the underlying client cannot be built.
    pub fn new(
        user_agent: Option<&str>,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, PlaidError> {
        let mut httpb = reqwest::Client::builder().user_agent(user_agent.unwrap_or(USER_AGENT));

        if let Some(t) = timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(Self {
            http: httpb.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    fn send<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            let resp = self
                .http
                .request(request.method.clone(), &request.url)
                .headers(request.headers.clone())
                .body(request.body.clone())
                .send()
                .await?;

            let status = resp.status().as_u16();
            let body = resp.bytes().await?.to_vec();

            Ok::<_, PlaidError>(HttpResponse { status, body })
        })
    }
}
