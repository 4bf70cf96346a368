//! Public client surface + builder.
//! Internals are split into `config` (environment/version), `credentials`
//! and `constants` (hosts, versions, header names).

mod config;
pub(crate) mod constants;
mod credentials;

pub use config::{ApiVersion, Environment};
pub use credentials::{CredentialKind, Credentials};

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::core::{Endpoint, PlaidError, ReqwestTransport, RequestBuilder, Response, Transport};
use constants::{ENV_CLIENT_ID, ENV_ENVIRONMENT, ENV_PUBLIC_KEY, ENV_SECRET, ENV_VERSION};

/// Entry point: validated environment and version wired to a [`PlaidClient`].
///
/// Nothing in a `Plaid` changes after construction.
#[derive(Debug, Clone)]
pub struct Plaid {
    environment: Environment,
    version: ApiVersion,
    client: PlaidClient,
}

impl Plaid {
    /// Crate version.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Create a new builder.
    pub fn builder(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        public_key: impl Into<String>,
    ) -> PlaidBuilder {
        PlaidBuilder::new(Credentials::new(client_id, secret, public_key))
    }

    /// One-shot constructor with the default transport.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError::Configuration` for an unknown environment or version.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        public_key: impl Into<String>,
        environment: &str,
        version: &str,
    ) -> Result<Self, PlaidError> {
        Self::builder(client_id, secret, public_key)
            .environment(environment)
            .version(version)
            .build()
    }

    /// Base URL for an environment name, or `None` if the name is unknown.
    #[must_use]
    pub fn host(environment: &str) -> Option<&'static str> {
        environment.parse::<Environment>().ok().map(Environment::host)
    }

    /// The configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The configured API version.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// The endpoint client used for every API call.
    #[must_use]
    pub const fn client(&self) -> &PlaidClient {
        &self.client
    }
}

/// One method per Plaid operation.
///
/// Cheap to clone and safe to share across tasks; the transport decides
/// whether concurrent sends are allowed.
#[derive(Debug, Clone)]
pub struct PlaidClient {
    credentials: Arc<Credentials>,
    requests: RequestBuilder,
}

impl PlaidClient {
    /// Wires credentials to a request pipeline.
    #[must_use]
    pub fn new(credentials: Credentials, requests: RequestBuilder) -> Self {
        Self {
            credentials: Arc::new(credentials),
            requests,
        }
    }

    /// The credentials requests are signed with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The underlying request pipeline.
    #[must_use]
    pub const fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    /// Merges `params` with the endpoint's credentials and posts them to its path.
    ///
    /// Every typed operation on this client goes through here.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request cannot be encoded or sent, the API
    /// answers with a non-2xx status, or the body is not a JSON object.
    pub async fn call(
        &self,
        endpoint: Endpoint,
        params: Map<String, Value>,
    ) -> Result<Response, PlaidError> {
        let body = self.credentials.apply(endpoint.credentials(), params);
        let request = self
            .requests
            .build_request(Method::POST, endpoint.path(), &body)?;
        self.requests.do_request(&request).await
    }

    /// Like [`call`](Self::call), then deserializes the body into `T`.
    ///
    /// Opt-in: a body that does not match `T` fails with `PlaidError::Decode`
    /// even though the API reported success.
    ///
    /// # Errors
    ///
    /// As [`call`](Self::call), plus `PlaidError::Decode` on a shape mismatch.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: Map<String, Value>,
    ) -> Result<T, PlaidError> {
        let url = format!("{}{}", self.requests.host(), endpoint.path());
        let body = self.call(endpoint, params).await?;
        serde_json::from_value(Value::Object(body)).map_err(|source| PlaidError::Decode { url, source })
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and validates a [`Plaid`] facade.
#[derive(Debug)]
pub struct PlaidBuilder {
    credentials: Credentials,
    environment: Option<String>,
    version: Option<String>,
    host: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PlaidBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: None,
            version: None,
            host: None,
            transport: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Builder seeded from `PLAID_CLIENT_ID`, `PLAID_SECRET`, `PLAID_PUBLIC_KEY`
    /// and, when set, `PLAID_ENV` and `PLAID_VERSION`.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError::Configuration` if a required variable is missing.
    pub fn from_env() -> Result<Self, PlaidError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlaidError> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| PlaidError::Configuration(format!("{key} is not set")))
        };

        let mut builder = Self::new(Credentials::new(
            required(ENV_CLIENT_ID)?,
            required(ENV_SECRET)?,
            required(ENV_PUBLIC_KEY)?,
        ));
        builder.environment = lookup(ENV_ENVIRONMENT);
        builder.version = lookup(ENV_VERSION);
        Ok(builder)
    }

    /// Environment by name (`production`, `development`, `sandbox`) or [`Environment`].
    /// Validated in [`build`](Self::build). Default: production.
    #[must_use]
    pub fn environment(mut self, environment: impl ToString) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    /// API version string or [`ApiVersion`]. Validated in [`build`](Self::build).
    /// Default: `2019-05-29`.
    #[must_use]
    pub fn version(mut self, version: impl ToString) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// (For testing) Send requests to `host` instead of the environment's host.
    /// Accepts a string or a [`Url`]; parsed in [`build`](Self::build).
    /// Paths are appended verbatim, so `host` should end with `/`.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Use `transport` for every request instead of the default reqwest client.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the User-Agent of the default transport.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set an overall request timeout on the default transport. Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout on the default transport. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Validates the configuration and builds the facade.
    ///
    /// Environment and version are checked before any transport is created.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError::Configuration` for an unknown environment or version,
    /// `PlaidError::Url` if the host override is not a valid URL,
    /// or `PlaidError::Http` if the default transport cannot be built.
    pub fn build(self) -> Result<Plaid, PlaidError> {
        let environment: Environment = match self.environment.as_deref() {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };
        let version: ApiVersion = match self.version.as_deref() {
            Some(raw) => raw.parse()?,
            None => ApiVersion::default(),
        };

        let host = match self.host.as_deref() {
            Some(raw) => String::from(Url::parse(raw)?),
            None => environment.host().to_owned(),
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(
                self.user_agent.as_deref(),
                self.timeout,
                self.connect_timeout,
            )?),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(%environment, %version, %host, "plaid client configured");

        Ok(Plaid {
            environment,
            version,
            client: PlaidClient::new(
                self.credentials,
                RequestBuilder::new(host, version, transport),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_lookup_is_pure() {
        assert_eq!(Plaid::host("sandbox"), Some("https://sandbox.plaid.com/"));
        assert_eq!(Plaid::host("production"), Some("https://production.plaid.com/"));
        assert_eq!(Plaid::host("development"), Some("https://development.plaid.com/"));
        assert_eq!(Plaid::host("staging"), None);
    }

    #[test]
    fn defaults_are_production_and_latest_version() {
        let plaid = Plaid::builder("id", "secret", "pk").build().unwrap();
        assert_eq!(plaid.environment(), Environment::Production);
        assert_eq!(plaid.version(), ApiVersion::V2019_05_29);
        assert_eq!(plaid.client().requests().host(), "https://production.plaid.com/");
    }

    #[test]
    fn unknown_environment_fails_before_transport() {
        let err = Plaid::new("id", "secret", "pk", "staging", "2019-05-29").unwrap_err();
        match err {
            PlaidError::Configuration(msg) => assert_eq!(msg, "Unknown environment {staging}"),
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_version_fails() {
        let err = Plaid::new("id", "secret", "pk", "sandbox", "2020-01-01").unwrap_err();
        assert!(matches!(err, PlaidError::Configuration(m) if m == "Unknown version {2020-01-01}"));
    }

    #[test]
    fn typed_setters_are_accepted() {
        let plaid = Plaid::builder("id", "secret", "pk")
            .environment(Environment::Development)
            .version(ApiVersion::V2017_03_08)
            .build()
            .unwrap();
        assert_eq!(plaid.environment(), Environment::Development);
        assert_eq!(plaid.client().requests().version().as_str(), "2017-03-08");
        assert_eq!(plaid.client().credentials().client_id(), "id");
    }

    #[test]
    fn host_override_replaces_environment_host() {
        let plaid = Plaid::builder("id", "secret", "pk")
            .environment("sandbox")
            .host("http://127.0.0.1:4010/")
            .build()
            .unwrap();
        assert_eq!(plaid.environment(), Environment::Sandbox);
        assert_eq!(plaid.client().requests().host(), "http://127.0.0.1:4010/");
    }

    #[test]
    fn host_override_accepts_a_parsed_url() {
        let plaid = Plaid::builder("id", "secret", "pk")
            .host(Url::parse("http://127.0.0.1:4010").unwrap())
            .build()
            .unwrap();
        assert_eq!(plaid.client().requests().host(), "http://127.0.0.1:4010/");
    }

    #[test]
    fn unparseable_host_is_a_url_error() {
        let err = Plaid::builder("id", "secret", "pk")
            .host("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, PlaidError::Url(_)), "got {err:?}");
    }

    #[test]
    fn environment_is_checked_before_host() {
        let err = Plaid::builder("id", "secret", "pk")
            .environment("staging")
            .host("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, PlaidError::Configuration(_)), "got {err:?}");
    }

    fn lookup_from(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn env_lookup_seeds_credentials_environment_and_version() {
        let plaid = PlaidBuilder::from_lookup(lookup_from(&[
            ("PLAID_CLIENT_ID", "cid"),
            ("PLAID_SECRET", "shh"),
            ("PLAID_PUBLIC_KEY", "pk"),
            ("PLAID_ENV", "sandbox"),
            ("PLAID_VERSION", "2018-05-22"),
        ]))
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(plaid.environment(), Environment::Sandbox);
        assert_eq!(plaid.version(), ApiVersion::V2018_05_22);
        assert_eq!(plaid.client().credentials().public_key(), "pk");
    }

    #[test]
    fn env_lookup_requires_credentials() {
        let err = PlaidBuilder::from_lookup(lookup_from(&[("PLAID_CLIENT_ID", "cid")])).unwrap_err();
        assert!(matches!(err, PlaidError::Configuration(m) if m == "PLAID_SECRET is not set"));
    }

    #[test]
    fn env_lookup_still_validates_environment() {
        let builder = PlaidBuilder::from_lookup(lookup_from(&[
            ("PLAID_CLIENT_ID", "cid"),
            ("PLAID_SECRET", "shh"),
            ("PLAID_PUBLIC_KEY", "pk"),
            ("PLAID_ENV", "staging"),
        ]))
        .unwrap();
        assert!(matches!(builder.build(), Err(PlaidError::Configuration(_))));
    }
}
