//! Centralized constants for hosts, API versions and headers.

/// User agent sent by the default transport.
pub(crate) const USER_AGENT: &str = concat!("plaid-rs/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API version on every request (`Plaid-Version`).
pub(crate) const VERSION_HEADER: &str = "plaid-version";

/// Production host. Operation paths are appended verbatim.
pub(crate) const HOST_PRODUCTION: &str = "https://production.plaid.com/";

/// Development host.
pub(crate) const HOST_DEVELOPMENT: &str = "https://development.plaid.com/";

/// Sandbox host.
pub(crate) const HOST_SANDBOX: &str = "https://sandbox.plaid.com/";

/// Accepted values of the version header, oldest first.
pub(crate) const API_VERSIONS: [&str; 3] = ["2017-03-08", "2018-05-22", "2019-05-29"];

/// Environment variables read by `PlaidBuilder::from_env`.
pub(crate) const ENV_CLIENT_ID: &str = "PLAID_CLIENT_ID";
pub(crate) const ENV_SECRET: &str = "PLAID_SECRET";
pub(crate) const ENV_PUBLIC_KEY: &str = "PLAID_PUBLIC_KEY";
pub(crate) const ENV_ENVIRONMENT: &str = "PLAID_ENV";
pub(crate) const ENV_VERSION: &str = "PLAID_VERSION";
