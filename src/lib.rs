//! plaid-rs: async client for the Plaid API.
//!
//! Every operation is a single authenticated `POST` with a JSON body. Successful
//! responses are returned as an untyped JSON object ([`Response`]); non-2xx
//! responses become [`PlaidError::Request`].
//!
//! ```no_run
//! # use plaid_rs::{Plaid, Environment};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plaid = Plaid::builder("client-id", "secret", "public-key")
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let accounts = plaid.client().get_accounts("access-sandbox-token").await?;
//! println!("{}", accounts["accounts"]);
//! # Ok(())
//! # }
//! ```

pub mod core;

/// Account-level reads: accounts, balances, auth, identity, income, liabilities.
pub mod accounts;
/// Asset report lifecycle and audit copies.
pub mod assets;
/// Institution lookup and search.
pub mod institutions;
/// Investment holdings and investment transactions.
pub mod investments;
/// Item management and token exchange.
pub mod item;
/// Transactions and categories.
pub mod transactions;

pub use crate::core::{
    ApiDate, ApiErrorBody, ApiVersion, CredentialKind, Credentials, Endpoint, Environment,
    HttpRequest, HttpResponse, Options, Plaid, PlaidBuilder, PlaidClient, PlaidError, Product,
    ReqwestTransport, RequestBuilder, Response, Transport, TransportFuture,
};

/// Installs a `fmt` subscriber on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Calling it again after a subscriber is installed does nothing.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();
}
