//! Core components of the `plaid-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`Plaid`] facade, its builder, and the [`PlaidClient`] endpoint client.
//! - The primary [`PlaidError`] type.
//! - The request pipeline ([`RequestBuilder`]) and the pluggable [`Transport`].
//! - The declarative [`Endpoint`] table.

/// The facade (`Plaid`), builder, endpoint client, and configuration.
pub mod client;
/// Date rendering for request parameters.
pub mod conversions;
/// The declarative operation table.
pub mod endpoints;
/// The primary error type (`PlaidError`) for the crate.
pub mod error;
/// Parameter assembly shared by every operation.
pub mod params;
/// Request construction and response classification.
pub mod request;
/// HTTP transport abstraction and the default `reqwest` implementation.
pub mod transport;

// convenient re-exports so most code can just `use crate::core::PlaidClient`
pub use client::{
    ApiVersion, CredentialKind, Credentials, Environment, Plaid, PlaidBuilder, PlaidClient,
};
pub use conversions::ApiDate;
pub use endpoints::Endpoint;
pub use error::{ApiErrorBody, PlaidError};
pub use params::{Options, Product};
pub use request::{RequestBuilder, Response};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFuture};
