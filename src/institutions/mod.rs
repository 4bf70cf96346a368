use serde_json::Value;

use crate::core::params::Params;
use crate::core::{Endpoint, Options, PlaidClient, PlaidError, Product, Response};

impl PlaidClient {
    /// Looks up one institution by id. Signed with the public key.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, options), err))]
    pub async fn get_institution(
        &self,
        institution_id: &str,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("institution_id", institution_id)
            .options(options);
        self.call(Endpoint::GetInstitution, params.into_map()).await
    }

    /// Pages through supported institutions.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, options), err))]
    pub async fn get_institutions(
        &self,
        count: u32,
        offset: u32,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("count", count)
            .set("offset", offset)
            .options(options);
        self.call(Endpoint::GetInstitutions, params.into_map()).await
    }

    /// Searches institutions by name, restricted to those supporting `products`.
    /// Signed with the public key.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, options), err))]
    pub async fn find_institution(
        &self,
        query: &str,
        products: &[Product],
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let products: Vec<Value> = products.iter().map(|p| Value::from(p.as_str())).collect();
        let params = Params::new()
            .set("query", query)
            .set("products", products)
            .options(options);
        self.call(Endpoint::FindInstitution, params.into_map()).await
    }
}
