use crate::core::params::Params;
use crate::core::{Endpoint, Options, PlaidClient, PlaidError, Response};

impl PlaidClient {
    /// Lists the item's accounts from cached data.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_accounts(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::GetAccounts, params.into_map()).await
    }

    /// Fetches real-time balances. `options` may carry `account_ids`.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_balance(
        &self,
        access_token: &str,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .options(options);
        self.call(Endpoint::GetBalance, params.into_map()).await
    }

    /// Fetches account and routing numbers. `options` may carry `account_ids`.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_auth(
        &self,
        access_token: &str,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .options(options);
        self.call(Endpoint::GetAuth, params.into_map()).await
    }

    /// Fetches account-holder identity data.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_identity(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::GetIdentity, params.into_map()).await
    }

    /// Fetches income streams derived from the item's transactions.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_income(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::GetIncome, params.into_map()).await
    }

    /// Fetches credit card, mortgage and student loan liabilities.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_liabilities(
        &self,
        access_token: &str,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .options(options);
        self.call(Endpoint::GetLiabilities, params.into_map()).await
    }
}
