use crate::core::params::Params;
use crate::core::{Endpoint, PlaidClient, PlaidError, Response};

impl PlaidClient {
    /// Fetches the item behind `access_token`: institution, products, webhook, error state.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_item(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::GetItem, params.into_map()).await
    }

    /// Removes the item; the access token stops working.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn remove_item(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::RemoveItem, params.into_map()).await
    }

    /// Creates a short-lived public token for the item, e.g. to open Link in update mode.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn create_public_token(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::CreatePublicToken, params.into_map()).await
    }

    /// Exchanges a public token from Link for a permanent access token.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn exchange_token(&self, public_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("public_token", public_token);
        self.call(Endpoint::ExchangeToken, params.into_map()).await
    }

    /// Invalidates `access_token` and returns a new one for the same item.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn rotate_access_token(&self, access_token: &str) -> Result<Response, PlaidError> {
        let params = Params::new().set("access_token", access_token);
        self.call(Endpoint::RotateAccessToken, params.into_map()).await
    }

    /// Creates a Stripe bank account token for one of the item's accounts.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, access_token), err))]
    pub async fn create_stripe_token(
        &self,
        access_token: &str,
        account_id: &str,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .set("account_id", account_id);
        self.call(Endpoint::CreateStripeToken, params.into_map()).await
    }

    /// Points the item's webhook at a new URL.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, access_token), err))]
    pub async fn update_webhook(
        &self,
        access_token: &str,
        webhook: &str,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .set("webhook", webhook);
        self.call(Endpoint::UpdateWebhook, params.into_map()).await
    }
}
