use crate::core::params::Params;
use crate::core::{ApiDate, Endpoint, Options, PlaidClient, PlaidError, Response};

impl PlaidClient {
    /// Fetches transactions posted between `start_date` and `end_date`, inclusive.
    ///
    /// Dates are sent as `YYYY-MM-DD` in their own calendar; time of day is ignored.
    /// Use `options` (`count`, `offset`, `account_ids`) to page.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_transactions(
        &self,
        access_token: &str,
        start_date: impl ApiDate,
        end_date: impl ApiDate,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .set("start_date", start_date.to_api_date())
            .set("end_date", end_date.to_api_date())
            .options(options);
        self.call(Endpoint::GetTransactions, params.into_map()).await
    }

    /// Fetches the full transaction category hierarchy.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_categories(&self) -> Result<Response, PlaidError> {
        self.call(Endpoint::GetCategories, Params::new().into_map()).await
    }
}
