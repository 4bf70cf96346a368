use crate::core::params::Params;
use crate::core::{ApiDate, Endpoint, Options, PlaidClient, PlaidError, Response};

impl PlaidClient {
    /// Fetches holdings and securities for the item's investment accounts.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_investment_holdings(
        &self,
        access_token: &str,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .options(options);
        self.call(Endpoint::GetInvestmentHoldings, params.into_map())
            .await
    }

    /// Fetches investment transactions between two dates, sent as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn get_investment_transactions(
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
        self.call(Endpoint::GetInvestmentTransactions, params.into_map())
            .await
    }
}
