use serde_json::Value;

use crate::core::params::Params;
use crate::core::{Endpoint, Options, PlaidClient, PlaidError, Response};

impl PlaidClient {
    /// Starts generating an asset report covering the last `days_requested` days.
    ///
    /// The report is built asynchronously; poll [`get_asset_report`](Self::get_asset_report)
    /// with the returned `asset_report_token`.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, access_token, options), err))]
    pub async fn create_asset_report(
        &self,
        access_token: &str,
        days_requested: u32,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("access_token", access_token)
            .set("days_requested", days_requested)
            .options(options);
        self.call(Endpoint::CreateAssetReport, params.into_map()).await
    }

    /// Builds a fresh copy of an existing report with up-to-date data.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, asset_report_token, options), err))]
    pub async fn refresh_asset_report(
        &self,
        asset_report_token: &str,
        days_requested: u32,
        options: Option<Options>,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("asset_report_token", asset_report_token)
            .set("days_requested", days_requested)
            .options(options);
        self.call(Endpoint::RefreshAssetReport, params.into_map()).await
    }

    /// Creates a new report without the listed accounts.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, asset_report_token), err))]
    pub async fn filter_asset_report<S: AsRef<str> + std::fmt::Debug>(
        &self,
        asset_report_token: &str,
        account_ids_to_exclude: &[S],
    ) -> Result<Response, PlaidError> {
        let excluded: Vec<Value> = account_ids_to_exclude
            .iter()
            .map(|id| Value::from(id.as_ref()))
            .collect();
        let params = Params::new()
            .set("asset_report_token", asset_report_token)
            .set("account_ids_to_exclude", excluded);
        self.call(Endpoint::FilterAssetReport, params.into_map()).await
    }

    /// Retrieves a finished report. `include_insights` adds cleaned merchant
    /// names and categories to each transaction.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    /// A report that is still being generated comes back as a 400 `PRODUCT_NOT_READY`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, asset_report_token), err))]
    pub async fn get_asset_report(
        &self,
        asset_report_token: &str,
        include_insights: bool,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("asset_report_token", asset_report_token)
            .set("include_insights", include_insights);
        self.call(Endpoint::GetAssetReport, params.into_map()).await
    }

    /// Deletes a report and invalidates its token.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn remove_asset_report(
        &self,
        asset_report_token: &str,
    ) -> Result<Response, PlaidError> {
        let params = Params::new().set("asset_report_token", asset_report_token);
        self.call(Endpoint::RemoveAssetReport, params.into_map()).await
    }

    /// Shares a report with a third-party auditor.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, asset_report_token), err))]
    pub async fn create_asset_report_audit_copy(
        &self,
        asset_report_token: &str,
        auditor_id: &str,
    ) -> Result<Response, PlaidError> {
        let params = Params::new()
            .set("asset_report_token", asset_report_token)
            .set("auditor_id", auditor_id);
        self.call(Endpoint::CreateAssetReportAuditCopy, params.into_map())
            .await
    }

    /// Revokes an auditor's copy.
    ///
    /// # Errors
    ///
    /// Returns `PlaidError` if the request fails or the response is not a JSON object.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn remove_asset_report_audit_copy(
        &self,
        audit_copy_token: &str,
    ) -> Result<Response, PlaidError> {
        let params = Params::new().set("audit_copy_token", audit_copy_token);
        self.call(Endpoint::RemoveAssetReportAuditCopy, params.into_map())
            .await
    }
}
