//! Every remote operation, its path, and the credentials it is signed with.

use std::fmt;

use crate::core::CredentialKind;

/// A Plaid API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `auth/get`: account and routing numbers.
    GetAuth,
    /// `categories/get`: the transaction category taxonomy.
    GetCategories,
    /// `liabilities/get`: credit, student loan and mortgage details.
    GetLiabilities,
    /// `item/get`: status of an item.
    GetItem,
    /// `item/remove`: deletes an item and invalidates its access token.
    RemoveItem,
    /// `item/public_token/create`: public token for Link update mode.
    CreatePublicToken,
    /// `item/public_token/exchange`: trades a public token for an access token.
    ExchangeToken,
    /// `item/access_token/invalidate`: issues a new access token.
    RotateAccessToken,
    /// `processor/stripe/bank_account_token/create`: Stripe bank account token.
    CreateStripeToken,
    /// `item/webhook/update`: changes the webhook URL of an item.
    UpdateWebhook,
    /// `accounts/get`: accounts of an item.
    GetAccounts,
    /// `institution/get_by_id`: one institution. Public key.
    GetInstitution,
    /// `institutions/get`: a page of institutions.
    GetInstitutions,
    /// `institutions/search`: institutions by name and product. Public key.
    FindInstitution,
    /// `transactions/get`: transactions in a date range.
    GetTransactions,
    /// `accounts/balance/get`: real-time balances.
    GetBalance,
    /// `identity/get`: account holder identity.
    GetIdentity,
    /// `income/get`: income verification.
    GetIncome,
    /// `asset_report/create`: starts building an asset report.
    CreateAssetReport,
    /// `asset_report/refresh`: rebuilds an asset report with fresh data.
    RefreshAssetReport,
    /// `asset_report/filter`: copy of a report without some accounts.
    FilterAssetReport,
    /// `asset_report/get`: a finished asset report.
    GetAssetReport,
    /// `asset_report/remove`: deletes an asset report.
    RemoveAssetReport,
    /// `asset_report/audit_copy/create`: audit copy for a third party.
    CreateAssetReportAuditCopy,
    /// `asset_report/audit_copy/remove`: revokes an audit copy.
    RemoveAssetReportAuditCopy,
    /// `investments/holdings/get`: current holdings and securities.
    GetInvestmentHoldings,
    /// `investments/transactions/get`: investment transactions in a date range.
    GetInvestmentTransactions,
}

/// `(endpoint, path, credentials)` for every operation.
const TABLE: [(Endpoint, &str, CredentialKind); 27] = {
    use CredentialKind::{Private, Public};
    use Endpoint as E;
    [
        (E::GetAuth, "auth/get", Private),
        (E::GetCategories, "categories/get", Private),
        (E::GetLiabilities, "liabilities/get", Private),
        (E::GetItem, "item/get", Private),
        (E::RemoveItem, "item/remove", Private),
        (E::CreatePublicToken, "item/public_token/create", Private),
        (E::ExchangeToken, "item/public_token/exchange", Private),
        (E::RotateAccessToken, "item/access_token/invalidate", Private),
        (E::CreateStripeToken, "processor/stripe/bank_account_token/create", Private),
        (E::UpdateWebhook, "item/webhook/update", Private),
        (E::GetAccounts, "accounts/get", Private),
        (E::GetInstitution, "institution/get_by_id", Public),
        (E::GetInstitutions, "institutions/get", Private),
        (E::FindInstitution, "institutions/search", Public),
        (E::GetTransactions, "transactions/get", Private),
        (E::GetBalance, "accounts/balance/get", Private),
        (E::GetIdentity, "identity/get", Private),
        (E::GetIncome, "income/get", Private),
        (E::CreateAssetReport, "asset_report/create", Private),
        (E::RefreshAssetReport, "asset_report/refresh", Private),
        (E::FilterAssetReport, "asset_report/filter", Private),
        (E::GetAssetReport, "asset_report/get", Private),
        (E::RemoveAssetReport, "asset_report/remove", Private),
        (E::CreateAssetReportAuditCopy, "asset_report/audit_copy/create", Private),
        (E::RemoveAssetReportAuditCopy, "asset_report/audit_copy/remove", Private),
        (E::GetInvestmentHoldings, "investments/holdings/get", Private),
        (E::GetInvestmentTransactions, "investments/transactions/get", Private),
    ]
};

impl Endpoint {
    /// Every operation, in table order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::GetAuth; 27];
        let mut i = 0;
        while i < TABLE.len() {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    const fn row(self) -> (Self, &'static str, CredentialKind) {
        // Rows are declared in variant order.
        TABLE[self as usize]
    }

    /// Path relative to the environment host, without a leading slash.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.row().1
    }

    /// The credential set this operation is signed with.
    #[must_use]
    pub const fn credentials(self) -> CredentialKind {
        self.row().2
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
