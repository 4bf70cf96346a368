use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Free-form filtering/pagination options, sent as the `options` object.
///
/// Operations that accept options always send the key; `None` becomes `{}`.
pub type Options = Map<String, Value>;

/// Plaid products, as used by institution search.
///
/// Products Plaid adds later can still be sent through [`Product::Other`];
/// parsing never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Product {
    /// Asset reports.
    Assets,
    /// Account and routing numbers.
    Auth,
    /// Real-time balances.
    Balance,
    /// Account holder identity.
    Identity,
    /// Income verification.
    Income,
    /// Investment holdings and transactions.
    Investments,
    /// Credit, student loan and mortgage liabilities.
    Liabilities,
    /// UK/EU payment initiation.
    PaymentInitiation,
    /// Transaction history.
    Transactions,
    /// Any product name not listed above, sent verbatim.
    Other(String),
}

impl Product {
    /// Wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Assets => "assets",
            Self::Auth => "auth",
            Self::Balance => "balance",
            Self::Identity => "identity",
            Self::Income => "income",
            Self::Investments => "investments",
            Self::Liabilities => "liabilities",
            Self::PaymentInitiation => "payment_initiation",
            Self::Transactions => "transactions",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Product {
    fn from(s: &str) -> Self {
        match s {
            "assets" => Self::Assets,
            "auth" => Self::Auth,
            "balance" => Self::Balance,
            "identity" => Self::Identity,
            "income" => Self::Income,
            "investments" => Self::Investments,
            "liabilities" => Self::Liabilities,
            "payment_initiation" => Self::PaymentInitiation,
            "transactions" => Self::Transactions,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl FromStr for Product {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from(name.as_str()))
    }
}

/// Ordered parameter object for one operation, before credentials are merged.
#[derive(Debug, Default, Clone)]
pub(crate) struct Params(Map<String, Value>);

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Adds the `options` object, empty when none was given.
    pub(crate) fn options(self, options: Option<Options>) -> Self {
        self.set("options", Value::Object(options.unwrap_or_default()))
    }

    pub(crate) fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
