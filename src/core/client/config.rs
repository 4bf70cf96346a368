//! Deployment environment and API version.

use std::fmt;
use std::str::FromStr;

use super::constants::{API_VERSIONS, HOST_DEVELOPMENT, HOST_PRODUCTION, HOST_SANDBOX};
use crate::core::PlaidError;

/// Deployment tier of the Plaid API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Live data, billed.
    #[default]
    Production,
    /// Live data with a limited number of items.
    Development,
    /// Test credentials and synthetic institutions.
    Sandbox,
}

impl Environment {
    /// All supported environments.
    pub const ALL: [Self; 3] = [Self::Production, Self::Development, Self::Sandbox];

    /// The name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Sandbox => "sandbox",
        }
    }

    /// Base URL, including the trailing slash.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::Production => HOST_PRODUCTION,
            Self::Development => HOST_DEVELOPMENT,
            Self::Sandbox => HOST_SANDBOX,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = PlaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| PlaidError::Configuration(format!("Unknown environment {{{s}}}")))
    }
}

/// Value of the `Plaid-Version` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// `2017-03-08`
    V2017_03_08,
    /// `2018-05-22`
    V2018_05_22,
    /// `2019-05-29`
    #[default]
    V2019_05_29,
}

impl ApiVersion {
    /// All supported versions, oldest first.
    pub const ALL: [Self; 3] = [Self::V2017_03_08, Self::V2018_05_22, Self::V2019_05_29];

    /// The header value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2017_03_08 => API_VERSIONS[0],
            Self::V2018_05_22 => API_VERSIONS[1],
            Self::V2019_05_29 => API_VERSIONS[2],
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = PlaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PlaidError::Configuration(format!("Unknown version {{{s}}}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_hosts_are_fixed() {
        assert_eq!(Environment::Production.host(), "https://production.plaid.com/");
        assert_eq!(Environment::Development.host(), "https://development.plaid.com/");
        assert_eq!(Environment::Sandbox.host(), "https://sandbox.plaid.com/");
    }

    #[test]
    fn environment_round_trips_through_its_name() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn unknown_environment_is_a_configuration_error() {
        for bad in ["staging", "Production", "", " sandbox"] {
            match bad.parse::<Environment>() {
                Err(PlaidError::Configuration(msg)) => {
                    assert_eq!(msg, format!("Unknown environment {{{bad}}}"));
                }
                other => panic!("expected Configuration error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn versions_parse_from_the_allow_list() {
        for raw in API_VERSIONS {
            assert_eq!(raw.parse::<ApiVersion>().unwrap().as_str(), raw);
        }
        assert!(matches!(
            "2020-09-14".parse::<ApiVersion>(),
            Err(PlaidError::Configuration(_))
        ));
    }

    #[test]
    fn defaults_match_the_hosted_api() {
        assert_eq!(Environment::default(), Environment::Production);
        assert_eq!(ApiVersion::default().as_str(), "2019-05-29");
    }
}
