//! Static credentials and their injection into request parameters.

use std::fmt;

use serde_json::{Map, Value};

/// Which credential set an operation is authenticated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// `client_id` + `secret`.
    Private,
    /// `public_key`.
    Public,
}

/// Client id, secret and public key, fixed at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    secret: String,
    public_key: String,
}

impl Credentials {
    /// Bundles the three static credentials.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            public_key: public_key.into(),
        }
    }

    /// The client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The public key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// `{client_id, secret}` followed by `params`. Keys in `params` win.
    #[must_use]
    pub fn private(&self, params: Map<String, Value>) -> Map<String, Value> {
        let mut merged = Map::with_capacity(params.len() + 2);
        merged.insert("client_id".into(), Value::String(self.client_id.clone()));
        merged.insert("secret".into(), Value::String(self.secret.clone()));
        merged.extend(params);
        merged
    }

    /// `{public_key}` followed by `params`. Keys in `params` win.
    #[must_use]
    pub fn public(&self, params: Map<String, Value>) -> Map<String, Value> {
        let mut merged = Map::with_capacity(params.len() + 1);
        merged.insert("public_key".into(), Value::String(self.public_key.clone()));
        merged.extend(params);
        merged
    }

    /// Merges with the credential set named by `kind`.
    #[must_use]
    pub fn apply(&self, kind: CredentialKind, params: Map<String, Value>) -> Map<String, Value> {
        match kind {
            CredentialKind::Private => self.private(params),
            CredentialKind::Public => self.public(params),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn creds() -> Credentials {
        Credentials::new("cid", "shh", "pk")
    }

    fn map(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn private_merge_puts_credentials_first() {
        let merged = creds().private(map(json!({"access_token": "t"})));
        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["client_id", "secret", "access_token"]);
        assert!(!merged.contains_key("public_key"));
    }

    #[test]
    fn public_merge_has_no_private_keys() {
        let merged = creds().public(map(json!({"institution_id": "ins_1"})));
        assert_eq!(merged["public_key"], "pk");
        assert!(!merged.contains_key("client_id"));
        assert!(!merged.contains_key("secret"));
    }

    #[test]
    fn params_override_credentials() {
        let merged = creds().apply(CredentialKind::Private, map(json!({"secret": "other"})));
        assert_eq!(merged["secret"], "other");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn debug_redacts_secret() {
        let dbg = format!("{:?}", creds());
        assert!(dbg.contains("cid"));
        assert!(!dbg.contains("shh"));
    }
}
