//! Credential fallback policy for outbound calls.
//!
//! A caller that sends no bearer token has its call made with the default
//! token (service token when configured, else the anonymous key). Anyone
//! holding only the admin secret therefore acts with the default token's
//! remote privileges. `allow_default_credential = false` turns the fallback
//! off; such calls then fail with [`RelayError::MissingCredential`].
//!
//! [`CredentialPolicy::resolve`] has exactly one call site, `Relay::call`.

use secrecy::SecretString;

use notebook_bridge_types::config::BridgeConfig;
use notebook_bridge_types::error::RelayError;

/// Where the bearer for an outbound call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Caller,
    Default,
}

impl CredentialSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialSource::Caller => "caller",
            CredentialSource::Default => "default",
        }
    }
}

pub struct CredentialPolicy {
    default_token: SecretString,
    allow_fallback: bool,
}

impl CredentialPolicy {
    pub fn new(default_token: SecretString, allow_fallback: bool) -> Self {
        Self {
            default_token,
            allow_fallback,
        }
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(
            config.default_token().clone(),
            config.allow_default_credential,
        )
    }

    /// Pick the bearer for a call. `caller` is expected to already exclude
    /// blank tokens (see `RpcCall::credential`).
    pub fn resolve<'a>(
        &'a self,
        caller: Option<&'a SecretString>,
    ) -> Result<(&'a SecretString, CredentialSource), RelayError> {
        match caller {
            Some(token) => Ok((token, CredentialSource::Caller)),
            None if self.allow_fallback => Ok((&self.default_token, CredentialSource::Default)),
            None => Err(RelayError::MissingCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn caller_token_wins() {
        let policy = CredentialPolicy::new(SecretString::from("service"), true);
        let caller = SecretString::from("user-jwt");
        let (token, source) = policy.resolve(Some(&caller)).unwrap();
        assert_eq!(token.expose_secret(), "user-jwt");
        assert_eq!(source, CredentialSource::Caller);
    }

    #[test]
    fn falls_back_to_default_token() {
        let policy = CredentialPolicy::new(SecretString::from("service"), true);
        let (token, source) = policy.resolve(None).unwrap();
        assert_eq!(token.expose_secret(), "service");
        assert_eq!(source, CredentialSource::Default);
    }

    #[test]
    fn disabled_fallback_requires_caller_token() {
        let policy = CredentialPolicy::new(SecretString::from("service"), false);
        assert!(matches!(policy.resolve(None), Err(RelayError::MissingCredential)));

        let caller = SecretString::from("user-jwt");
        assert!(policy.resolve(Some(&caller)).is_ok());
    }
}
