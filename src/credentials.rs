use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::Config;
use crate::models::{Account, TokenClaim};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to sign credential: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("invalid credential: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and checks the short-lived tokens that bind a caller to an account number.
#[derive(Clone)]
pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl CredentialService {
    pub fn new(config: &Config) -> Self {
        Self::with_ttl(&config.jwt_secret, config.jwt_ttl)
    }

    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a credential for `account`, valid for the configured TTL.
    pub fn issue(&self, account: &Account) -> Result<String, CredentialError> {
        let claims = TokenClaim {
            account_number: account.account_number,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(CredentialError::Signing)
    }

    /// Verifies signature, algorithm family and expiry, and returns the claims.
    pub fn validate(&self, token: &str) -> Result<TokenClaim, CredentialError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        decode::<TokenClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(CredentialError::Invalid)
    }
}
