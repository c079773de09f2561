//! Token verification, delegated to an external identity provider. The
//! token is opaque to the rest of the application — all that comes back is
//! a stable user id, used as the owner id on every scoped operation.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

#[derive(Debug)]
pub enum IdentityError {
    InvalidToken,
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::InvalidToken => write!(f, "invalid token"),
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to a stable user id.
    async fn verify(&self, token: &str) -> Result<String, IdentityError>;
}

/// Development/test verifier backed by a static `token → user id` table.
/// Unknown tokens are rejected, never mapped to a default identity.
#[derive(Debug, Default)]
pub struct DevTokens {
    tokens: HashMap<String, String>,
}

impl DevTokens {
    pub fn new() -> Self {
        DevTokens::default()
    }

    /// Parse a `token=user,token=user` table, the `DEV_TOKENS` env format.
    /// Malformed entries are logged and dropped.
    pub fn from_env(raw: &str) -> Self {
        let mut tokens = HashMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.split_once('=') {
                Some((token, user)) if !token.is_empty() && !user.is_empty() => {
                    tokens.insert(token.to_string(), user.to_string());
                }
                _ => log::warn!("Ignoring malformed DEV_TOKENS entry '{entry}'"),
            }
        }
        DevTokens { tokens }
    }

    pub fn with_token(mut self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), user_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for DevTokens {
    async fn verify(&self, token: &str) -> Result<String, IdentityError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }
}
