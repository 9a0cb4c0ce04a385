//! The "obtain current bearer credential" capability.
//!
//! Token acquisition and session management belong to an external identity
//! collaborator; this crate only consumes tokens through [`TokenProvider`]
//! and never caches or refreshes them.

use async_trait::async_trait;

use crate::error::{DaybookError, DaybookResult};

/// Source of the bearer token attached to every Graph request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> DaybookResult<String>;
}

/// A fixed token handed in up front, e.g. from a CLI flag.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> DaybookResult<String> {
        if self.0.trim().is_empty() {
            return Err(DaybookError::Auth("empty bearer token".to_string()));
        }
        Ok(self.0.clone())
    }
}

/// Reads the token from an environment variable at call time, so a refreshed
/// token is picked up without restarting.
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenProvider for EnvToken {
    async fn bearer_token(&self) -> DaybookResult<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(DaybookError::Auth(format!(
                "environment variable {} is not set",
                self.var
            ))),
        }
    }
}
