use std::collections::HashMap;

use async_trait::async_trait;

use lv_types::VoterId;

use crate::error::{ServerError, ServerResult};

/// Role attached to an authenticated identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Employee,
    Restaurant,
}

/// An authenticated caller. Token issuance and signup live outside this
/// service; the voting core only needs the resolved identity and role.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: VoterId,
    pub role: Role,
}

impl Identity {
    pub fn employee(id: VoterId) -> Self {
        Self {
            id,
            role: Role::Employee,
        }
    }

    pub fn restaurant(id: VoterId) -> Self {
        Self {
            id,
            role: Role::Restaurant,
        }
    }

    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }
}

#[derive(Clone, Debug)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
}

/// Token-table provider for tests and demos.
pub struct StaticTokenAuth {
    tokens: HashMap<String, Identity>,
}

impl StaticTokenAuth {
    pub fn new() -> Self {
        Self {
            tokens: HashMap::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>, identity: Identity) -> Self {
        self.tokens.insert(token.into(), identity);
        self
    }
}

impl Default for StaticTokenAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => self
                .tokens
                .get(token)
                .cloned()
                .ok_or_else(|| ServerError::AuthFailed("unknown token".into())),
            Credentials::Anonymous => {
                Err(ServerError::AuthFailed("credentials required".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bearer_token_resolves_identity() {
        let id = VoterId::new();
        let auth = StaticTokenAuth::new().with_token("tok-1", Identity::employee(id));

        let identity = auth
            .authenticate(&Credentials::Bearer("tok-1".into()))
            .await
            .unwrap();
        assert_eq!(identity.id, id);
        assert!(identity.is_employee());
    }

    #[tokio::test]
    async fn unknown_token_fails() {
        let auth = StaticTokenAuth::new();
        let error = auth
            .authenticate(&Credentials::Bearer("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(error, ServerError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn anonymous_is_rejected() {
        let auth = StaticTokenAuth::new();
        assert!(auth.authenticate(&Credentials::Anonymous).await.is_err());
    }

    #[test]
    fn restaurant_is_not_employee() {
        assert!(!Identity::restaurant(VoterId::new()).is_employee());
    }
}
