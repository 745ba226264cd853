// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthenticatedOwner, IssuedToken, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::infrastructure::security::claims::Claims;
use async_trait::async_trait;
use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;

pub const MIN_SECRET_LEN: usize = 16;

/// HS256 bearer tokens. The algorithm is pinned on verification and expiry
/// is always enforced.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "jwt secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
            clock,
        })
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<IssuedToken> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims::new(&subject, issued_at, expires_at);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds().max(0),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedOwner> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            tracing::debug!(error = %err, "rejected bearer token");
            ApplicationError::unauthorized("invalid or expired token")
        })?;
        data.claims.into_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::owner::{OwnerId, Role};
    use crate::infrastructure::time::SystemClock;
    use uuid::Uuid;

    const SECRET: &str = "test-secret-0123456789";

    fn manager(ttl: Duration) -> JwtTokenManager {
        JwtTokenManager::new(SECRET, ttl, Arc::new(SystemClock)).unwrap()
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            owner_id: OwnerId::new(Uuid::new_v4()).unwrap(),
            email: "editor@example.com".into(),
            role: Role::Editor,
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_as_subject() {
        let manager = manager(Duration::hours(72));
        let subject = subject();
        let issued = manager.issue(subject.clone()).await.unwrap();
        assert_eq!(issued.expires_in, 72 * 3600);

        let owner = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(owner.id, subject.owner_id);
        assert_eq!(owner.email, "editor@example.com");
        assert_eq!(owner.role, Role::Editor);
    }

    #[tokio::test]
    async fn expired_tokens_are_rejected() {
        let manager = manager(Duration::seconds(-120));
        let issued = manager.issue(subject()).await.unwrap();
        let err = manager.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn tokens_signed_with_another_secret_are_rejected() {
        let other = JwtTokenManager::new(
            "another-secret-0123456789",
            Duration::hours(1),
            Arc::new(SystemClock),
        )
        .unwrap();
        let issued = other.issue(subject()).await.unwrap();
        let err = manager(Duration::hours(1))
            .authenticate(&issued.token)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn short_secrets_are_refused() {
        assert!(JwtTokenManager::new("short", Duration::hours(1), Arc::new(SystemClock)).is_err());
    }
}
