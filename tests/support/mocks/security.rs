// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use newsroom_core::application::{
    ApplicationResult,
    dto::{AuthenticatedOwner, IssuedToken, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use newsroom_core::domain::owner::{OwnerId, Role};
use uuid::Uuid;

use super::time::fixed_now;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_OWNER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);

/// Stores passwords with a visible prefix so tests can assert on hashes.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Accepts only [`TEST_TOKEN`], which authenticates as [`TEST_OWNER_ID`].
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<IssuedToken> {
        let issued_at = fixed_now();
        Ok(IssuedToken {
            token: TEST_TOKEN.into(),
            issued_at,
            expires_at: issued_at + Duration::hours(72),
            expires_in: 72 * 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedOwner> {
        if token != TEST_TOKEN {
            return Err(ApplicationError::unauthorized("invalid or expired token"));
        }
        let issued_at = fixed_now();
        Ok(AuthenticatedOwner {
            id: OwnerId::new(TEST_OWNER_ID).unwrap(),
            email: "editor@example.com".into(),
            role: Role::Editor,
            issued_at,
            expires_at: issued_at + Duration::hours(72),
        })
    }
}
