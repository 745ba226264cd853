// src/infrastructure/security/claims.rs
use crate::application::{
    dto::{AuthenticatedOwner, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::owner::{OwnerId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered claims plus the owner's email and role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: &TokenSubject, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.owner_id.as_uuid(),
            email: subject.email.clone(),
            role: subject.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn into_authenticated(self) -> ApplicationResult<AuthenticatedOwner> {
        let id = OwnerId::new(self.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;
        let role = self
            .role
            .parse::<Role>()
            .map_err(|_| ApplicationError::unauthorized("invalid token role"))?;
        let issued_at = DateTime::<Utc>::from_timestamp(self.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid issued-at"))?;
        let expires_at = DateTime::<Utc>::from_timestamp(self.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid expiry"))?;

        Ok(AuthenticatedOwner {
            id,
            email: self.email,
            role,
            issued_at,
            expires_at,
        })
    }
}
