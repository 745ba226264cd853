use crate::domain::owner::{OwnerId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::owners::OwnerDto;

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
    pub user: OwnerDto,
}

impl LoginResponseDto {
    pub fn from_parts(token: IssuedToken, user: OwnerDto) -> Self {
        Self {
            token: token.token,
            expires_at: token.expires_at,
            expires_in: token.expires_in,
            user,
        }
    }
}

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedOwner {
    pub id: OwnerId,
    pub email: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub owner_id: OwnerId,
    pub email: String,
    pub role: Role,
}
