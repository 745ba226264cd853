// src/domain/owner/entity.rs
use crate::domain::owner::value_objects::{Email, OwnerId, OwnerName, PasswordHash, Role};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Owner {
    pub id: OwnerId,
    pub name: OwnerName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owner {
    pub fn set_password(&mut self, password_hash: PasswordHash, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub name: OwnerName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
