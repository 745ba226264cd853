use crate::domain::errors::DomainResult;
use crate::domain::owner::{
    entity::{NewOwner, Owner},
    value_objects::{Email, OwnerId, PasswordHash},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_owner: NewOwner) -> DomainResult<Owner>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Owner>>;

    async fn find_by_id(&self, id: OwnerId) -> DomainResult<Option<Owner>>;

    /// Newest accounts first.
    async fn list(&self) -> DomainResult<Vec<Owner>>;

    async fn update_password(
        &self,
        id: OwnerId,
        password_hash: PasswordHash,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
}
