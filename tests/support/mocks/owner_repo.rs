// tests/support/mocks/owner_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsroom_core::domain::{
    errors::{DomainError, DomainResult},
    owner::{Email, NewOwner, Owner, OwnerId, OwnerRepository, PasswordHash},
};
use uuid::Uuid;

use super::newsroom::InMemoryNewsroom;

#[async_trait]
impl OwnerRepository for InMemoryNewsroom {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.state().owners.len() as u64)
    }

    async fn insert(&self, new_owner: NewOwner) -> DomainResult<Owner> {
        let mut state = self.state();
        if state.owners.iter().any(|o| o.email == new_owner.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let owner = Owner {
            id: OwnerId::new(Uuid::new_v4())?,
            name: new_owner.name,
            email: new_owner.email,
            password_hash: new_owner.password_hash,
            role: new_owner.role,
            created_at: new_owner.created_at,
            updated_at: new_owner.created_at,
        };
        state.owners.push(owner.clone());
        Ok(owner)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Owner>> {
        Ok(self.state().owners.iter().find(|o| &o.email == email).cloned())
    }

    async fn find_by_id(&self, id: OwnerId) -> DomainResult<Option<Owner>> {
        Ok(self.state().owners.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Owner>> {
        let mut owners = self.state().owners.clone();
        owners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owners)
    }

    async fn update_password(
        &self,
        id: OwnerId,
        password_hash: PasswordHash,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut state = self.state();
        let owner = state
            .owners
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| DomainError::not_found("owner not found"))?;
        owner.set_password(password_hash, updated_at);
        Ok(())
    }
}
