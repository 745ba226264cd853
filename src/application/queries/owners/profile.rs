use super::OwnerQueryService;
use crate::application::{
    dto::{AuthenticatedOwner, OwnerDto},
    error::{ApplicationError, ApplicationResult},
};

impl OwnerQueryService {
    pub async fn get_profile(&self, actor: &AuthenticatedOwner) -> ApplicationResult<OwnerDto> {
        let owner = self
            .owner_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("owner not found"))?;

        Ok(owner.into())
    }
}
