use super::OwnerQueryService;
use crate::application::{dto::OwnerDto, error::ApplicationResult};

impl OwnerQueryService {
    /// Every staff account, newest first.
    pub async fn list_owners(&self) -> ApplicationResult<Vec<OwnerDto>> {
        let owners = self.owner_repo.list().await?;
        Ok(owners.into_iter().map(Into::into).collect())
    }
}
