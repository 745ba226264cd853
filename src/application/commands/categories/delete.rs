use super::CategoryCommandService;
use crate::{application::error::ApplicationResult, domain::category::CategoryId};

pub struct DeleteCategoryCommand {
    pub id: String,
}

impl CategoryCommandService {
    /// Fails with a conflict while articles still reference the category.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::parse(&command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}
