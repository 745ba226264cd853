use super::{CategoryCommandService, service::optional_text};
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryId, CategoryName, CategoryUpdate},
};

pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub name_bn: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::parse(&command.id)?;
        let name = CategoryName::new(command.name)?;
        let slug = self.derive_slug(&name);

        let updated = self
            .repo
            .update(CategoryUpdate {
                id,
                name,
                name_bn: optional_text(command.name_bn),
                slug,
                description: optional_text(command.description),
            })
            .await?;

        Ok(updated.into())
    }
}
