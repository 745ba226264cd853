use super::{CategoryCommandService, service::optional_text};
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{CategoryName, NewCategory},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub name_bn: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = self.derive_slug(&name);

        let created = self
            .repo
            .insert(NewCategory {
                name,
                name_bn: optional_text(command.name_bn),
                slug,
                description: optional_text(command.description),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(category_id = %created.id, slug = created.slug.as_str(), "category created");
        Ok(created.into())
    }
}
