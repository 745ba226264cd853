// src/application/commands/provision.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::{CategoryCommandService, CreateCategoryCommand},
            owners::{OwnerCommandService, RegisterOwnerCommand},
        },
        error::ApplicationResult,
    },
    domain::{category::CategoryRepository, owner::{OwnerRepository, Role}},
};

/// Credentials for the account created on first start.
#[derive(Debug, Clone)]
pub struct InitialAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// English name paired with its Bengali label.
pub const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Bangladesh", "বাংলাদেশ"),
    ("International", "আন্তর্জাতিক"),
    ("Sports", "খেলা"),
    ("Entertainment", "বিনোদন"),
];

pub struct ProvisioningService {
    owner_repo: Arc<dyn OwnerRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    owner_commands: Arc<OwnerCommandService>,
    category_commands: Arc<CategoryCommandService>,
}

impl ProvisioningService {
    pub fn new(
        owner_repo: Arc<dyn OwnerRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        owner_commands: Arc<OwnerCommandService>,
        category_commands: Arc<CategoryCommandService>,
    ) -> Self {
        Self {
            owner_repo,
            category_repo,
            owner_commands,
            category_commands,
        }
    }

    /// Creates the initial admin when no owner exists yet. Returns whether an
    /// account was created.
    pub async fn ensure_initial_admin(&self, admin: Option<InitialAdmin>) -> ApplicationResult<bool> {
        if self.owner_repo.count().await? > 0 {
            return Ok(false);
        }
        let Some(admin) = admin else {
            tracing::warn!("no owners exist and INITIAL_ADMIN_* is not set");
            return Ok(false);
        };

        tracing::info!(email = %admin.email, "creating initial admin");
        self.owner_commands
            .register(RegisterOwnerCommand {
                name: admin.name,
                email: admin.email,
                password: admin.password,
                role: Some(Role::Admin),
            })
            .await?;
        Ok(true)
    }

    /// Seeds the default categories into an empty table. A failing seed is
    /// logged and skipped. Returns how many were created.
    pub async fn seed_default_categories(&self) -> ApplicationResult<usize> {
        if self.category_repo.count().await? > 0 {
            return Ok(0);
        }

        tracing::info!("seeding default categories");
        let mut created = 0;
        for (name, name_bn) in DEFAULT_CATEGORIES {
            let result = self
                .category_commands
                .create_category(CreateCategoryCommand {
                    name: name.to_string(),
                    name_bn: Some(name_bn.to_string()),
                    description: None,
                })
                .await;
            match result {
                Ok(_) => created += 1,
                Err(err) => tracing::warn!(category = name, error = %err, "failed to seed category"),
            }
        }
        Ok(created)
    }
}
