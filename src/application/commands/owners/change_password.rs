use super::{OwnerCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthenticatedOwner,
        error::{ApplicationError, ApplicationResult},
    },
    domain::owner::PasswordHash,
};

pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

impl OwnerCommandService {
    pub async fn change_password(
        &self,
        actor: &AuthenticatedOwner,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        if command.old_password.is_empty() || command.new_password.is_empty() {
            return Err(ApplicationError::validation(
                "old and new passwords are required",
            ));
        }

        let owner = self
            .owner_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("owner not found"))?;

        self.password_hasher
            .verify(&command.old_password, owner.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized("invalid old password")
                }
                other => other,
            })?;

        validate_password(&command.new_password)?;
        let hashed = self.password_hasher.hash(&command.new_password).await?;
        self.owner_repo
            .update_password(owner.id, PasswordHash::new(hashed)?, self.clock.now())
            .await?;

        tracing::info!(owner_id = %owner.id, "password changed");
        Ok(())
    }
}
