use super::{OwnerCommandService, password::validate_password};
use crate::{
    application::{
        dto::OwnerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::owner::{Email, NewOwner, OwnerName, PasswordHash, Role},
};

pub struct RegisterOwnerCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl OwnerCommandService {
    /// Creates a staff account. Callers are already authenticated; any owner may
    /// register another.
    pub async fn register(&self, command: RegisterOwnerCommand) -> ApplicationResult<OwnerDto> {
        let name = OwnerName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.owner_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let owner = self
            .owner_repo
            .insert(NewOwner {
                name,
                email,
                password_hash: PasswordHash::new(hashed)?,
                role: command.role.unwrap_or_default(),
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(owner_id = %owner.id, role = %owner.role, "owner registered");
        Ok(owner.into())
    }
}
