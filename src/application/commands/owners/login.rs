use super::OwnerCommandService;
use crate::{
    application::{
        dto::{LoginResponseDto, OwnerDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::owner::{Email, Owner},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl OwnerCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResponseDto> {
        let owner = self
            .find_and_authenticate(&command.email, &command.password)
            .await?;

        let subject = TokenSubject {
            owner_id: owner.id,
            email: owner.email.to_string(),
            role: owner.role,
        };
        let token = self.token_manager.issue(subject).await?;
        tracing::info!(owner_id = %owner.id, "owner logged in");

        let user: OwnerDto = owner.into();
        Ok(LoginResponseDto::from_parts(token, user))
    }

    /// Unknown accounts and wrong passwords are indistinguishable to the caller.
    async fn find_and_authenticate(&self, email: &str, password: &str) -> ApplicationResult<Owner> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let email = Email::new(email).map_err(|_| invalid())?;
        let owner = self
            .owner_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        self.password_hasher
            .verify(password, owner.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => invalid(),
                other => other,
            })?;

        Ok(owner)
    }
}
