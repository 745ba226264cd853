use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::owner::OwnerRepository;

pub struct OwnerCommandService {
    pub(super) owner_repo: Arc<dyn OwnerRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl OwnerCommandService {
    pub fn new(
        owner_repo: Arc<dyn OwnerRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            owner_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }
}
