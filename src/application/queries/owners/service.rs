use std::sync::Arc;

use crate::domain::owner::OwnerRepository;

pub struct OwnerQueryService {
    pub(super) owner_repo: Arc<dyn OwnerRepository>,
}

impl OwnerQueryService {
    pub fn new(owner_repo: Arc<dyn OwnerRepository>) -> Self {
        Self { owner_repo }
    }
}
