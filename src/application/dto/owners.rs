use crate::domain::owner::{Owner, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "editor")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id.into(),
            name: owner.name.into(),
            email: owner.email.into(),
            role: owner.role,
            created_at: owner.created_at,
        }
    }
}
