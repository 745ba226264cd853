use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub name_bn: Option<String>,
    pub slug: CategorySlug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub name_bn: Option<String>,
    pub slug: CategorySlug,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub name_bn: Option<String>,
    pub slug: CategorySlug,
    pub description: Option<String>,
}
