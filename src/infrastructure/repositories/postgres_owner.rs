// src/infrastructure/repositories/postgres_owner.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::owner::{
    Email, NewOwner, Owner, OwnerId, OwnerName, OwnerRepository, PasswordHash, Role,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const OWNER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresOwnerRepository {
    pool: PgPool,
}

impl PostgresOwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OwnerRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OwnerRow> for Owner {
    type Error = DomainError;

    fn try_from(row: OwnerRow) -> Result<Self, Self::Error> {
        Ok(Owner {
            id: OwnerId::new(row.id)?,
            name: OwnerName::new(row.name)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM owners")
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_owner: NewOwner) -> DomainResult<Owner> {
        let NewOwner {
            name,
            email,
            password_hash,
            role,
            created_at,
        } = new_owner;

        let sql = format!(
            "INSERT INTO owners (name, email, password_hash, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {OWNER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, OwnerRow>(&sql)
            .bind(name.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Owner::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Owner>> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners WHERE email = $1");
        let row = sqlx::query_as::<_, OwnerRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Owner::try_from).transpose()
    }

    async fn find_by_id(&self, id: OwnerId) -> DomainResult<Option<Owner>> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1");
        let row = sqlx::query_as::<_, OwnerRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Owner::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Owner>> {
        let sql = format!("SELECT {OWNER_COLUMNS} FROM owners ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, OwnerRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Owner::try_from).collect()
    }

    async fn update_password(
        &self,
        id: OwnerId,
        password_hash: PasswordHash,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE owners SET password_hash = $2, updated_at = $3 WHERE id = $1")
                .bind(id.as_uuid())
                .bind(password_hash.as_str())
                .bind(updated_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("owner not found".into()));
        }
        Ok(())
    }
}
