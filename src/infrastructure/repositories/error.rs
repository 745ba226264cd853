use crate::domain::errors::DomainError;

const CNT_NEWS_SLUG: &str = "news_slug_key";
const CNT_NEWS_CATEGORY: &str = "news_category_id_fkey";
const CNT_NEWS_AUTHOR: &str = "news_author_id_fkey";
const CNT_NEWS_SINGLE_FEATURED: &str = "news_single_featured_idx";
const CNT_NEWS_STATUS_CHECK: &str = "news_status_check";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_OWNER_EMAIL: &str = "owners_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NEWS_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("a category with this slug already exists".into())
                    }
                    CNT_OWNER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_NEWS_SINGLE_FEATURED => {
                        DomainError::Conflict("another article was featured concurrently".into())
                    }
                    CNT_NEWS_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_NEWS_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_NEWS_STATUS_CHECK => {
                        DomainError::Validation("status must be draft or published".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Foreign-key violation raised while deleting a still-referenced row.
pub fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503"))
}
