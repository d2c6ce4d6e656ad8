//! User rows

use super::models::User;
use crate::error::{AppError, Result};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A taken name is a validation error, never an overwrite.
    pub async fn create(
        &self,
        name: &str,
        email: Option<&str>,
        password_hash: &str,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Validation("username already exists".to_string())
            }
            other => AppError::Database(other),
        })?;

        tracing::debug!("Created user: {} (id={})", user.name, user.id);
        Ok(user)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<()> {
        let rows = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound(format!("user #{}", id)));
        }

        tracing::debug!("Updated password hash for user: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::database::repository::test_support::create_test_repo;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_create_and_get_by_name() {
        let repo = create_test_repo().await;
        let users = repo.users();

        let user = users
            .create("alice", Some("a@example.com"), "s$h")
            .await
            .unwrap();
        assert!(user.id > 0);

        let fetched = users.get_by_name("alice").await.unwrap().unwrap();
        assert_eq!(fetched.id, user.id);
        assert_eq!(fetched.email.as_deref(), Some("a@example.com"));
        assert_eq!(fetched.password_hash, "s$h");

        assert!(users.get_by_name("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = create_test_repo().await;
        let users = repo.users();

        users.create("alice", None, "first").await.unwrap();
        let err = users.create("alice", None, "second").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let kept = users.get_by_name("alice").await.unwrap().unwrap();
        assert_eq!(kept.password_hash, "first");
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let repo = create_test_repo().await;
        let users = repo.users();

        let user = users.create("alice", None, "old").await.unwrap();
        users.update_password_hash(user.id, "new").await.unwrap();

        let updated = users.get_by_name("alice").await.unwrap().unwrap();
        assert_eq!(updated.password_hash, "new");
        assert!(matches!(
            users.update_password_hash(999, "x").await,
            Err(AppError::NotFound(_))
        ));
    }
}
