use super::key_exists;
use crate::error::AppError;
use crate::model::{NewUser, User};
use sqlx::AnyPool;

const SELECT: &str = "SELECT email, subscription_date, first_name, last_name FROM users";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!("{} ORDER BY email", SELECT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &AnyPool, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("{} WHERE email = $1", SELECT);
        tracing::debug!(sql = %sql, email = %email, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &AnyPool, email: &str) -> Result<bool, AppError> {
        key_exists(pool, "SELECT 1 FROM users WHERE email = $1", email).await
    }

    pub async fn create(pool: &AnyPool, user: &NewUser) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (email, password, subscription_date, first_name, last_name) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.subscription_date)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(pool)
        .await?;
        Ok(())
    }
}
