use super::key_exists;
use crate::error::AppError;
use crate::model::Ship;
use sqlx::AnyPool;

const SELECT: &str = "SELECT name, capacity, speed, captain FROM ships";

pub struct ShipService;

impl ShipService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Ship>, AppError> {
        let sql = format!("{} ORDER BY name", SELECT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Ship>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &AnyPool, name: &str) -> Result<Option<Ship>, AppError> {
        let sql = format!("{} WHERE name = $1", SELECT);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, Ship>(&sql)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &AnyPool, name: &str) -> Result<bool, AppError> {
        key_exists(pool, "SELECT 1 FROM ships WHERE name = $1", name).await
    }

    pub async fn create(pool: &AnyPool, ship: &Ship) -> Result<(), AppError> {
        sqlx::query("INSERT INTO ships (name, capacity, speed, captain) VALUES ($1, $2, $3, $4)")
            .bind(&ship.name)
            .bind(ship.capacity)
            .bind(ship.speed)
            .bind(&ship.captain)
            .execute(pool)
            .await?;
        Ok(())
    }
}
