use super::key_exists;
use crate::error::AppError;
use crate::model::{Planet, PlanetRow};
use sqlx::AnyPool;

const SELECT: &str = "SELECT name, galaxy, moon_count, habitable FROM planets";

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("{} ORDER BY name", SELECT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, PlanetRow>(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    pub async fn find(pool: &AnyPool, name: &str) -> Result<Option<Planet>, AppError> {
        let sql = format!("{} WHERE name = $1", SELECT);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, PlanetRow>(&sql)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Planet::from))
    }

    pub async fn exists(pool: &AnyPool, name: &str) -> Result<bool, AppError> {
        key_exists(pool, "SELECT 1 FROM planets WHERE name = $1", name).await
    }

    pub async fn create(pool: &AnyPool, planet: &Planet) -> Result<(), AppError> {
        sqlx::query("INSERT INTO planets (name, galaxy, moon_count, habitable) VALUES ($1, $2, $3, $4)")
            .bind(&planet.name)
            .bind(&planet.galaxy)
            .bind(planet.moon_count)
            .bind(i64::from(planet.habitable))
            .execute(pool)
            .await?;
        Ok(())
    }
}
