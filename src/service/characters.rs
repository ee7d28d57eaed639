use super::key_exists;
use crate::error::AppError;
use crate::model::Character;
use sqlx::AnyPool;

const SELECT: &str = "SELECT name, age, planet_name FROM characters";

pub struct CharacterService;

impl CharacterService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Character>, AppError> {
        let sql = format!("{} ORDER BY name", SELECT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Character>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &AnyPool, name: &str) -> Result<Option<Character>, AppError> {
        let sql = format!("{} WHERE name = $1", SELECT);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, Character>(&sql)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn exists(pool: &AnyPool, name: &str) -> Result<bool, AppError> {
        key_exists(pool, "SELECT 1 FROM characters WHERE name = $1", name).await
    }

    pub async fn create(pool: &AnyPool, character: &Character) -> Result<(), AppError> {
        sqlx::query("INSERT INTO characters (name, age, planet_name) VALUES ($1, $2, $3)")
            .bind(&character.name)
            .bind(character.age)
            .bind(&character.planet_name)
            .execute(pool)
            .await?;
        Ok(())
    }
}
