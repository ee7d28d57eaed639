//! User favorites over the two junction tables.

use crate::error::AppError;
use crate::model::{Character, Favorites, Planet, PlanetRow};
use sqlx::AnyPool;

/// Which junction a favorite lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    Character,
}

impl FavoriteKind {
    fn junction(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "favorite_planets",
            FavoriteKind::Character => "favorite_characters",
        }
    }

    fn target_column(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planet_name",
            FavoriteKind::Character => "character_name",
        }
    }

    fn target_table(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planets",
            FavoriteKind::Character => "characters",
        }
    }

    /// Singular noun used in client messages.
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planeta",
            FavoriteKind::Character => "Personaje",
        }
    }
}

pub struct FavoriteService;

impl FavoriteService {
    /// True when the favorite target (planet or character) exists.
    pub async fn target_exists(pool: &AnyPool, kind: FavoriteKind, name: &str) -> Result<bool, AppError> {
        let sql = format!("SELECT 1 FROM {} WHERE name = $1", kind.target_table());
        super::key_exists(pool, &sql, name).await
    }

    /// Exact-match membership test on the junction's primary key.
    pub async fn contains(pool: &AnyPool, kind: FavoriteKind, email: &str, name: &str) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT 1 FROM {} WHERE user_email = $1 AND {} = $2",
            kind.junction(),
            kind.target_column()
        );
        tracing::debug!(sql = %sql, email = %email, name = %name, "query");
        let row = sqlx::query(&sql)
            .bind(email)
            .bind(name)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn add(pool: &AnyPool, kind: FavoriteKind, email: &str, name: &str) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {} (user_email, {}) VALUES ($1, $2)",
            kind.junction(),
            kind.target_column()
        );
        tracing::debug!(sql = %sql, email = %email, name = %name, "execute");
        sqlx::query(&sql).bind(email).bind(name).execute(pool).await?;
        Ok(())
    }

    /// Remove a favorite link. Returns the number of rows deleted.
    pub async fn remove(pool: &AnyPool, kind: FavoriteKind, email: &str, name: &str) -> Result<u64, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_email = $1 AND {} = $2",
            kind.junction(),
            kind.target_column()
        );
        tracing::debug!(sql = %sql, email = %email, name = %name, "execute");
        let result = sqlx::query(&sql).bind(email).bind(name).execute(pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn planets(pool: &AnyPool, email: &str) -> Result<Vec<Planet>, AppError> {
        let sql = "SELECT p.name AS name, p.galaxy AS galaxy, p.moon_count AS moon_count, p.habitable AS habitable FROM planets p \
                   JOIN favorite_planets f ON f.planet_name = p.name \
                   WHERE f.user_email = $1 ORDER BY p.name";
        tracing::debug!(sql = %sql, email = %email, "query");
        let rows = sqlx::query_as::<_, PlanetRow>(sql).bind(email).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    pub async fn characters(pool: &AnyPool, email: &str) -> Result<Vec<Character>, AppError> {
        let sql = "SELECT c.name AS name, c.age AS age, c.planet_name AS planet_name FROM characters c \
                   JOIN favorite_characters f ON f.character_name = c.name \
                   WHERE f.user_email = $1 ORDER BY c.name";
        tracing::debug!(sql = %sql, email = %email, "query");
        let rows = sqlx::query_as::<_, Character>(sql).bind(email).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn for_user(pool: &AnyPool, email: &str) -> Result<Favorites, AppError> {
        Ok(Favorites {
            characters: Self::characters(pool, email).await?,
            planets: Self::planets(pool, email).await?,
        })
    }
}
