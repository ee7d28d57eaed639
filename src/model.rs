//! Entity rows and their wire projections. Relationships are never embedded, so no view recurses.

use serde::{Deserialize, Serialize};

/// Serialized user. The password column is never selected into this view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub email: String,
    #[serde(rename = "fecha_suscripcion")]
    pub subscription_date: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
}

/// Body of `POST /create_user`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(rename = "fecha_suscripcion")]
    pub subscription_date: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "galaxia")]
    pub galaxy: String,
    #[serde(rename = "numero_planetas")]
    pub moon_count: i64,
    pub habitable: bool,
}

/// Stored planet row. `habitable` is kept as 0/1 so both backends decode it through `sqlx::Any`.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PlanetRow {
    pub name: String,
    pub galaxy: String,
    pub moon_count: i64,
    pub habitable: i64,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet {
            name: row.name,
            galaxy: row.galaxy,
            moon_count: row.moon_count,
            habitable: row.habitable != 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "edad")]
    pub age: i64,
    #[serde(rename = "planeta_nombre")]
    pub planet_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ship {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad")]
    pub capacity: i64,
    #[serde(rename = "velocidad")]
    pub speed: i64,
    #[serde(rename = "capitan")]
    pub captain: String,
}

/// A user's favorites, as returned by `GET /users/favorites/:email`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(rename = "personajes_favoritos")]
    pub characters: Vec<Character>,
    #[serde(rename = "planetas_favoritos")]
    pub planets: Vec<Planet>,
}
