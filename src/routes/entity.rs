//! Entity and favorites routes.

use crate::handlers::{
    add_favorite_character, add_favorite_planet, create_character, create_planet, create_ship,
    create_user, get_character, get_planet, get_ship, get_user_favorites, list_characters,
    list_planets, list_ships, list_users, remove_favorite_character, remove_favorite_planet,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_characters))
        .route("/people/:name", get(get_character))
        .route("/planets", get(list_planets))
        .route("/planets/:name", get(get_planet))
        .route("/ships", get(list_ships))
        .route("/ships/:name", get(get_ship))
        .route("/users", get(list_users))
        .route("/users/favorites/:email", get(get_user_favorites))
        .route(
            "/favorite/planet/:planet_name/:email",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/:character_name/:email",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .route("/create_user", post(create_user))
        .route("/create_planet", post(create_planet))
        .route("/create_personaje", post(create_character))
        .route("/create_ship", post(create_ship))
        .with_state(state)
}
