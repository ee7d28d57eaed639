//! HTTP handlers for entities, favorites and discovery.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod ships;
pub mod sitemap;
pub mod users;

pub use characters::*;
pub use favorites::*;
pub use planets::*;
pub use ships::*;
pub use sitemap::*;
pub use users::*;
