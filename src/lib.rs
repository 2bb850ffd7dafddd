//! Recipe API: JSON CRUD over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use model::{Ingredient, Recipe, RecipeInput};
pub use routes::{app, common_routes, recipe_routes};
pub use service::RecipeService;
pub use state::AppState;
pub use store::{ensure_recipes_table, MemoryRecipeStore, PgRecipeStore, RecipeStore};
