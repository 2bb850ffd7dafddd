//! Recipe persistence. Handlers only see the `RecipeStore` trait; the binary injects
//! a `PgRecipeStore`, tests inject a `MemoryRecipeStore`.

mod memory;
mod postgres;

pub use memory::MemoryRecipeStore;
pub use postgres::{ensure_recipes_table, PgRecipeStore, RECIPES_TABLE};

use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes, ordered by id.
    async fn list(&self) -> Result<Vec<Recipe>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError>;

    /// Insert a recipe; the store assigns the id. Both timestamps are set to `now`.
    async fn create(&self, input: RecipeInput, now: DateTime<Utc>) -> Result<Recipe, AppError>;

    /// Replace the mutable fields of recipe `id`. `None` when no such recipe.
    async fn update(&self, id: i64, input: RecipeInput, now: DateTime<Utc>) -> Result<Option<Recipe>, AppError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap liveness check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
