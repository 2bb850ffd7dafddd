//! In-process recipe store with the same contract as the Postgres one.

use super::RecipeStore;
use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryRecipeStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    recipes: BTreeMap<i64, Recipe>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        Ok(self.inner.read().await.recipes.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        Ok(self.inner.read().await.recipes.get(&id).cloned())
    }

    async fn create(&self, input: RecipeInput, now: DateTime<Utc>) -> Result<Recipe, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let recipe = input.into_recipe(inner.last_id, now, now);
        inner.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: i64, input: RecipeInput, now: DateTime<Utc>) -> Result<Option<Recipe>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.recipes.get_mut(&id) else {
            return Ok(None);
        };
        *existing = input.into_recipe(id, existing.created_at, now);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.recipes.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
