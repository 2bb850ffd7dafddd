//! Recipe operations used by the HTTP handlers.

use crate::error::AppError;
use crate::model::{Recipe, RecipeInput};
use crate::service::RequestValidator;
use crate::store::RecipeStore;
use chrono::{DateTime, SubsecRound, Utc};

pub struct RecipeService;

/// Server clock at the precision Postgres `TIMESTAMPTZ` keeps (microseconds), so a
/// recipe echoed back on write matches the one read later.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl RecipeService {
    pub async fn list(store: &dyn RecipeStore) -> Result<Vec<Recipe>, AppError> {
        let recipes = store.list().await?;
        tracing::info!(count = recipes.len(), "fetched all recipes");
        Ok(recipes)
    }

    pub async fn read(store: &dyn RecipeStore, id: i64) -> Result<Recipe, AppError> {
        store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no recipe with id {}", id)))
    }

    /// Validate and insert. Timestamps come from the server clock.
    pub async fn create(store: &dyn RecipeStore, input: RecipeInput) -> Result<Recipe, AppError> {
        RequestValidator::validate(&input)?;
        let recipe = store.create(input, now()).await?;
        tracing::info!(id = recipe.id, "created recipe");
        Ok(recipe)
    }

    pub async fn update(store: &dyn RecipeStore, id: i64, input: RecipeInput) -> Result<Recipe, AppError> {
        RequestValidator::validate(&input)?;
        let recipe = store
            .update(id, input, now())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no recipe with id {}", id)))?;
        tracing::info!(id, "updated recipe");
        Ok(recipe)
    }

    pub async fn delete(store: &dyn RecipeStore, id: i64) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound(format!("no recipe with id {}", id)));
        }
        tracing::info!(id, "deleted recipe");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use crate::store::MemoryRecipeStore;
    use chrono::Timelike;

    fn input() -> RecipeInput {
        RecipeInput {
            title: "Soup".into(),
            description: "Hot".into(),
            ingredients: vec![Ingredient {
                ingredient: "water".into(),
                quantity: "1l".into(),
            }],
            instructions: vec!["boil".into()],
        }
    }

    #[tokio::test]
    async fn timestamps_have_microsecond_precision() {
        let store = MemoryRecipeStore::new();
        let created = RecipeService::create(&store, input()).await.unwrap();
        assert_eq!(created.created_at.nanosecond() % 1_000, 0);
        assert_eq!(created.created_at, created.updated_at);

        let updated = RecipeService::update(&store, created.id, input()).await.unwrap();
        assert_eq!(updated.updated_at.nanosecond() % 1_000, 0);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn missing_recipe_is_not_found() {
        let store = MemoryRecipeStore::new();
        assert!(matches!(RecipeService::read(&store, 3).await, Err(AppError::NotFound(_))));
        assert!(matches!(RecipeService::update(&store, 3, input()).await, Err(AppError::NotFound(_))));
        assert!(matches!(RecipeService::delete(&store, 3).await, Err(AppError::NotFound(_))));
    }
}
