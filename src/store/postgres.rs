//! PostgreSQL-backed recipe store. All values are bound as parameters.

use super::RecipeStore;
use crate::error::AppError;
use crate::model::{Ingredient, Recipe, RecipeInput};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

pub const RECIPES_TABLE: &str = "recipes";

const COLUMNS: &str = "id, title, description, ingredients, instructions, created_at, updated_at";

/// Create the recipes table if it does not exist.
pub async fn ensure_recipes_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            ingredients JSONB NOT NULL DEFAULT '[]'::jsonb,
            instructions TEXT[] NOT NULL DEFAULT '{{}}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        RECIPES_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!(table = RECIPES_TABLE, "recipes table ensured");
    Ok(())
}

#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        PgRecipeStore { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, RECIPES_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(recipe_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, RECIPES_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(recipe_from_row).transpose()
    }

    async fn create(&self, input: RecipeInput, now: DateTime<Utc>) -> Result<Recipe, AppError> {
        let sql = format!(
            "INSERT INTO {} (title, description, ingredients, instructions, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            RECIPES_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.ingredients))
            .bind(&input.instructions)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        recipe_from_row(&row)
    }

    async fn update(&self, id: i64, input: RecipeInput, now: DateTime<Utc>) -> Result<Option<Recipe>, AppError> {
        let sql = format!(
            "UPDATE {} SET title = $1, description = $2, ingredients = $3, instructions = $4, updated_at = $5 \
             WHERE id = $6 RETURNING {}",
            RECIPES_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.ingredients))
            .bind(&input.instructions)
            .bind(now)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(recipe_from_row).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", RECIPES_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn recipe_from_row(row: &PgRow) -> Result<Recipe, AppError> {
    let Json(ingredients): Json<Vec<Ingredient>> = row.try_get("ingredients")?;
    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        ingredients,
        instructions: row.try_get("instructions")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
