//! Recipe handlers: list (or fetch one), create, update, delete.
//! The recipe id always travels in the `id` query parameter.

use crate::error::AppError;
use crate::extractors::{JsonBody, QueryParams};
use crate::model::RecipeInput;
use crate::service::{RecipeService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /recipes — all recipes, or one when `?id=` is given.
pub async fn list_recipes(
    State(state): State<AppState>,
    QueryParams(params): QueryParams,
) -> Result<Response, AppError> {
    let store = state.store.as_ref();
    match RequestValidator::optional_id(&params)? {
        Some(id) => Ok(Json(RecipeService::read(store, id).await?).into_response()),
        None => Ok(Json(RecipeService::list(store).await?).into_response()),
    }
}

/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RecipeInput>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = RecipeService::create(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /recipes?id=<id>
pub async fn update_recipe(
    State(state): State<AppState>,
    QueryParams(params): QueryParams,
    JsonBody(input): JsonBody<RecipeInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::require_id(&params)?;
    let recipe = RecipeService::update(state.store.as_ref(), id, input).await?;
    Ok((StatusCode::OK, Json(recipe)))
}

/// DELETE /recipes?id=<id>
pub async fn delete_recipe(
    State(state): State<AppState>,
    QueryParams(params): QueryParams,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::require_id(&params)?;
    RecipeService::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
