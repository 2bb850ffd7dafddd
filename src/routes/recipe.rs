//! Recipe routes: all four verbs share the `/recipes` path.

use crate::handlers::recipe::{create_recipe, delete_recipe, list_recipes, update_recipe};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn recipe_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/recipes",
            get(list_recipes)
                .post(create_recipe)
                .put(update_recipe)
                .delete(delete_recipe),
        )
        .with_state(state)
}
