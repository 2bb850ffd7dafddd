//! Shared application state for all routes. The store is injected once at startup.

use crate::store::RecipeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new<S: RecipeStore + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }
}
