//! RecipeService: input validation and server-owned timestamps on top of a store.

mod recipe;
mod validation;
pub use recipe::RecipeService;
pub use validation::RequestValidator;
