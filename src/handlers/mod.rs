//! HTTP handlers for the recipes resource.

pub mod recipe;
pub use recipe::*;
