//! Tests against a real PostgreSQL. They need `DATABASE_URL` and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/recipes_test cargo test --test pg_store -- --ignored
//! ```

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use recipe_api::{app, ensure_recipes_table, AppState, Ingredient, PgRecipeStore, Recipe, RecipeInput, RecipeService};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for Postgres tests");
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    ensure_recipes_table(&pool).await.unwrap();
    pool
}

fn risotto() -> RecipeInput {
    RecipeInput {
        title: "Risotto".into(),
        description: "Creamy rice".into(),
        ingredients: vec![
            Ingredient {
                ingredient: "arborio".into(),
                quantity: "320g".into(),
            },
            Ingredient {
                ingredient: "stock".into(),
                quantity: "1l".into(),
            },
        ],
        instructions: vec!["Toast the rice".into(), "Add stock slowly".into(), "Stir in parmesan".into()],
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn table_creation_is_idempotent() {
    let pool = pool().await;
    ensure_recipes_table(&pool).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn create_then_fetch_matches_stored_row() {
    let store = PgRecipeStore::new(pool().await);
    let created = RecipeService::create(&store, risotto()).await.unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let fetched = RecipeService::read(&store, created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.ingredients[1].ingredient, "stock");
    assert_eq!(fetched.instructions.len(), 3);

    let listed = RecipeService::list(&store).await.unwrap();
    assert!(listed.contains(&created));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn update_and_delete_round_trip() {
    let store = PgRecipeStore::new(pool().await);
    let created = RecipeService::create(&store, risotto()).await.unwrap();

    let mut changed = risotto();
    changed.title = "Mushroom risotto".into();
    changed.instructions.push("Fold in mushrooms".into());
    let updated = RecipeService::update(&store, created.id, changed).await.unwrap();
    assert_eq!(updated.title, "Mushroom risotto");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(RecipeService::read(&store, created.id).await.unwrap(), updated);

    RecipeService::delete(&store, created.id).await.unwrap();
    assert!(RecipeService::read(&store, created.id).await.is_err());
    assert!(RecipeService::delete(&store, created.id).await.is_err());
    assert!(RecipeService::update(&store, created.id, risotto()).await.is_err());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn http_create_then_fetch_over_postgres() {
    let router = app(AppState::new(PgRecipeStore::new(pool().await)), 1 << 20);
    let payload = serde_json::json!({
        "title": "Gazpacho",
        "description": "Cold soup",
        "ingredients": [{"ingredient": "tomato", "quantity": "1kg"}],
        "instructions": ["Blend", "Chill"]
    });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Recipe = serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();

    let request = Request::builder()
        .uri(format!("/recipes?id={}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Recipe = serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
    assert_eq!(fetched, created);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/recipes?id={}", created.id))
        .body(Body::empty())
        .unwrap();
    assert_eq!(router.clone().oneshot(request).await.unwrap().status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/recipes?id={}", created.id))
        .body(Body::empty())
        .unwrap();
    assert_eq!(router.oneshot(request).await.unwrap().status(), StatusCode::NOT_FOUND);
}
