pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod validator;
pub mod widget;

// Re-export commonly used types
pub use client::{MealDbClient, MealSource};
pub use crate::config::FinderConfig;
pub use error::{ErrorKind, FinderError};
pub use model::{Ingredient, MealDetail, MealSummary, SearchQuery, MAX_INGREDIENT_SLOTS};
pub use validator::{evaluate, FieldName, RegistrationForm, SubmitOutcome};
pub use widget::{CardEvent, Key, LookupApplied, RecipeWidget};

use std::sync::Arc;

/// Build a client from `recipe_finder.toml` / `RECIPE_FINDER__*` settings
pub fn default_client() -> Result<MealDbClient, FinderError> {
    let config = FinderConfig::load()?;
    MealDbClient::new(&config)
}

/// Build a widget backed by the configured API client
pub fn default_widget() -> Result<RecipeWidget, FinderError> {
    Ok(RecipeWidget::new(Arc::new(default_client()?)))
}

/// Search meals by name with the configured client
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_finder::FinderError> {
/// let meals = recipe_finder::search_meals("arrabiata").await?;
/// for meal in meals {
///     println!("{} {}", meal.id, meal.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_meals(term: &str) -> Result<Vec<MealSummary>, FinderError> {
    let query = SearchQuery::parse(term)?;
    default_client()?.search(&query).await
}

/// Look up one meal by id with the configured client
pub async fn lookup_meal(id: &str) -> Result<MealDetail, FinderError> {
    default_client()?.lookup(id).await
}
