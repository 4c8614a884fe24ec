mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::FinderError;
use crate::model::{MealDetail, MealSummary, SearchQuery};

/// Source of recipe data for the widget
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Meals whose name matches the query, in the order the source returns them.
    /// Returns `FinderError::NotFound` when nothing matched.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MealSummary>, FinderError>;

    /// Full record for one meal id. Returns `FinderError::NotFound` when the
    /// source has no such record.
    async fn lookup(&self, id: &str) -> Result<MealDetail, FinderError>;
}
