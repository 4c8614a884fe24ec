use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::FinderError;

/// Number of paired `strIngredientN` / `strMeasureN` fields TheMealDB exposes
/// per record. This is a limit of the API's record format.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Category shown when a record has none
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A trimmed, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, FinderError> {
        let term = raw.trim();
        if term.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        Ok(SearchQuery(term.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lightweight recipe record shown in search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full recipe record shown in the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub video: Option<String>,
}

/// Envelope shared by the search and lookup endpoints.
/// `meals` is `null` (or missing) when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsResponse {
    pub fn into_records(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

/// One flat record as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Everything else, including the numbered ingredient and measure slots
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Raw value unless missing or the empty string; whitespace is kept as sent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl MealRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
    }

    /// Ingredients from slots 1..=MAX_INGREDIENT_SLOTS, in slot order,
    /// skipping slots without an ingredient name
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = non_empty(self.slot("strIngredient", i))?;
                let measure = self
                    .slot("strMeasure", i)
                    .map(|m| m.trim().to_string())
                    .unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect()
    }
}

impl From<MealRecord> for MealSummary {
    fn from(record: MealRecord) -> Self {
        MealSummary {
            category: present(record.category),
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            thumbnail: record.thumbnail.unwrap_or_default(),
        }
    }
}

impl From<MealRecord> for MealDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        MealDetail {
            category: present(record.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            video: present(record.youtube),
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            thumbnail: record.thumbnail.unwrap_or_default(),
            instructions: record.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}
