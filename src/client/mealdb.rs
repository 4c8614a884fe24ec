use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::client::MealSource;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::model::{MealDetail, MealRecord, MealSummary, MealsResponse, SearchQuery};

/// HTTP client for the TheMealDB JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FinderError> {
        let config = FinderConfig {
            base_url: base_url.into(),
            ..FinderConfig::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_records(
        &self,
        endpoint: &str,
        param: &str,
        value: &str,
    ) -> Result<Vec<MealRecord>, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} ({}={})", url, param, value);

        let response = self.client.get(&url).query(&[(param, value)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Status(status));
        }

        let body: MealsResponse = response.json().await?;
        Ok(body.into_records())
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<MealSummary>, FinderError> {
        let records = self.fetch_records("search.php", "s", query.as_str()).await?;
        if records.is_empty() {
            return Err(FinderError::NotFound);
        }

        debug!("Found {} meals for {:?}", records.len(), query.as_str());
        Ok(records.into_iter().map(MealSummary::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<MealDetail, FinderError> {
        let record = self
            .fetch_records("lookup.php", "i", id)
            .await?
            .into_iter()
            .next()
            .ok_or(FinderError::NotFound)?;

        Ok(MealDetail::from(record))
    }
}
