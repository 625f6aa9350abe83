use crate::error::SearchError;
use crate::github::types::{Repository, SearchResponse};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_base: String,
}

impl SearchClient {
    pub fn new(api_base: &str, user_agent: &str) -> Result<Self, SearchError> {
        // GitHub rejects requests without a User-Agent header
        let http = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/repositories?q={}&sort=stars&order=desc",
            self.api_base,
            urlencoding::encode(query)
        )
    }

    /// Issues one GET against the search endpoint and decodes the `items`
    /// array. Exactly one request per call; no retries.
    pub async fn search(&self, query: &str) -> Result<Vec<Repository>, SearchError> {
        let response = self
            .http
            .get(self.search_url(query))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(status));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body.items)
    }
}
