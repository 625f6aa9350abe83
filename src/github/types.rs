use serde::Deserialize;

/// One repository as returned by the search endpoint. Fields beyond these are
/// ignored during decoding; missing or mis-typed required fields reject the
/// whole response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Repository>,
}
