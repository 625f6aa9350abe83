#![cfg(test)]

use crate::github::types::Repository;

pub fn make_repo(id: u64, full_name: &str, stars: u64, forks: u64) -> Repository {
    Repository {
        id,
        full_name: full_name.to_string(),
        description: Some(format!("description of {full_name}")),
        html_url: format!("https://github.com/{full_name}"),
        stargazers_count: stars,
        forks_count: forks,
    }
}
