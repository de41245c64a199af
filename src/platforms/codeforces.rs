use std::{collections::HashSet, time::Duration};

use async_trait::async_trait;
use serde_json::Value;

use super::PlatformClient;
use crate::models::stats::PlatformStats;

const API_BASE: &str = "https://codeforces.com/api";

pub struct CodeforcesClient {
    http: reqwest::Client,
}

impl CodeforcesClient {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build Codeforces HTTP client");
        Self { http }
    }

    async fn get_json(&self, url: &str) -> Option<Value> {
        let res = match self.http.get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!("Codeforces request failed: {}", e);
                return None;
            }
        };

        if !res.status().is_success() {
            tracing::warn!("Codeforces returned status {} for {}", res.status(), url);
            return None;
        }

        match res.json::<Value>().await {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Invalid JSON from Codeforces: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl PlatformClient for CodeforcesClient {
    async fn fetch_stats(&self, handle: &str) -> Option<PlatformStats> {
        let info = self
            .get_json(&format!("{API_BASE}/user.info?handles={handle}"))
            .await?;
        let rating = extract_rating(&info)?;

        let status = self
            .get_json(&format!("{API_BASE}/user.status?handle={handle}"))
            .await?;
        let total_solved = extract_solved_count(&status)?;

        tracing::debug!("Codeforces fetch for {handle}: solved={total_solved}, rating={rating}");

        Some(PlatformStats {
            handle: handle.to_string(),
            total_solved,
            rating,
        })
    }
}

fn api_result(body: &Value) -> Option<&Value> {
    if body.get("status").and_then(|s| s.as_str()) != Some("OK") {
        return None;
    }
    body.get("result")
}

/// Contest rating from a `user.info` response. A user who never entered a
/// contest has no `rating` field; that is rating 0, not an absence.
pub fn extract_rating(body: &Value) -> Option<u32> {
    let users = api_result(body)?.as_array()?;
    let user = users.first()?;
    Some(user.get("rating").and_then(|r| r.as_u64()).unwrap_or(0) as u32)
}

/// Distinct accepted problems in a `user.status` response. Re-solves of the
/// same problem count once.
pub fn extract_solved_count(body: &Value) -> Option<u32> {
    let submissions = api_result(body)?.as_array()?;
    let mut solved = HashSet::new();

    for submission in submissions {
        if submission.get("verdict").and_then(|v| v.as_str()) != Some("OK") {
            continue;
        }
        let Some(problem) = submission.get("problem") else {
            continue;
        };

        let contest_id = problem.get("contestId").and_then(|c| c.as_u64()).unwrap_or(0);
        let index = problem.get("index").and_then(|i| i.as_str()).unwrap_or("");
        solved.insert(format!("{contest_id}-{index}"));
    }

    Some(solved.len() as u32)
}
