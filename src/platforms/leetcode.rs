use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::PlatformClient;
use crate::models::stats::PlatformStats;

const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

const USER_STATS_QUERY: &str = r#"
query userStats($username: String!) {
    matchedUser(username: $username) {
        submitStats: submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
            }
        }
    }
    userContestRanking(username: $username) {
        rating
    }
}"#;

pub struct LeetcodeClient {
    http: reqwest::Client,
}

impl LeetcodeClient {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build LeetCode HTTP client");
        Self { http }
    }
}

#[async_trait]
impl PlatformClient for LeetcodeClient {
    async fn fetch_stats(&self, handle: &str) -> Option<PlatformStats> {
        let body = json!({
            "query": USER_STATS_QUERY,
            "variables": { "username": handle },
        });

        // LeetCode rejects requests that do not look like a browser.
        let res = match self
            .http
            .post(GRAPHQL_URL)
            .header(
                "User-Agent",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )
            .header("Referer", format!("https://leetcode.com/{handle}/"))
            .header("Origin", "https://leetcode.com")
            .json(&body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!("LeetCode request failed: {}", e);
                return None;
            }
        };

        if !res.status().is_success() {
            tracing::warn!("LeetCode returned status {} for {}", res.status(), handle);
            return None;
        }

        let payload: Value = match res.json().await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Invalid JSON from LeetCode: {}", e);
                return None;
            }
        };

        let total_solved = extract_total_solved(&payload)?;
        let rating = extract_contest_rating(&payload);

        tracing::debug!("LeetCode fetch for {handle}: solved={total_solved}, rating={rating}");

        Some(PlatformStats {
            handle: handle.to_string(),
            total_solved,
            rating,
        })
    }
}

/// Total accepted count across all difficulties. The breakdown carries
/// per-difficulty rows plus a combined "All" row; only the combined row is
/// trusted. A missing user or a missing "All" row means no usable data.
pub fn extract_total_solved(body: &Value) -> Option<u32> {
    let rows = body
        .pointer("/data/matchedUser/submitStats/acSubmissionNum")?
        .as_array()?;

    rows.iter()
        .find(|row| row.get("difficulty").and_then(|d| d.as_str()) == Some("All"))
        .and_then(|row| row.get("count").and_then(|c| c.as_u64()))
        .map(|count| count as u32)
}

/// Contest rating, rounded. Users with no contest history come back with a
/// null `userContestRanking`; that is rating 0.
pub fn extract_contest_rating(body: &Value) -> u32 {
    body.pointer("/data/userContestRanking/rating")
        .and_then(|r| r.as_f64())
        .map(|r| r.round() as u32)
        .unwrap_or(0)
}
