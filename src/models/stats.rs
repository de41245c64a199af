use serde::{Deserialize, Serialize};

/// Normalized result of one platform fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformStats {
    pub handle: String,
    pub total_solved: u32,
    pub rating: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub handle: String,
    pub rating: u32,
    pub solved: u32,
    pub website_rank: u64,
    pub daily_goal: u32,
    /// Combined progress across both platforms since the daily baseline.
    pub today_solved: u32,
}
