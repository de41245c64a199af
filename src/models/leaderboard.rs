use serde::{Deserialize, Serialize};

use crate::models::{platform::Platform, user::UserStats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub handle: String,
    pub rank: u64,
    pub cf_rating: u32,
    pub cf_solved: u32,
    pub lc_solved: u32,
    pub lc_rating: u32,
}

/// Project the users linked on `platform` into ranked leaderboard rows.
/// Stable sort on the platform's primary metric descending; ties keep the
/// order persistence returned them in.
pub fn rank_users(users: &[UserStats], platform: Platform, cap: usize) -> Vec<LeaderboardEntry> {
    let mut linked: Vec<&UserStats> = users
        .iter()
        .filter(|user| user.handle(platform).is_some())
        .collect();

    linked.sort_by(|a, b| b.primary_metric(platform).cmp(&a.primary_metric(platform)));
    linked.truncate(cap);

    linked
        .iter()
        .enumerate()
        .map(|(index, user)| LeaderboardEntry {
            handle: user.handle(platform).unwrap_or_default().to_string(),
            rank: (index + 1) as u64,
            cf_rating: user.cf_rating,
            cf_solved: user.cf_solved,
            lc_solved: user.lc_solved,
            lc_rating: user.lc_rating,
        })
        .collect()
}
