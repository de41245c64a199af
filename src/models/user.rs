use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::DEFAULT_DAILY_GOAL,
    models::{platform::Platform, stats::PlatformStats},
};

/// Transient copy of one user's persisted stat record. The store owns the
/// record; this struct only carries it through a computation, and writes go
/// back as per-field deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub id: Uuid,
    pub codeforces_handle: Option<String>,
    pub leetcode_handle: Option<String>,

    pub cf_solved: u32,
    pub cf_rating: u32,
    pub lc_solved: u32,
    pub lc_rating: u32,

    pub cf_start_count: u32,
    pub lc_start_count: u32,

    pub daily_goal: u32,
}

impl UserStats {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            codeforces_handle: None,
            leetcode_handle: None,
            cf_solved: 0,
            cf_rating: 0,
            lc_solved: 0,
            lc_rating: 0,
            cf_start_count: 0,
            lc_start_count: 0,
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }

    pub fn handle(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Codeforces => self.codeforces_handle.as_deref(),
            Platform::Leetcode => self.leetcode_handle.as_deref(),
        }
    }

    pub fn solved(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Codeforces => self.cf_solved,
            Platform::Leetcode => self.lc_solved,
        }
    }

    pub fn rating(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Codeforces => self.cf_rating,
            Platform::Leetcode => self.lc_rating,
        }
    }

    pub fn start_count(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Codeforces => self.cf_start_count,
            Platform::Leetcode => self.lc_start_count,
        }
    }

    /// Leaderboard sort key: contest rating on Codeforces, solve count on
    /// LeetCode.
    pub fn primary_metric(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Codeforces => self.cf_rating,
            Platform::Leetcode => self.lc_solved,
        }
    }

    pub fn set_snapshot(&mut self, platform: Platform, solved: u32, rating: u32) {
        match platform {
            Platform::Codeforces => {
                self.cf_solved = solved;
                self.cf_rating = rating;
            }
            Platform::Leetcode => {
                self.lc_solved = solved;
                self.lc_rating = rating;
            }
        }
    }

    pub fn set_start_count(&mut self, platform: Platform, count: u32) {
        match platform {
            Platform::Codeforces => self.cf_start_count = count,
            Platform::Leetcode => self.lc_start_count = count,
        }
    }

    /// True when a fetched snapshot differs from the persisted one, i.e. a
    /// write is actually needed.
    pub fn snapshot_differs(&self, platform: Platform, fetched: &PlatformStats) -> bool {
        self.solved(platform) != fetched.total_solved || self.rating(platform) != fetched.rating
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID
    pub exp: usize,  // expiration time
}
