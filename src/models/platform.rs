use std::fmt;

use serde::{Deserialize, Serialize};

/// The external platforms tracked by the service. `serde` lowercase so the
/// variant crosses HTTP path params and JSON as `"codeforces"` / `"leetcode"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Codeforces,
    Leetcode,
}

impl Platform {
    /// Every platform, in a stable order for iteration.
    pub const ALL: [Platform; 2] = [Platform::Codeforces, Platform::Leetcode];

    /// Redis hash field holding the persisted solved count for this platform.
    pub fn solved_field(&self) -> &'static str {
        match self {
            Platform::Codeforces => "cf_solved",
            Platform::Leetcode => "lc_solved",
        }
    }

    /// Redis hash field holding the persisted rating for this platform.
    pub fn rating_field(&self) -> &'static str {
        match self {
            Platform::Codeforces => "cf_rating",
            Platform::Leetcode => "lc_rating",
        }
    }

    /// Redis hash field holding the daily-baseline start count for this platform.
    pub fn start_count_field(&self) -> &'static str {
        match self {
            Platform::Codeforces => "cf_start_count",
            Platform::Leetcode => "lc_start_count",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Codeforces => "codeforces",
            Platform::Leetcode => "leetcode",
        };
        f.write_str(s)
    }
}
