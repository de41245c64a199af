pub mod codeforces;
pub mod leetcode;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Platform, stats::PlatformStats};

pub use codeforces::CodeforcesClient;
pub use leetcode::LeetcodeClient;

/// One client per external platform. Implementations normalize the
/// platform's response shape into `PlatformStats` and signal absence with
/// `None`; timeouts, transport failures and unknown handles never cross this
/// boundary as errors. Retry policy belongs to the caller.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    async fn fetch_stats(&self, handle: &str) -> Option<PlatformStats>;
}

pub struct PlatformClients {
    pub codeforces: CodeforcesClient,
    pub leetcode: LeetcodeClient,
}

impl PlatformClients {
    pub fn new(timeout: Duration) -> Self {
        Self {
            codeforces: CodeforcesClient::new(timeout),
            leetcode: LeetcodeClient::new(timeout),
        }
    }

    pub fn get(&self, platform: Platform) -> &dyn PlatformClient {
        match platform {
            Platform::Codeforces => &self.codeforces,
            Platform::Leetcode => &self.leetcode,
        }
    }
}
