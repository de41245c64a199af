use std::{num::NonZeroU32, time::Duration};

use governor::{
    Quota, RateLimiter,
    clock::{Clock, DefaultClock},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};

use crate::{config::Config, models::Platform};

/// Fixed-interval gate in front of one platform's outbound calls. One cell
/// replenishes per period, so the first acquire passes immediately and each
/// later acquire waits out the remainder of the platform's delay.
pub struct FetchPacer<C: Clock = DefaultClock> {
    limiter: RateLimiter<NotKeyed, InMemoryState, C, NoOpMiddleware<C::Instant>>,
}

impl FetchPacer {
    pub fn new(period: Duration) -> Self {
        Self {
            limiter: RateLimiter::direct(pacing_quota(period)),
        }
    }

    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}

impl<C: Clock> FetchPacer<C> {
    pub fn with_clock(period: Duration, clock: &C) -> Self {
        Self {
            limiter: RateLimiter::direct_with_clock(pacing_quota(period), clock),
        }
    }

    /// Non-blocking probe. Lets tests drive the gate with a fake clock
    /// instead of waiting out real wall-clock delays.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

fn pacing_quota(period: Duration) -> Quota {
    Quota::with_period(period)
        .expect("pacing period must be non-zero")
        .allow_burst(NonZeroU32::new(1).unwrap())
}

/// One gate per platform; the two cadences are independent.
pub struct FetchPacers {
    codeforces: FetchPacer,
    leetcode: FetchPacer,
}

impl FetchPacers {
    pub fn new(config: &Config) -> Self {
        Self {
            codeforces: FetchPacer::new(config.codeforces_delay),
            leetcode: FetchPacer::new(config.leetcode_delay),
        }
    }

    pub fn get(&self, platform: Platform) -> &FetchPacer {
        match platform {
            Platform::Codeforces => &self.codeforces,
            Platform::Leetcode => &self.leetcode,
        }
    }
}
