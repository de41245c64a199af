use std::sync::Arc;

use bb8::Pool;
use bb8_redis::RedisConnectionManager;

use crate::{cache::LeaderboardCache, config::Config, platforms::PlatformClients};

#[derive(Clone)]
pub struct AppState {
    pub redis: RedisClient,
    pub config: Arc<Config>,
    pub platforms: Arc<PlatformClients>,
    pub leaderboard_cache: Arc<LeaderboardCache>,
}

pub type RedisClient = Pool<RedisConnectionManager>;
