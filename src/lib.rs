pub mod auth;
pub mod cache;
pub mod config;
mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod platforms;
pub mod state;
pub mod stats;
pub mod sync;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, middleware as axum_middleware};
use bb8::Pool;
use bb8_redis::RedisConnectionManager;

use cache::LeaderboardCache;
use config::Config;
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use platforms::PlatformClients;
use state::AppState;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Arc::new(Config::from_env());

    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let manager = RedisConnectionManager::new(redis_url).unwrap();
    let redis_pool = Pool::builder().build(manager).await.unwrap();

    let state = AppState {
        redis: redis_pool,
        platforms: Arc::new(PlatformClients::new(config.fetch_timeout)),
        leaderboard_cache: Arc::new(LeaderboardCache::new(config.leaderboard_ttl)),
        config: config.clone(),
    };

    // Background timelines: periodic stats sync and the daily baseline reset.
    sync::scheduler::spawn_background_jobs(state.clone());

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
