use axum::{
    Router,
    routing::{get, patch},
};

use crate::{
    http::handlers::{
        get_leaderboard_handler, get_stats_handler, update_goal_handler, update_profile_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/stats/{platform}", get(get_stats_handler))
        .route(
            "/api/stats/leaderboard/{platform}",
            get(get_leaderboard_handler),
        )
        .route("/api/profile", patch(update_profile_handler))
        .route("/api/goal", patch(update_goal_handler))
        .with_state(state)
}
