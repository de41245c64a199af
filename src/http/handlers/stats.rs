use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    auth::AuthClaims,
    db::leaderboard::get::load_leaderboard,
    models::{Platform, leaderboard::LeaderboardEntry, stats::StatsResponse},
    state::AppState,
    stats,
};

/// Private: the requesting user's own stats, freshly fetched.
pub async fn get_stats_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(platform): Path<Platform>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let response = stats::get_stats(user_id, platform, &state)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get stats for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(response))
}

/// Public: the cached leaderboard, staleness bounded by the TTL.
pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
    Path(platform): Path<Platform>,
) -> Result<Json<Vec<LeaderboardEntry>>, (StatusCode, String)> {
    let redis = state.redis.clone();
    let cap = state.config.leaderboard_cap;

    let entries = state
        .leaderboard_cache
        .get_or_refresh(platform, move || async move {
            load_leaderboard(platform, cap, redis).await
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to get leaderboard: {}", e);
            e.to_response()
        })?;

    Ok(Json(entries))
}
