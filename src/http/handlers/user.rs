use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthClaims,
    db::user::patch::{update_daily_goal, update_handles},
    errors::AppError,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    pub codeforces_handle: Option<String>,
    pub leetcode_handle: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub codeforces_handle: Option<String>,
    pub leetcode_handle: Option<String>,
}

fn normalize_handle(handle: Option<String>) -> Option<String> {
    handle
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
}

/// Link or clear platform handles. An omitted or blank handle unlinks the
/// platform; existing snapshots and baselines are left as they are.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let codeforces_handle = normalize_handle(payload.codeforces_handle);
    let leetcode_handle = normalize_handle(payload.leetcode_handle);

    update_handles(
        user_id,
        codeforces_handle.clone(),
        leetcode_handle.clone(),
        state.redis.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to update handles for {}: {}", user_id, e);
        e.to_response()
    })?;

    Ok(Json(ProfileResponse {
        codeforces_handle,
        leetcode_handle,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalPayload {
    pub daily_goal: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub daily_goal: u32,
}

pub async fn update_goal_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<UpdateGoalPayload>,
) -> Result<Json<GoalResponse>, (StatusCode, String)> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    if payload.daily_goal == 0 {
        return Err(AppError::BadRequest("Daily goal must be at least 1".into()).to_response());
    }

    update_daily_goal(user_id, payload.daily_goal, state.redis.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to update daily goal for {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(Json(GoalResponse {
        daily_goal: payload.daily_goal,
    }))
}
