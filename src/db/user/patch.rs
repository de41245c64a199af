use crate::{
    errors::AppError,
    models::{Platform, redis::RedisKey},
    state::RedisClient,
};
use redis::AsyncCommands;
use uuid::Uuid;

/// Write one platform's fetched snapshot. Only that platform's solved and
/// rating fields are touched, so a concurrent baseline write to the same
/// record commutes with this one.
pub async fn update_platform_snapshot(
    user_id: Uuid,
    platform: Platform,
    solved: u32,
    rating: u32,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_key = RedisKey::user(user_id);

    let _: () = conn
        .hset_multiple(
            &user_key,
            &[
                (platform.solved_field(), solved),
                (platform.rating_field(), rating),
            ],
        )
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::info!(
        "Updated {} snapshot for user {}: solved={}, rating={}",
        platform,
        user_id,
        solved,
        rating
    );

    Ok(())
}

pub async fn set_start_count(
    user_id: Uuid,
    platform: Platform,
    count: u32,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_key = RedisKey::user(user_id);

    let _: () = conn
        .hset(&user_key, platform.start_count_field(), count)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}

/// Daily reset write: one HSET covering both baseline fields, nothing else
/// on the record.
pub async fn reset_start_counts(
    user_id: Uuid,
    cf_solved: u32,
    lc_solved: u32,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_key = RedisKey::user(user_id);

    let _: () = conn
        .hset_multiple(
            &user_key,
            &[("cf_start_count", cf_solved), ("lc_start_count", lc_solved)],
        )
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}

pub async fn update_handles(
    user_id: Uuid,
    codeforces_handle: Option<String>,
    leetcode_handle: Option<String>,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_key = RedisKey::user(user_id);

    let exists: bool = conn
        .exists(&user_key)
        .await
        .map_err(AppError::RedisCommandError)?;
    if !exists {
        return Err(AppError::NotFound("User not found".into()));
    }

    for (field, handle) in [
        ("codeforces_handle", codeforces_handle),
        ("leetcode_handle", leetcode_handle),
    ] {
        match handle {
            Some(handle) => {
                let _: () = conn
                    .hset(&user_key, field, handle)
                    .await
                    .map_err(AppError::RedisCommandError)?;
            }
            None => {
                let _: () = conn
                    .hdel(&user_key, field)
                    .await
                    .map_err(AppError::RedisCommandError)?;
            }
        }
    }

    tracing::info!("Updated platform handles for user {}", user_id);

    Ok(())
}

pub async fn update_daily_goal(
    user_id: Uuid,
    daily_goal: u32,
    redis: RedisClient,
) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_key = RedisKey::user(user_id);

    let exists: bool = conn
        .exists(&user_key)
        .await
        .map_err(AppError::RedisCommandError)?;
    if !exists {
        return Err(AppError::NotFound("User not found".into()));
    }

    let _: () = conn
        .hset(&user_key, "daily_goal", daily_goal)
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
