use crate::{
    config::DEFAULT_DAILY_GOAL,
    errors::AppError,
    models::{UserStats, redis::RedisKey},
    state::RedisClient,
};
use redis::AsyncCommands;
use std::collections::HashMap;
use uuid::Uuid;

pub async fn get_user_stats(user_id: Uuid, redis: RedisClient) -> Result<UserStats, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let key = RedisKey::user(user_id);

    let data: HashMap<String, String> = conn
        .hgetall(&key)
        .await
        .map_err(AppError::RedisCommandError)?;

    if data.is_empty() {
        return Err(AppError::NotFound("User not found".into()));
    }

    Ok(parse_user_hash(user_id, &data))
}

pub async fn get_all_user_stats(redis: RedisClient) -> Result<Vec<UserStats>, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let user_keys: Vec<String> = redis::cmd("KEYS")
        .arg(RedisKey::user_pattern())
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let mut users = Vec::new();

    for key in user_keys {
        if let Some(user_id) = RedisKey::extract_user_id_from_user_key(&key) {
            if let Ok(user) = get_user_stats(user_id, redis.clone()).await {
                users.push(user);
            }
        }
    }

    Ok(users)
}

fn parse_user_hash(user_id: Uuid, data: &HashMap<String, String>) -> UserStats {
    UserStats {
        id: user_id,
        codeforces_handle: data
            .get("codeforces_handle")
            .filter(|handle| !handle.is_empty())
            .cloned(),
        leetcode_handle: data
            .get("leetcode_handle")
            .filter(|handle| !handle.is_empty())
            .cloned(),
        cf_solved: parse_count(data, "cf_solved"),
        cf_rating: parse_count(data, "cf_rating"),
        lc_solved: parse_count(data, "lc_solved"),
        lc_rating: parse_count(data, "lc_rating"),
        cf_start_count: parse_count(data, "cf_start_count"),
        lc_start_count: parse_count(data, "lc_start_count"),
        daily_goal: data
            .get("daily_goal")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DAILY_GOAL),
    }
}

fn parse_count(data: &HashMap<String, String>, field: &str) -> u32 {
    data.get(field)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0)
}
