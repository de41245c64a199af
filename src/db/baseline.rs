use chrono::NaiveDate;
use redis::AsyncCommands;

use crate::{errors::AppError, models::redis::RedisKey, state::RedisClient};

pub async fn get_last_reset_date(redis: RedisClient) -> Result<Option<NaiveDate>, AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let stored: Option<String> = conn
        .get(RedisKey::last_baseline_reset())
        .await
        .map_err(AppError::RedisCommandError)?;

    match stored {
        Some(raw) => {
            let date = raw.parse::<NaiveDate>().map_err(|e| {
                AppError::Deserialization(format!("Invalid last reset date: {e}"))
            })?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}

pub async fn set_last_reset_date(date: NaiveDate, redis: RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await.map_err(|e| match e {
        bb8::RunError::User(err) => AppError::RedisCommandError(err),
        bb8::RunError::TimedOut => AppError::RedisPoolError("Redis connection timed out".into()),
    })?;

    let _: () = conn
        .set(RedisKey::last_baseline_reset(), date.to_string())
        .await
        .map_err(AppError::RedisCommandError)?;

    Ok(())
}
