use crate::{
    db::user::get::get_all_user_stats,
    errors::AppError,
    models::{
        Platform,
        leaderboard::{LeaderboardEntry, rank_users},
    },
    state::RedisClient,
};

/// Persistence-side leaderboard query: every user linked on `platform`,
/// ranked by the platform's primary metric, capped at `cap` rows.
pub async fn load_leaderboard(
    platform: Platform,
    cap: usize,
    redis: RedisClient,
) -> Result<Vec<LeaderboardEntry>, AppError> {
    let users = get_all_user_stats(redis).await?;
    Ok(rank_users(&users, platform, cap))
}

/// Primary-metric values across all users, for rank computation.
pub async fn load_primary_metrics(
    platform: Platform,
    redis: RedisClient,
) -> Result<Vec<u32>, AppError> {
    let users = get_all_user_stats(redis).await?;
    Ok(users.iter().map(|user| user.primary_metric(platform)).collect())
}
