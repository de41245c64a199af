use crate::{
    db::user::{
        get::get_all_user_stats,
        patch::{reset_start_counts, set_start_count},
    },
    errors::AppError,
    models::{Platform, UserStats},
    state::RedisClient,
};

/// Solved-count progress since the start-of-day baseline, clamped at zero so
/// a decreasing upstream count or a racing reset never reads negative. The
/// clamp happens at read time; stored values are never corrected.
pub fn today_progress(solved: u32, start_count: u32) -> u32 {
    solved.saturating_sub(start_count)
}

/// A zero start count means the baseline was never initialized for this
/// platform. Users who sign up after the last midnight reset must start
/// "today" from their current total, not from zero solves ever.
pub fn baseline_needs_init(start_count: u32, solved: u32) -> bool {
    start_count == 0 && solved > 0
}

/// Persist `start_count = solved` the first time a nonzero count is seen.
/// Idempotent: once the sentinel condition no longer holds this is a no-op.
pub async fn auto_initialize(
    user: &mut UserStats,
    platform: Platform,
    redis: RedisClient,
) -> Result<(), AppError> {
    let solved = user.solved(platform);
    if !baseline_needs_init(user.start_count(platform), solved) {
        return Ok(());
    }

    set_start_count(user.id, platform, solved, redis).await?;
    user.set_start_count(platform, solved);

    tracing::info!(
        "Initialized {} baseline for user {} at {}",
        platform,
        user.id,
        solved
    );

    Ok(())
}

/// Unconditional start-of-day snapshot for every user on both platforms.
/// The scheduler guarantees at most one invocation per calendar day; a
/// second call in the same day would zero out any progress made in between.
pub async fn reset_all_baselines(redis: RedisClient) -> Result<usize, AppError> {
    let users = get_all_user_stats(redis.clone()).await?;

    for user in &users {
        reset_start_counts(user.id, user.cf_solved, user.lc_solved, redis.clone()).await?;
    }

    tracing::info!("Reset daily baselines for {} users", users.len());

    Ok(users.len())
}
