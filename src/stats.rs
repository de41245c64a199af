use futures::join;
use uuid::Uuid;

use crate::{
    db::{
        leaderboard::get::load_primary_metrics,
        user::{get::get_user_stats, patch::update_platform_snapshot},
    },
    errors::AppError,
    models::{
        Platform, UserStats,
        stats::{PlatformStats, StatsResponse},
    },
    state::AppState,
    sync::baseline::{auto_initialize, today_progress},
};

/// Count of strictly-better metric values, one-based.
pub fn rank_among<I>(metrics: I, value: u32) -> u64
where
    I: IntoIterator<Item = u32>,
{
    metrics.into_iter().filter(|metric| *metric > value).count() as u64 + 1
}

/// Request-path aggregation. Always fetches fresh data for this one user,
/// bypassing the leaderboard cache: the user asking for their own stats
/// expects immediate feedback. A fetch miss keeps the persisted snapshot, so
/// a flaky upstream never turns into a user-facing error here.
pub async fn get_stats(
    user_id: Uuid,
    platform: Platform,
    state: &AppState,
) -> Result<StatsResponse, AppError> {
    let mut user = get_user_stats(user_id, state.redis.clone()).await?;

    let handle = user
        .handle(platform)
        .ok_or_else(|| AppError::UnlinkedPlatform(platform.to_string()))?
        .to_string();

    // Both linked platforms are refreshed, not just the one being asked
    // about, so the combined daily-goal counter stays current.
    let (cf, lc) = join!(
        fetch_linked(&user, Platform::Codeforces, state),
        fetch_linked(&user, Platform::Leetcode, state),
    );

    apply_fetched(&mut user, Platform::Codeforces, cf, state).await?;
    apply_fetched(&mut user, Platform::Leetcode, lc, state).await?;

    for p in Platform::ALL {
        auto_initialize(&mut user, p, state.redis.clone()).await?;
    }

    let today_solved = today_progress(user.cf_solved, user.cf_start_count)
        + today_progress(user.lc_solved, user.lc_start_count);

    let metrics = load_primary_metrics(platform, state.redis.clone()).await?;
    let website_rank = rank_among(metrics, user.primary_metric(platform));

    Ok(StatsResponse {
        handle,
        rating: user.rating(platform),
        solved: user.solved(platform),
        website_rank,
        daily_goal: user.daily_goal,
        today_solved,
    })
}

async fn fetch_linked(
    user: &UserStats,
    platform: Platform,
    state: &AppState,
) -> Option<PlatformStats> {
    let handle = user.handle(platform)?;
    state.platforms.get(platform).fetch_stats(handle).await
}

/// Persist a fetched snapshot only when it changed; a miss keeps the
/// persisted values untouched.
async fn apply_fetched(
    user: &mut UserStats,
    platform: Platform,
    fetched: Option<PlatformStats>,
    state: &AppState,
) -> Result<(), AppError> {
    let Some(fetched) = fetched else {
        return Ok(());
    };

    if user.snapshot_differs(platform, &fetched) {
        update_platform_snapshot(
            user.id,
            platform,
            fetched.total_solved,
            fetched.rating,
            state.redis.clone(),
        )
        .await?;
        user.set_snapshot(platform, fetched.total_solved, fetched.rating);
    }

    Ok(())
}
