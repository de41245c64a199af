use crate::{
    db::user::{get::get_all_user_stats, patch::update_platform_snapshot},
    errors::AppError,
    models::Platform,
    state::AppState,
};

use super::pacer::FetchPacers;

/// One full sync pass over every registered user. Sequential by design: the
/// pacer gates keep each platform inside its rate limit, and one user's bad
/// handle or flaky fetch must not disturb anyone else's update. Only a
/// persistence failure aborts the pass; the next scheduled run starts over.
pub async fn sync_all_user_stats(state: &AppState, pacers: &FetchPacers) -> Result<(), AppError> {
    let users = get_all_user_stats(state.redis.clone()).await?;
    tracing::info!("Starting stats sync for {} users", users.len());

    for user in &users {
        for platform in Platform::ALL {
            let Some(handle) = user.handle(platform) else {
                continue;
            };

            pacers.get(platform).acquire().await;

            let Some(fetched) = state.platforms.get(platform).fetch_stats(handle).await else {
                tracing::warn!(
                    "No {} data for {} this cycle, keeping last snapshot",
                    platform,
                    handle
                );
                continue;
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
            }
        }
    }

    tracing::info!("Stats sync cycle complete");

    Ok(())
}
