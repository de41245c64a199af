use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::time::{MissedTickBehavior, interval, sleep};

use crate::{
    db::baseline::{get_last_reset_date, set_last_reset_date},
    state::AppState,
};

use super::{baseline::reset_all_baselines, batch::sync_all_user_stats, pacer::FetchPacers};

/// Background timelines: the periodic full-user sync and the daily baseline
/// reset. Fire-and-forget; there is no cancellation short of process
/// shutdown, and each user's write is its own atomic unit.
pub fn spawn_background_jobs(state: AppState) {
    tokio::spawn(run_sync_job(state.clone()));
    tokio::spawn(run_daily_reset_job(state));
}

/// Periodic sync. The batch is awaited inline in this task, so a run that
/// outlives the interval cannot overlap the next one; elapsed ticks are
/// skipped rather than queued.
async fn run_sync_job(state: AppState) {
    let pacers = FetchPacers::new(&state.config);

    let mut ticker = interval(state.config.sync_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately; consume it so the first pass
    // lands one full interval after startup.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        if let Err(e) = sync_all_user_stats(&state, &pacers).await {
            tracing::error!("Stats sync aborted: {}", e);
        }
    }
}

/// Daily baseline reset at the configured local hour. The persisted last-run
/// date keeps a restart at the boundary from firing twice in one day. A
/// reset missed while the process was down is skipped, never run late: a
/// mid-day reset would wipe progress already made.
async fn run_daily_reset_job(state: AppState) {
    loop {
        let wait =
            duration_until_next_reset(Local::now().naive_local(), state.config.daily_reset_hour);
        sleep(wait).await;

        let today = Local::now().date_naive();

        match get_last_reset_date(state.redis.clone()).await {
            Ok(Some(last)) if last == today => {
                tracing::info!("Daily baseline reset already ran on {}, skipping", today);
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Could not read last reset date: {}", e);
                continue;
            }
        }

        match reset_all_baselines(state.redis.clone()).await {
            Ok(count) => {
                tracing::info!("Daily baseline reset complete for {} users", count);
                if let Err(e) = set_last_reset_date(today, state.redis.clone()).await {
                    tracing::error!("Failed to record reset date: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Daily baseline reset failed: {}", e);
            }
        }
    }
}

/// Wall-clock wait until the next occurrence of `reset_hour` local time.
pub fn duration_until_next_reset(now: NaiveDateTime, reset_hour: u32) -> Duration {
    let today_reset = now
        .date()
        .and_hms_opt(reset_hour, 0, 0)
        .expect("reset hour is validated at configuration time");

    let next = if today_reset > now {
        today_reset
    } else {
        today_reset + chrono::Duration::days(1)
    };

    (next - now).to_std().unwrap_or(Duration::from_secs(60))
}
