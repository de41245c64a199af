use std::time::Duration;

use grindboard_be::cache::LeaderboardCache;
use grindboard_be::errors::AppError;
use grindboard_be::models::{Platform, leaderboard::LeaderboardEntry};

fn entry(handle: &str, rank: u64) -> LeaderboardEntry {
    LeaderboardEntry {
        handle: handle.into(),
        rank,
        cf_rating: 0,
        cf_solved: 0,
        lc_solved: 0,
        lc_rating: 0,
    }
}

#[tokio::test]
async fn test_fresh_slot_served_verbatim() {
    let cache = LeaderboardCache::new(Duration::from_secs(300));

    let first = cache
        .get_or_refresh(Platform::Codeforces, || async {
            Ok(vec![entry("tourist", 1)])
        })
        .await
        .unwrap();

    // Persisted data changed, but the slot is still fresh: same entries,
    // same rank assignment, loader not consulted.
    let second = cache
        .get_or_refresh(Platform::Codeforces, || async { Ok(vec![entry("petr", 1)]) })
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second[0].handle, "tourist");
}

#[tokio::test]
async fn test_expired_slot_reflects_new_data() {
    let cache = LeaderboardCache::new(Duration::ZERO);

    let first = cache
        .get_or_refresh(Platform::Codeforces, || async {
            Ok(vec![entry("tourist", 1)])
        })
        .await
        .unwrap();
    assert_eq!(first[0].handle, "tourist");

    let second = cache
        .get_or_refresh(Platform::Codeforces, || async { Ok(vec![entry("petr", 1)]) })
        .await
        .unwrap();
    assert_eq!(second[0].handle, "petr");
}

#[tokio::test]
async fn test_slots_are_per_platform() {
    let cache = LeaderboardCache::new(Duration::from_secs(300));

    let cf = cache
        .get_or_refresh(Platform::Codeforces, || async {
            Ok(vec![entry("tourist", 1)])
        })
        .await
        .unwrap();
    let lc = cache
        .get_or_refresh(Platform::Leetcode, || async {
            Ok(vec![entry("grinder", 1)])
        })
        .await
        .unwrap();

    assert_eq!(cf[0].handle, "tourist");
    assert_eq!(lc[0].handle, "grinder");
}

#[tokio::test]
async fn test_loader_error_is_not_cached() {
    let cache = LeaderboardCache::new(Duration::from_secs(300));

    let failed = cache
        .get_or_refresh(Platform::Codeforces, || async {
            Err(AppError::RedisPoolError("store unreachable".into()))
        })
        .await;
    assert!(failed.is_err());

    // The next call gets a clean miss, not a poisoned slot.
    let recovered = cache
        .get_or_refresh(Platform::Codeforces, || async {
            Ok(vec![entry("tourist", 1)])
        })
        .await
        .unwrap();
    assert_eq!(recovered[0].handle, "tourist");
}
