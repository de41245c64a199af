use grindboard_be::models::{Platform, UserStats, leaderboard::rank_users, stats::PlatformStats};
use grindboard_be::stats::rank_among;
use uuid::Uuid;

fn user(
    cf_handle: Option<&str>,
    lc_handle: Option<&str>,
    cf_rating: u32,
    lc_solved: u32,
) -> UserStats {
    let mut user = UserStats::new(Uuid::new_v4());
    user.codeforces_handle = cf_handle.map(String::from);
    user.leetcode_handle = lc_handle.map(String::from);
    user.cf_rating = cf_rating;
    user.lc_solved = lc_solved;
    user
}

#[test]
fn test_codeforces_sorts_by_rating() {
    let users = vec![
        user(Some("gray"), None, 1200, 0),
        user(Some("red"), None, 2600, 0),
        user(Some("blue"), None, 1700, 0),
    ];

    let entries = rank_users(&users, Platform::Codeforces, 50);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].handle, "red");
    assert_eq!(entries[1].handle, "blue");
    assert_eq!(entries[2].handle, "gray");
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[2].rank, 3);
}

#[test]
fn test_leetcode_sorts_by_solved_count() {
    let users = vec![
        user(None, Some("few"), 0, 40),
        user(None, Some("many"), 0, 900),
    ];

    let entries = rank_users(&users, Platform::Leetcode, 50);

    assert_eq!(entries[0].handle, "many");
    assert_eq!(entries[1].handle, "few");
}

#[test]
fn test_unlinked_users_are_excluded() {
    let users = vec![
        user(Some("linked"), None, 1500, 0),
        user(None, Some("other_platform_only"), 0, 300),
    ];

    let entries = rank_users(&users, Platform::Codeforces, 50);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].handle, "linked");
}

#[test]
fn test_ties_keep_input_order() {
    let users = vec![
        user(Some("first"), None, 2000, 0),
        user(Some("second"), None, 2000, 0),
        user(Some("third"), None, 2000, 0),
    ];

    let entries = rank_users(&users, Platform::Codeforces, 50);

    assert_eq!(entries[0].handle, "first");
    assert_eq!(entries[1].handle, "second");
    assert_eq!(entries[2].handle, "third");
}

#[test]
fn test_cap_limits_rows() {
    let users: Vec<UserStats> = (0..10u32)
        .map(|i| {
            let handle = format!("user{i}");
            user(Some(handle.as_str()), None, 1000 + i, 0)
        })
        .collect();

    let entries = rank_users(&users, Platform::Codeforces, 3);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[2].rank, 3);
}

#[test]
fn test_rank_among_counts_strictly_better() {
    let metrics = [10, 20, 20, 5];

    // Nobody is strictly above 20, so both tied users rank first.
    assert_eq!(rank_among(metrics, 20), 1);
    // Everyone else is above 5.
    assert_eq!(rank_among(metrics, 5), 4);
    assert_eq!(rank_among(metrics, 10), 3);
}

#[test]
fn test_primary_metric_per_platform() {
    let mut user = UserStats::new(Uuid::new_v4());
    user.cf_rating = 1400;
    user.cf_solved = 300;
    user.lc_solved = 200;
    user.lc_rating = 1700;

    assert_eq!(user.primary_metric(Platform::Codeforces), 1400);
    assert_eq!(user.primary_metric(Platform::Leetcode), 200);
}

#[test]
fn test_snapshot_differs_only_on_change() {
    let mut user = UserStats::new(Uuid::new_v4());
    user.set_snapshot(Platform::Leetcode, 120, 1650);

    // Unchanged values mean no write in a sync pass.
    let same = PlatformStats {
        handle: "x".into(),
        total_solved: 120,
        rating: 1650,
    };
    assert!(!user.snapshot_differs(Platform::Leetcode, &same));

    let more_solved = PlatformStats {
        handle: "x".into(),
        total_solved: 121,
        rating: 1650,
    };
    assert!(user.snapshot_differs(Platform::Leetcode, &more_solved));

    let new_rating = PlatformStats {
        handle: "x".into(),
        total_solved: 120,
        rating: 1700,
    };
    assert!(user.snapshot_differs(Platform::Leetcode, &new_rating));
}
