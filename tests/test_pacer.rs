use std::time::Duration;

use governor::clock::FakeRelativeClock;
use grindboard_be::sync::pacer::FetchPacer;

#[test]
fn test_gate_admits_first_call_immediately() {
    let clock = FakeRelativeClock::default();
    let pacer = FetchPacer::with_clock(Duration::from_millis(500), &clock);

    assert!(pacer.try_acquire());
}

#[test]
fn test_gate_blocks_within_period() {
    let clock = FakeRelativeClock::default();
    let pacer = FetchPacer::with_clock(Duration::from_millis(500), &clock);

    assert!(pacer.try_acquire());
    assert!(!pacer.try_acquire());

    clock.advance(Duration::from_millis(499));
    assert!(!pacer.try_acquire());

    clock.advance(Duration::from_millis(1));
    assert!(pacer.try_acquire());
}

#[test]
fn test_platform_gates_are_independent() {
    let clock = FakeRelativeClock::default();
    let codeforces = FetchPacer::with_clock(Duration::from_millis(500), &clock);
    let leetcode = FetchPacer::with_clock(Duration::from_millis(2000), &clock);

    assert!(codeforces.try_acquire());
    assert!(leetcode.try_acquire());

    // Codeforces' cadence has elapsed, LeetCode's stricter one has not.
    clock.advance(Duration::from_millis(500));
    assert!(codeforces.try_acquire());
    assert!(!leetcode.try_acquire());

    clock.advance(Duration::from_millis(1500));
    assert!(leetcode.try_acquire());
}
