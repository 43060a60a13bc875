use super::*;
use std::thread;

#[test]
fn test_depth_only_limits_never_expire() {
    let clock = SearchLimits::depth(6).start();
    thread::sleep(Duration::from_millis(5));
    assert!(!clock.expired());
    assert!(clock.remaining().is_none());
}

#[test]
fn test_timed_limits_expire() {
    let clock = SearchLimits::timed(6, Duration::from_millis(10)).start();
    thread::sleep(Duration::from_millis(20));
    assert!(clock.expired());
    assert_eq!(clock.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_elapsed_moves_forward() {
    let clock = SearchLimits::timed(6, Duration::from_secs(60)).start();
    let first = clock.elapsed();
    thread::sleep(Duration::from_millis(5));
    assert!(clock.elapsed() > first);
    assert!(!clock.expired());
}

#[test]
fn test_default_limits() {
    let limits = SearchLimits::default();
    assert_eq!(limits.max_depth, 4);
    assert!(limits.budget.is_none());
}
