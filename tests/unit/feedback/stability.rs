use super::*;

#[test]
fn close_detections_accumulate() {
    let mut s = DetectionStreak::default();
    let counts: Vec<u32> = [0, 100, 200, 300, 400, 500]
        .into_iter()
        .map(|t| s.record(Timestamp(t)))
        .collect();
    assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(s.count(), 6);
}

#[test]
fn long_gap_restarts_at_one() {
    let mut s = DetectionStreak::default();
    for t in [0, 100, 200, 300, 400, 500] {
        s.record(Timestamp(t));
    }
    assert_eq!(s.record(Timestamp(1100)), 1);
    assert_eq!(s.record(Timestamp(1200)), 2);
}

#[test]
fn gap_equal_to_window_still_counts() {
    let mut s = DetectionStreak::new(500);
    s.record(Timestamp(0));
    assert_eq!(s.record(Timestamp(500)), 2);
    assert_eq!(s.record(Timestamp(1001)), 1);
}

#[test]
fn reset_zeroes_and_next_detection_starts_fresh() {
    let mut s = DetectionStreak::default();
    s.record(Timestamp(0));
    s.record(Timestamp(100));
    s.reset();
    assert_eq!(s.count(), 0);
    assert_eq!(s.record(Timestamp(150)), 1);
}

#[test]
fn clock_stepping_back_does_not_panic() {
    let mut s = DetectionStreak::default();
    s.record(Timestamp(1000));
    assert_eq!(s.record(Timestamp(900)), 2);
}

#[test]
fn levels_escalate_at_thresholds() {
    let th = StabilityThresholds::default();
    assert_eq!(StabilityLevel::from_count(0, th), StabilityLevel::Searching);
    assert_eq!(StabilityLevel::from_count(2, th), StabilityLevel::Searching);
    assert_eq!(StabilityLevel::from_count(3, th), StabilityLevel::Stabilizing);
    assert_eq!(StabilityLevel::from_count(5, th), StabilityLevel::Stabilizing);
    assert_eq!(StabilityLevel::from_count(6, th), StabilityLevel::Processing);
}

#[test]
fn levels_never_decrease_with_count() {
    let th = StabilityThresholds {
        stabilizing_after: 1,
        processing_after: 3,
    };
    let mut prev = StabilityLevel::Searching;
    for n in 0..50 {
        let level = StabilityLevel::from_count(n, th);
        assert!(level >= prev);
        prev = level;
    }
    assert_eq!(prev, StabilityLevel::Processing);
}
