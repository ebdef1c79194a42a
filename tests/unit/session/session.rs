use super::*;
use crate::feedback::status::StatusCode;
use crate::geometry::quad::Quad;

fn viewport() -> ViewportGeometry {
    ViewportGeometry::new(1280.0, 720.0, 800.0, 600.0)
}

fn event(status: impl Into<StatusCode>, t: u64) -> DetectionEvent {
    DetectionEvent::new(
        Quad::from_rect(100.0, 100.0, 900.0, 600.0, status),
        Timestamp(t),
    )
}

#[test]
fn steady_detections_escalate_guidance() {
    let mut s = ScanSession::with_defaults();
    let g = viewport();

    let out = s.on_quad_detection(&event(DetectionStatus::Success, 0), &g);
    assert_eq!(out.guidance.shown(), Some("Scanning document..."));
    assert_eq!(out.streak, 1);
    assert_eq!(out.overlay.len(), 8);

    // Frames every 250ms: the count climbs while the dwell lock holds the text.
    let mut last = out;
    for i in 1..=6u64 {
        last = s.on_quad_detection(&event(DetectionStatus::Success, i * 250), &g);
    }
    assert_eq!(last.streak, 7);
    // t=1000 accepted "hold steady" (count 5), t=1500 is still locked.
    assert_eq!(s.displayed(), Some("Document detected - hold steady"));

    let out = s.on_quad_detection(&event(DetectionStatus::Success, 2000), &g);
    assert_eq!(out.streak, 8);
    assert_eq!(out.guidance.shown(), Some("Perfect! Processing document..."));
}

#[test]
fn non_positive_status_shows_status_guidance_and_keeps_streak() {
    let mut s = ScanSession::with_defaults();
    let g = viewport();
    s.on_quad_detection(&event(DetectionStatus::Success, 0), &g);

    let out = s.on_quad_detection(&event(DetectionStatus::CameraTooFar, 1000), &g);
    assert_eq!(out.guidance.shown(), Some("Move document closer"));
    assert_eq!(out.status, Some(DetectionStatus::CameraTooFar));
    assert_eq!(out.streak, 1);
}

#[test]
fn unknown_status_leaves_text_unchanged_but_still_draws() {
    let mut s = ScanSession::with_defaults();
    let g = viewport();
    s.on_quad_detection(&event(DetectionStatus::CameraAngleTooSteep, 0), &g);

    let out = s.on_quad_detection(&event(StatusCode(99), 5000), &g);
    assert_eq!(out.guidance, FeedbackUpdate::Suppressed);
    assert_eq!(out.status, None);
    assert_eq!(out.overlay.len(), 8);
    assert_eq!(s.displayed(), Some("Adjust the angle"));
}

#[test]
fn detection_failed_forces_message_and_resets_streak() {
    let mut s = ScanSession::with_defaults();
    let g = viewport();
    s.on_quad_detection(&event(DetectionStatus::Success, 0), &g);
    s.on_quad_detection(&event(DetectionStatus::Success, 100), &g);
    assert_eq!(s.streak(), 2);

    let upd = s.on_detection_failed(Timestamp(200));
    assert_eq!(upd.shown(), Some("Position document in frame"));
    assert_eq!(s.streak(), 0);

    // The forced message restarted the lock at 200.
    let out = s.on_quad_detection(&event(DetectionStatus::Success, 300), &g);
    assert_eq!(out.guidance, FeedbackUpdate::Suppressed);
    assert_eq!(out.streak, 1);
}

#[test]
fn degenerate_viewport_still_updates_guidance() {
    let mut s = ScanSession::with_defaults();
    let g = ViewportGeometry::new(0.0, 0.0, 800.0, 600.0);
    let out = s.on_quad_detection(&event(DetectionStatus::Success, 0), &g);
    assert_eq!(out.overlay.len(), 1);
    assert_eq!(out.guidance.shown(), Some("Scanning document..."));
}

#[test]
fn multi_side_flow_names_the_side() {
    let cfg = ScanGuideConfig {
        mode: ScanMode::MultiSide,
        ..ScanGuideConfig::default()
    };
    let mut s = ScanSession::new(cfg);
    let g = viewport();

    let out = s.on_quad_detection(&event(DetectionStatus::Success, 0), &g);
    assert_eq!(out.guidance.shown(), Some("Scanning front side - hold steady"));

    let upd = s.on_first_side_result(Timestamp(1500));
    assert_eq!(upd.shown(), Some("Now scan the back side"));
    assert_eq!(s.side(), ScanSide::Back);

    let upd = s.on_detection_failed(Timestamp(1600));
    assert_eq!(upd.shown(), Some("Position back side in frame"));
}

#[test]
fn multi_side_guidance_escalates_with_the_streak() {
    let cfg = ScanGuideConfig {
        mode: ScanMode::MultiSide,
        ..ScanGuideConfig::default()
    };
    let mut s = ScanSession::new(cfg);
    let g = viewport();

    let shown: Vec<(u32, String)> = (0..13u64)
        .filter_map(|i| {
            let out = s.on_quad_detection(&event(DetectionStatus::Success, i * 250), &g);
            out.guidance.shown().map(|text| (out.streak, text.to_string()))
        })
        .collect();
    assert_eq!(
        shown,
        vec![
            (1, "Scanning front side - hold steady".to_string()),
            (5, "Scanning front side - hold steady".to_string()),
            (9, "Perfect! Processing front side...".to_string()),
            (13, "Perfect! Processing front side...".to_string()),
        ]
    );
}

#[test]
fn repeated_side_result_on_back_reads_data() {
    let cfg = ScanGuideConfig {
        mode: ScanMode::MultiSide,
        ..ScanGuideConfig::default()
    };
    let mut s = ScanSession::new(cfg);
    let g = viewport();

    s.on_first_side_result(Timestamp(0));
    assert_eq!(s.side(), ScanSide::Back);
    s.on_quad_detection(&event(DetectionStatus::Success, 1000), &g);
    s.on_quad_detection(&event(DetectionStatus::Success, 1100), &g);

    let upd = s.on_first_side_result(Timestamp(2000));
    assert_eq!(upd.shown(), Some("Reading data..."));
    assert_eq!(s.side(), ScanSide::Back);
    assert_eq!(s.streak(), 2);
}

#[test]
fn single_side_result_and_timeout_are_not_forced() {
    let mut s = ScanSession::with_defaults();
    s.on_detection_failed(Timestamp(0));
    assert_eq!(s.on_first_side_result(Timestamp(500)), FeedbackUpdate::Suppressed);
    assert_eq!(s.side(), ScanSide::Front);
    assert_eq!(
        s.on_timeout(Timestamp(1000)).shown(),
        Some("Scan taking too long - processing now...")
    );
}

#[test]
fn finish_clears_canvas() {
    let s = ScanSession::with_defaults();
    assert_eq!(
        s.finish(Size::new(320.0, 240.0)),
        vec![DrawCommand::Clear {
            width: 320.0,
            height: 240.0
        }]
    );
    assert!(ScanSession::with_defaults().finish(Size::ZERO).is_empty());
}

#[test]
fn shared_session_serializes_concurrent_callbacks() {
    let shared = SharedScanSession::new(ScanSession::with_defaults());
    let g = viewport();
    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for j in 0..10u64 {
                    shared.on_quad_detection(&event(DetectionStatus::Success, i * 10 + j), &g);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(shared.with(|s| s.streak()), 40);
    assert!(shared.displayed().is_some());
    assert_eq!(
        shared.on_detection_failed(Timestamp(100)).shown(),
        Some("Position document in frame")
    );
}

#[test]
fn shared_session_forwards_side_result_and_timeout() {
    let cfg = ScanGuideConfig {
        mode: ScanMode::MultiSide,
        ..ScanGuideConfig::default()
    };
    let shared = SharedScanSession::new(ScanSession::new(cfg));

    assert_eq!(
        shared.on_first_side_result(Timestamp(0)).shown(),
        Some("Now scan the back side")
    );
    assert_eq!(shared.with(|s| s.side()), ScanSide::Back);
    assert_eq!(shared.on_timeout(Timestamp(500)), FeedbackUpdate::Suppressed);
    assert_eq!(
        shared.on_timeout(Timestamp(1000)).shown(),
        Some("Scan taking too long - processing now...")
    );
}
