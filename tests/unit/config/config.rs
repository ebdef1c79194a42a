use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = ScanGuideConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.dwell_ms, 1000);
    assert_eq!(cfg.streak_window_ms, 500);
    assert_eq!(cfg.thresholds(), StabilityThresholds::default());
    assert_eq!(cfg.line_width, 5.0);
    assert_eq!(cfg.mode, ScanMode::SingleSide);
}

#[test]
fn empty_object_is_default() {
    let cfg = ScanGuideConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ScanGuideConfig::default());
}

#[test]
fn nested_messages_merge_with_defaults() {
    let cfg = ScanGuideConfig::from_json_str(
        r#"{"mode":"multi_side","dwell_ms":750,"messages":{"timeout":"Too slow"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.mode, ScanMode::MultiSide);
    assert_eq!(cfg.dwell_ms, 750);
    assert_eq!(cfg.messages.timeout, "Too slow");
    assert_eq!(cfg.messages.scanning, "Scanning...");
}

#[test]
fn unknown_keys_are_serde_errors() {
    let err = ScanGuideConfig::from_json_str(r#"{"dwell":1}"#).unwrap_err();
    assert!(matches!(err, ScanGuideError::Serde(_)));
}

#[test]
fn validation_rejects_bad_values() {
    let bad = [
        ScanGuideConfig {
            dwell_ms: 0,
            ..ScanGuideConfig::default()
        },
        ScanGuideConfig {
            streak_window_ms: 0,
            ..ScanGuideConfig::default()
        },
        ScanGuideConfig {
            stabilizing_after: 5,
            processing_after: 5,
            ..ScanGuideConfig::default()
        },
        ScanGuideConfig {
            line_width: f64::NAN,
            ..ScanGuideConfig::default()
        },
        ScanGuideConfig {
            line_width: 0.0,
            ..ScanGuideConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(cfg.validate(), Err(ScanGuideError::Validation(_))),
            "{cfg:?}"
        );
    }
}

#[test]
fn missing_file_is_config_error() {
    let path = std::env::temp_dir().join(format!(
        "scanguide_missing_{}.json",
        std::process::id()
    ));
    let err = ScanGuideConfig::from_json_path(&path).unwrap_err();
    assert!(matches!(err, ScanGuideError::Config(_)));
}

#[test]
fn loads_from_file() {
    let path = std::env::temp_dir().join(format!(
        "scanguide_cfg_{}_{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, r#"{"line_width":3.5}"#).unwrap();
    let cfg = ScanGuideConfig::from_json_path(&path).unwrap();
    assert_eq!(cfg.line_width, 3.5);
    std::fs::remove_file(&path).ok();
}
