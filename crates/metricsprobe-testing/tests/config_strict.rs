#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use metricsprobe_core::IdentityMode;
use metricsprobe_testing::{config, ProbeConfig, TestMetrics};

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.identity.mode, IdentityMode::ValuesOnly);
    assert_eq!(cfg.identity.separator, '.');
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
identity:
  mode: values_only
  seperator: "." # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn unknown_mode_rejected() {
    let bad = r#"
version: 1
identity:
  mode: hashed
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_separator_rejected() {
    let bad = r#"
version: 1
identity:
  separator: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_file_is_internal_and_names_the_path() {
    let err = config::load_from_file("/nonexistent/metricsprobe.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
    assert!(err.to_string().contains("/nonexistent/metricsprobe.yaml"));
}

#[test]
fn invalid_file_names_the_path() {
    let path = std::env::temp_dir().join(format!("metricsprobe-bad-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\nidentity:\n  separator: \"=\"\n").unwrap();
    let err = config::load_from_file(&path).expect_err("must fail");
    let _ = std::fs::remove_file(&path);

    assert_eq!(err.code().as_str(), "BAD_REQUEST");
    let msg = err.to_string();
    assert!(msg.contains(&path.display().to_string()));
    assert!(msg.contains("identity.separator"));
}

#[test]
fn reserved_separator_rejected() {
    let bad = r#"
version: 1
identity:
  separator: "\\"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn multi_character_separator_rejected() {
    let bad = r#"
version: 1
identity:
  separator: "::"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn default_config_matches_plain_constructor() {
    let cfg = ProbeConfig::default();
    cfg.validate().expect("default config is valid");

    let configured = TestMetrics::with_config(&cfg).unwrap();
    let plain = TestMetrics::new();
    for metrics in [&configured, &plain] {
        let a = metrics.make_counter("latency", &[("a", "v1")]);
        let b = metrics.make_counter("latency", &[("b", "v1")]);
        assert!(Arc::ptr_eq(&a, &b));
    }
}

#[test]
fn keys_and_values_mode_splits_instruments() {
    let cfg = config::load_from_str(
        r#"
version: 1
identity:
  mode: keys_and_values
  separator: "/"
"#,
    )
    .expect("must parse");
    let metrics = TestMetrics::with_config(&cfg).unwrap();

    let a = metrics.make_recorder("latency", &[("a", "v1")], false);
    let b = metrics.make_recorder("latency", &[("b", "v1")], false);
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(metrics.recorders().len(), 2);
}
