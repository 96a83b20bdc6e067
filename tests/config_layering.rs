use std::fs;

use alpha_fade::core::config::{DemoConfig, FadeConfig, MissingTargetPolicy};

#[test]
fn defaults_are_sane() {
    let cfg = DemoConfig::default();
    assert!(cfg.fade.default_duration > 0.0);
    assert_eq!(cfg.fade.missing_target(), MissingTargetPolicy::Cancel);
    assert!(cfg.validate().is_empty(), "defaults should not warn: {:?}", cfg.validate());
}

#[test]
fn local_file_overrides_only_what_it_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("fade.ron");
    let local = dir.path().join("fade.local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 800.0, height: 600.0, title: "Base", autoClose: 0.0),
            fade: (default_duration: 1.25, missing_target_mode: 0, log_transitions: false),
        )"#,
    )
    .expect("write base");
    fs::write(&local, r#"(fade: (missing_target_mode: 1))"#).expect("write local");

    let (cfg, used, errors) = DemoConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.fade.default_duration, 1.25);
    assert_eq!(cfg.fade.missing_target(), MissingTargetPolicy::KeepRetrying);
}

#[test]
fn missing_and_broken_files_fall_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "( fade: ( default_duration: ").expect("write broken");
    let absent = dir.path().join("absent.ron");

    let (cfg, used, errors) = DemoConfig::load_layered([&absent, &broken]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("read error"));
    assert!(errors[1].contains("parse error"));
    assert_eq!(cfg, DemoConfig::default());

    let (fallback, err) = DemoConfig::load_or_default(&absent);
    assert!(err.is_some());
    assert_eq!(fallback.fade, FadeConfig::default());
}

#[test]
fn shipped_config_parses() {
    let cfg = DemoConfig::load_from_file("assets/config/fade.ron").expect("shipped config parses");
    assert!(cfg.validate().is_empty(), "shipped config warns: {:?}", cfg.validate());
}
