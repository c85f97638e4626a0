use std::time::{SystemTime, UNIX_EPOCH};

use geofind_core::config::{self, Options};

fn unique_path(stem: &str) -> std::path::PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be valid")
        .as_nanos();
    std::env::temp_dir().join(format!("geofind-{stem}-{unique}.toml"))
}

#[test]
fn accepts_default_options() {
    let options = Options::default();
    assert_eq!(options.limit, 5);
    assert_eq!(options.debounce_ms, 200);
    assert!(options.endpoint.contains("geocode.maps.co"));
    assert!(config::validate(&options).is_ok());
}

#[test]
fn rejects_limit_out_of_range() {
    let options = Options {
        limit: 50,
        ..Default::default()
    };
    assert!(config::validate(&options).is_err());
}

#[test]
fn load_without_a_file_yields_defaults() {
    let path = unique_path("missing");
    let options = config::load(Some(&path)).expect("missing file should default");
    assert_eq!(options, Options::default());
}

#[test]
fn options_round_trip_through_toml() {
    let path = unique_path("roundtrip");
    let options = Options {
        language: Some("de-DE,lv".to_string()),
        placeholder: Some("Wohin?".to_string()),
        collapsed: true,
        clear_and_blur_on_esc: true,
        clear_on_blur: true,
        types: Some("city".to_string()),
        limit: 3,
        debounce_ms: 350,
        api_key: "k1".to_string(),
        endpoint: "https://geocode.example".to_string(),
    };

    config::save(&options, Some(&path)).expect("options should save");
    let loaded = config::load(Some(&path)).expect("options should load");
    assert_eq!(loaded, options);

    std::fs::remove_file(&path).expect("temp config should be removed");
}

#[test]
fn load_rejects_an_invalid_file() {
    let path = unique_path("invalid");
    std::fs::write(&path, "limit = 99\n").expect("temp config should be written");

    let error = config::load(Some(&path)).expect_err("out-of-range limit should fail");
    assert!(error.to_string().contains("limit"));

    std::fs::remove_file(&path).expect("temp config should be removed");
}

#[test]
fn save_refuses_invalid_options() {
    let path = unique_path("refused");
    let options = Options {
        debounce_ms: 60_000,
        ..Default::default()
    };
    assert!(config::save(&options, Some(&path)).is_err());
    assert!(!path.exists());
}
