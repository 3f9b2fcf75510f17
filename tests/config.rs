// Configuration parsing tests
use nashor::Config;

#[test]
fn parses_full_mapping() {
    let raw = r#"{
        "credential": "RGAPI-xxxx",
        "region": "na",
        "logging": { "default": "info", "core": "debug" }
    }"#;
    let config: Config = serde_json::from_str(raw).unwrap();
    assert_eq!(config.credential, "RGAPI-xxxx");
    assert_eq!(config.region, "na");
    assert_eq!(config.logging.get("default").unwrap(), "info");
    assert_eq!(config.logging.get("core").unwrap(), "debug");
}

#[test]
fn logging_is_optional() {
    let raw = r#"{ "credential": "MY_KEY_VAR", "region": "euw" }"#;
    let config: Config = serde_json::from_str(raw).unwrap();
    assert!(config.logging.is_empty());
}

#[test]
fn missing_required_field_fails() {
    let raw = r#"{ "credential": "RGAPI-xxxx" }"#;
    assert!(serde_json::from_str::<Config>(raw).is_err());
}

#[test]
fn loads_from_json_file() {
    let path = std::env::temp_dir().join(format!("nashor_config_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "credential": "RGAPI-xxxx", "region": "kr" }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.region, "kr");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_fails() {
    assert!(Config::from_file("/does/not/exist/config.json").is_err());
}
