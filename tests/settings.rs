// Settings lifecycle tests: lazy construction, credential resolution,
// override precedence
use nashor::pipeline::DataPipeline;
use nashor::{Config, NashorError, Platform, Region, Settings};
use std::sync::Arc;

#[test]
fn literal_credential_builds_pipeline() {
    let config = Config::new("RGAPI-xxxx", "na");
    let settings = Settings::from_config(&config).unwrap();

    assert!(settings.pipeline().is_ok());
    assert_eq!(settings.default_region(), Region::Na);
    assert_eq!(settings.default_platform(), Platform::Na1);
}

#[test]
fn pipeline_is_cached_across_reads() {
    let config = Config::new("RGAPI-xxxx", "na");
    let settings = Settings::from_config(&config).unwrap();

    let first = settings.pipeline().unwrap();
    let second = settings.pipeline().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn set_pipeline_overrides_lazy_value() {
    let config = Config::new("RGAPI-xxxx", "na");
    let settings = Settings::from_config(&config).unwrap();

    let lazy = settings.pipeline().unwrap();
    let custom = Arc::new(DataPipeline::new(vec![], vec![]));
    settings.set_pipeline(Arc::clone(&custom));

    let current = settings.pipeline().unwrap();
    assert!(Arc::ptr_eq(&current, &custom));
    assert!(!Arc::ptr_eq(&current, &lazy));
}

#[test]
fn override_skips_credential_resolution() {
    // Credential names an unset variable; the override must make reads
    // succeed without ever consulting the environment.
    let config = Config::new("NASHOR_TEST_UNSET_OVERRIDE", "euw");
    let settings = Settings::from_config(&config).unwrap();

    let custom = Arc::new(DataPipeline::new(vec![], vec![]));
    settings.set_pipeline(Arc::clone(&custom));

    let current = settings.pipeline().unwrap();
    assert!(Arc::ptr_eq(&current, &custom));
}

#[test]
fn env_var_credential_resolves_once() {
    let var = "NASHOR_TEST_KEY_SET";
    unsafe { std::env::set_var(var, "RGAPI-from-env") };

    let config = Config::new(var, "euw");
    let settings = Settings::from_config(&config).unwrap();
    let first = settings.pipeline().unwrap();

    // Resolution already happened; removing the variable must not matter
    unsafe { std::env::remove_var(var) };
    let second = settings.pipeline().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn unset_env_var_fails_then_recovers() {
    let var = "NASHOR_TEST_KEY_LATE";
    unsafe { std::env::remove_var(var) };

    let config = Config::new(var, "na");
    let settings = Settings::from_config(&config).unwrap();

    match settings.pipeline() {
        Err(NashorError::CredentialResolution(name)) => assert_eq!(name, var),
        Err(other) => panic!("expected CredentialResolution, got {other:?}"),
        Ok(_) => panic!("expected CredentialResolution, got a pipeline"),
    }

    // Failure cached nothing; a later read retries the lookup
    unsafe { std::env::set_var(var, "RGAPI-late") };
    assert!(settings.pipeline().is_ok());
    unsafe { std::env::remove_var(var) };
}

#[test]
fn region_parsing_is_case_insensitive() {
    let settings = Settings::from_config(&Config::new("RGAPI-x", "euw")).unwrap();
    assert_eq!(settings.default_region(), Region::Euw);
    assert_eq!(settings.default_platform(), Platform::Euw1);
}

#[test]
fn unknown_region_fails_construction() {
    match Settings::from_config(&Config::new("RGAPI-x", "moon")) {
        Err(NashorError::InvalidConfig(msg)) => assert!(msg.contains("MOON")),
        Err(other) => panic!("expected InvalidConfig, got {other:?}"),
        Ok(_) => panic!("expected InvalidConfig, got a store"),
    }
}

#[test]
fn set_region_replaces_default() {
    let settings = Settings::from_config(&Config::new("RGAPI-x", "na")).unwrap();
    settings.set_region(Region::Kr);
    assert_eq!(settings.default_region(), Region::Kr);
    assert_eq!(settings.default_platform(), Platform::Kr);
}

#[test]
fn logging_levels_are_validated() {
    let mut config = Config::new("RGAPI-x", "na");
    config
        .logging
        .insert("default".to_string(), "info".to_string());
    config.logging.insert("core".to_string(), "debug".to_string());
    assert!(Settings::from_config(&config).is_ok());

    let mut bad = Config::new("RGAPI-x", "na");
    bad.logging
        .insert("default".to_string(), "not==valid".to_string());
    assert!(matches!(
        Settings::from_config(&bad),
        Err(NashorError::InvalidConfig(_))
    ));
}
