use todoview::config::{ApiConfig, Config, Credential};
use todoview::constants::DEFAULT_SYNC_ENDPOINT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.backend_type, "todoist");
    assert_eq!(config.api.endpoint, DEFAULT_SYNC_ENDPOINT);
    assert_eq!(config.api.api_token_env, "TODOIST_API_TOKEN");
    assert_eq!(config.ui.title, "todos");
    assert_eq!(config.ui.list_height, 14);
    assert_eq!(config.ui.default_width, 20);
    assert!(!config.ui.wrap_navigation);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // List too short to show a single row should fail
    config.ui.list_height = 5;
    assert!(config.validate().is_err());

    config.ui.list_height = 6;
    assert!(config.validate().is_ok());

    // Reset and test a non-http endpoint
    config.api.endpoint = "ftp://example.com/sync".to_string();
    assert!(config.validate().is_err());

    config.api.endpoint = "http://127.0.0.1:8080/sync".to_string();
    assert!(config.validate().is_ok());

    config.api.backend_type = "caldav".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_logging_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("title = \"todos\""));
    assert!(toml_str.contains("list_height = 14"));
    assert!(toml_str.contains("api_token_env = \"TODOIST_API_TOKEN\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
list_height = 20

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.list_height, 20);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.title, "todos");
    assert_eq!(config.ui.default_width, 20);
    assert_eq!(config.api.endpoint, DEFAULT_SYNC_ENDPOINT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.endpoint, default_config.api.endpoint);
    assert_eq!(config.ui.list_height, default_config.ui.list_height);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_explicit_file_validates() {
    let dir = std::env::temp_dir().join("todoview_test_load");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.toml");
    std::fs::write(&good, "[api]\nendpoint = \"http://localhost:9999/sync\"\n").unwrap();
    let config = Config::load(Some(good.as_path())).unwrap();
    assert_eq!(config.api.endpoint, "http://localhost:9999/sync");

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "[ui]\nlist_height = 2\n").unwrap();
    assert!(Config::load(Some(bad.as_path())).is_err());

    assert!(Config::load(Some(dir.join("missing.toml").as_path())).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("todoview_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# todoview Configuration File"));
    assert!(content.contains("title = \"todos\""));

    // The generated file loads back as a valid config
    assert!(Config::load_from_file(&config_path).is_ok());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_credential_from_env() {
    let api = ApiConfig {
        api_token_env: "TODOVIEW_TEST_TOKEN_SET".to_string(),
        ..ApiConfig::default()
    };
    std::env::set_var("TODOVIEW_TEST_TOKEN_SET", "secret-token");

    let credential = Credential::from_env(&api);
    assert_eq!(credential.token(), "secret-token");
    assert!(!format!("{:?}", credential).contains("secret-token"));
}

#[test]
fn test_missing_credential_is_empty() {
    let api = ApiConfig {
        api_token_env: "TODOVIEW_TEST_TOKEN_NEVER_SET".to_string(),
        ..ApiConfig::default()
    };

    let credential = Credential::from_env(&api);
    assert!(credential.is_empty());
}

#[test]
fn test_credential_env_var_is_configurable() {
    let config: Config = toml::from_str("[api]\napi_token_env = \"API_TOKEN\"\n").unwrap();
    assert_eq!(config.api.api_token_env, "API_TOKEN");
    assert!(config.validate().is_ok());
}
