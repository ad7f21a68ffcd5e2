use shop_config::AppConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_load_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        catalog_path = "/srv/shop/catalog.toml"
        initial_view = "store"
        fetch_delay_ms = 0
        tick_rate_ms = 50
        log_level = "trace"
        "#
    )
    .unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(
        config,
        AppConfig {
            catalog_path: Some(PathBuf::from("/srv/shop/catalog.toml")),
            initial_view: "store".to_string(),
            fetch_delay_ms: 0,
            tick_rate_ms: 50,
            log_level: "trace".to_string(),
        }
    );
}

#[test]
fn test_missing_file_names_the_path() {
    let err = AppConfig::load_from(std::path::Path::new("/nonexistent/shop-tui.toml")).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/shop-tui.toml"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = \"fast\"").unwrap();
    let err = AppConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
}
