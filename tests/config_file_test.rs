use anyhow::Result;
use clap::Parser;
use inventory_report::utils::validation::Validate;
use inventory_report::{CliConfig, ServiceSettings};
use tempfile::TempDir;

/// 測試從 TOML 檔案載入並與命令列合併
#[tokio::test]
async fn test_settings_loaded_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("report.toml");

    std::env::set_var("INVENTORY_REPORT_IT_ORIGIN", "https://reports.example.com");
    let config_content = r#"
[server]
bind_addr = "0.0.0.0:9100"
allowed_origin = "${INVENTORY_REPORT_IT_ORIGIN}"

[upstream]
base_url = "https://erp.example.com"

[logging]
json = true
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let cli = CliConfig::parse_from([
        "inventory-report",
        "--config",
        config_path.to_str().unwrap(),
    ]);
    let settings = ServiceSettings::load(&cli)?;

    assert_eq!(settings.bind_addr, "0.0.0.0:9100");
    assert_eq!(settings.allowed_origin, "https://reports.example.com");
    assert_eq!(settings.upstream_url, "https://erp.example.com");
    assert!(settings.json_logs);
    assert!(settings.validate().is_ok());

    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let cli = CliConfig::parse_from([
        "inventory-report",
        "--config",
        missing.to_str().unwrap(),
    ]);

    let err = ServiceSettings::load(&cli).unwrap_err();
    assert!(matches!(err, inventory_report::ReportError::IoError(_)));
}

#[test]
fn test_invalid_origin_in_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report.toml");
    std::fs::write(
        &config_path,
        "[server]\nallowed_origin = \"localhost:5173/\"\n",
    )
    .unwrap();

    let cli = CliConfig::parse_from([
        "inventory-report",
        "--config",
        config_path.to_str().unwrap(),
    ]);
    let settings = ServiceSettings::load(&cli).unwrap();

    assert!(settings.validate().is_err());
}
