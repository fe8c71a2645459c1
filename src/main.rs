use clap::Parser;
use inventory_report::utils::{logger, validation::Validate};
use inventory_report::{server, CliConfig, ServiceSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match ServiceSettings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            // 日誌尚未初始化，直接輸出到 stderr
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(cli.verbose, settings.json_logs);

    tracing::info!("Starting inventory-report service");
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = server::serve(&settings).await {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        // 例如監聽位址無法綁定或 CORS 來源無法轉成標頭
        if e.is_config_error() {
            std::process::exit(e.exit_code());
        }
        return Err(e.into());
    }

    Ok(())
}
