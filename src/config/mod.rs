pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_origin, validate_socket_addr, validate_url, Validate};
use std::net::SocketAddr;

pub use cli::CliConfig;
pub use toml_config::ReportConfig;

/// 合併命令列與設定檔後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub upstream_url: String,
    pub bind_addr: String,
    pub allowed_origin: String,
    pub json_logs: bool,
}

impl ServiceSettings {
    /// 讀取 `--config` 指定的檔案（若有），檔案中的值優先
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &CliConfig, file: ReportConfig) -> Self {
        let server = file.server.unwrap_or_default();
        let upstream = file.upstream.unwrap_or_default();
        let logging = file.logging.unwrap_or_default();

        Self {
            upstream_url: upstream
                .base_url
                .unwrap_or_else(|| cli.upstream_url.clone()),
            bind_addr: server.bind_addr.unwrap_or_else(|| cli.bind_addr.clone()),
            allowed_origin: server
                .allowed_origin
                .unwrap_or_else(|| cli.allowed_origin.clone()),
            json_logs: logging.json.unwrap_or(cli.json_logs),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind_addr", self.bind_addr())
    }
}

impl Validate for ServiceSettings {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.base_url", &self.upstream_url)?;
        self.socket_addr()?;
        validate_origin("server.allowed_origin", &self.allowed_origin)?;
        Ok(())
    }
}

impl ConfigProvider for ServiceSettings {
    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}
