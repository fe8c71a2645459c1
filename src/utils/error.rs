use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Upstream inventory service unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    /// 回傳給呼叫端的固定訊息，不揭露內部細節
    pub fn user_friendly_message(&self) -> &'static str {
        match self {
            ReportError::UpstreamUnavailable { .. } => "Failed to fetch products",
            _ => "Failed to generate report",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::UpstreamUnavailable { .. } => {
                "Check that the inventory service is reachable and responding with 2xx"
            }
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. } => {
                "Review the command line flags, environment variables and config file"
            }
            ReportError::IoError(_) => "Check file permissions and available disk space",
            _ => "Inspect the logs for the failing record set",
        }
    }

    /// 設定錯誤與執行期錯誤使用不同的結束碼
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ReportError::ConfigError { .. } | ReportError::InvalidConfigValueError { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
