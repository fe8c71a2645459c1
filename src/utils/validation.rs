use crate::utils::error::{ReportError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// CORS 來源只能是 scheme://host[:port]，不可帶路徑、查詢字串或片段
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    validate_non_empty_string(field_name, origin)?;
    validate_url(field_name, origin)?;

    let invalid = |reason: &str| ReportError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: origin.to_string(),
        reason: reason.to_string(),
    };

    // Url::parse 會把 "http://host" 正規化為路徑 "/"，因此尾端斜線要另外檢查
    if origin.ends_with('/') {
        return Err(invalid("Origin must not end with a trailing slash"));
    }

    let url = Url::parse(origin).map_err(|e| invalid(&format!("Invalid URL format: {}", e)))?;
    if url.path() != "/" {
        return Err(invalid("Origin must not contain a path"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("Origin must not contain a query or fragment"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("Origin must not contain credentials"));
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
