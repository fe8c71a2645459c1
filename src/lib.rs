pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod server;
pub mod utils;

pub use adapters::InventoryClient;
pub use config::{CliConfig, ServiceSettings};
pub use core::report::ReportEngine;
pub use domain::model::{InventoryRow, RawProduct, ReportDocument, ReportFormat};
pub use utils::error::{ReportError, Result};
