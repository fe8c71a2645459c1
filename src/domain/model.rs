use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 上游回傳的單筆商品，欄位皆為可選；任何 JSON 值都能轉成 RawProduct
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawProduct {
    pub name: Option<String>,
    pub stock: Option<RawStock>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStock {
    pub quantity: Option<u64>,
}

impl From<Value> for RawProduct {
    fn from(value: Value) -> Self {
        let Value::Object(obj) = value else {
            return RawProduct::default();
        };

        let name = obj.get("nome").and_then(Value::as_str).map(str::to_string);
        let stock = obj.get("estoque").and_then(|estoque| {
            estoque.as_object().map(|stock| RawStock {
                quantity: stock.get("quantidade").and_then(as_quantity),
            })
        });

        RawProduct { name, stock }
    }
}

fn as_quantity(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    // 部分上游會送 5.0 這類整數浮點
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
        .map(|f| f as u64)
}

/// 正規化後的報表列，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    name: String,
    quantity: u64,
}

impl InventoryRow {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Spreadsheet,
    Pdf,
}

impl ReportFormat {
    pub fn media_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }

    pub fn filename(&self) -> Option<&'static str> {
        match self {
            ReportFormat::Json => None,
            ReportFormat::Spreadsheet => Some("relatorio_estoque.xlsx"),
            ReportFormat::Pdf => Some("relatorio_estoque.pdf"),
        }
    }
}

/// 已完整產生於記憶體的報表
#[derive(Debug, Clone)]
pub struct ReportDocument {
    format: ReportFormat,
    bytes: Vec<u8>,
}

impl ReportDocument {
    pub fn new(format: ReportFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }

    pub fn filename(&self) -> Option<&'static str> {
        self.format.filename()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
