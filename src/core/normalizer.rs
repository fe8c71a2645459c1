use crate::domain::model::{InventoryRow, RawProduct};

pub const DEFAULT_NAME: &str = "No name";
pub const DEFAULT_QUANTITY: u64 = 0;

/// 將上游記錄轉成報表列。缺少或格式錯誤的欄位一律套用預設值，不會失敗。
pub fn normalize(raw: &RawProduct) -> InventoryRow {
    let name = raw
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_NAME);

    // 沒有 estoque 與 estoque 內沒有 quantidade 視為相同
    let quantity = raw
        .stock
        .as_ref()
        .and_then(|stock| stock.quantity)
        .unwrap_or(DEFAULT_QUANTITY);

    InventoryRow::new(name, quantity)
}

/// 保持上游順序，不排序、不過濾、不去重
pub fn normalize_all(raws: &[RawProduct]) -> Vec<InventoryRow> {
    raws.iter().map(normalize).collect()
}
