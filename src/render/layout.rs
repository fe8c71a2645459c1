//! 固定版面的分頁計算。
//!
//! 座標單位為公釐，原點在頁面左下角（與 PDF 相同）。這裡只決定每頁要畫什麼，
//! 實際輸出交給 [`crate::render::pdf`]。

use crate::domain::model::InventoryRow;

pub const REPORT_TITLE: &str = "Inventory Report";
pub const PRODUCT_HEADER: &str = "Product";
pub const QUANTITY_HEADER: &str = "Quantity";

const PT_TO_MM: f64 = 25.4 / 72.0;
// Helvetica 粗體的平均字寬（em 比例），只用於置中標題
const AVERAGE_GLYPH_WIDTH: f64 = 0.56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Black,
    DarkBlue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f64,
        y: f64,
        face: Face,
        size: u8,
        ink: Ink,
    },
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }

    pub fn rules(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { .. }))
            .count()
    }
}

/// 頁面幾何設定，預設為 A4
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub quantity_column_x: f64,
    pub title_offset: f64,
    pub first_header_offset: f64,
    pub continuation_header_offset: f64,
    pub header_to_first_row: f64,
    pub divider_drop: f64,
    pub line_height: f64,
    pub bottom_margin: f64,
    pub title_size: u8,
    pub header_size: u8,
    pub body_size: u8,
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 20.0,
            margin_right: 20.0,
            quantity_column_x: 130.0,
            title_offset: 20.0,
            first_header_offset: 40.0,
            continuation_header_offset: 30.0,
            header_to_first_row: 10.0,
            divider_drop: 2.0,
            line_height: 8.0,
            bottom_margin: 25.0,
            title_size: 18,
            header_size: 12,
            body_size: 11,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// 依序排版所有列。標題只出現在第一頁；每頁開頭都重畫欄位標題與分隔線。
pub fn paginate(rows: &[InventoryRow], geometry: &PageGeometry, title: &str) -> Vec<PageLayout> {
    let mut pages = Vec::new();
    let mut page = PageLayout::default();

    page.ops.push(DrawOp::Text {
        text: title.to_string(),
        x: centered_x(title, geometry.title_size, geometry.width),
        y: geometry.height - geometry.title_offset,
        face: Face::Bold,
        size: geometry.title_size,
        ink: Ink::DarkBlue,
    });
    let mut cursor = emit_header(
        &mut page,
        geometry,
        geometry.height - geometry.first_header_offset,
    );

    for row in rows {
        if cursor < geometry.bottom_margin {
            pages.push(std::mem::take(&mut page));
            cursor = emit_header(
                &mut page,
                geometry,
                geometry.height - geometry.continuation_header_offset,
            );
        }

        page.ops.push(body_text(row.name(), geometry.margin_left, cursor, geometry));
        page.ops.push(body_text(
            &row.quantity().to_string(),
            geometry.quantity_column_x,
            cursor,
            geometry,
        ));
        cursor -= geometry.line_height;
    }

    pages.push(page);
    pages
}

/// 每頁可容納的列數：(第一頁, 後續頁)
pub fn rows_per_page(geometry: &PageGeometry) -> (usize, usize) {
    let capacity = |header_offset: f64| {
        let mut cursor = geometry.height - header_offset - geometry.header_to_first_row;
        let mut count = 0;
        while cursor >= geometry.bottom_margin {
            count += 1;
            cursor -= geometry.line_height;
        }
        count
    };

    (
        capacity(geometry.first_header_offset),
        capacity(geometry.continuation_header_offset),
    )
}

fn emit_header(page: &mut PageLayout, geometry: &PageGeometry, y: f64) -> f64 {
    for (text, x) in [
        (PRODUCT_HEADER, geometry.margin_left),
        (QUANTITY_HEADER, geometry.quantity_column_x),
    ] {
        page.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            face: Face::Bold,
            size: geometry.header_size,
            ink: Ink::Black,
        });
    }
    page.ops.push(DrawOp::Rule {
        x1: geometry.margin_left,
        x2: geometry.width - geometry.margin_right,
        y: y - geometry.divider_drop,
    });

    y - geometry.header_to_first_row
}

fn body_text(text: &str, x: f64, y: f64, geometry: &PageGeometry) -> DrawOp {
    DrawOp::Text {
        text: text.to_string(),
        x,
        y,
        face: Face::Regular,
        size: geometry.body_size,
        ink: Ink::Black,
    }
}

fn centered_x(text: &str, size: u8, page_width: f64) -> f64 {
    let width = text.chars().count() as f64 * AVERAGE_GLYPH_WIDTH * f64::from(size) * PT_TO_MM;
    ((page_width - width) / 2.0).max(0.0)
}
