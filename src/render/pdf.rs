use crate::domain::model::InventoryRow;
use crate::render::layout::{self, DrawOp, Face, Ink, PageGeometry, PageLayout};
use crate::utils::error::{ReportError, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;

const LAYER_NAME: &str = "Layer 1";

/// 依 [`layout::paginate`] 的結果逐頁輸出 PDF
pub fn render_pdf(rows: &[InventoryRow], geometry: &PageGeometry, title: &str) -> Result<Vec<u8>> {
    let pages = layout::paginate(rows, geometry, title);
    let (first_capacity, continuation_capacity) = layout::rows_per_page(geometry);
    tracing::debug!(
        "PDF layout: {} rows over {} pages ({} rows on page 1, {} per continuation page)",
        rows.len(),
        pages.len(),
        first_capacity,
        continuation_capacity
    );

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(geometry.width), Mm(geometry.height), LAYER_NAME);
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(geometry.width), Mm(geometry.height), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, page, &regular, &bold);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer).map_err(render_error)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| render_error(e.error()))?;

    tracing::debug!("PDF rendered: {} bytes", bytes.len());
    Ok(bytes)
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &PageLayout,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for op in &page.ops {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                face,
                size,
                ink,
            } => {
                let font = match face {
                    Face::Regular => regular,
                    Face::Bold => bold,
                };
                layer.set_fill_color(color(*ink));
                layer.use_text(text.clone(), (*size).into(), Mm(*x), Mm(*y), font);
            }
            DrawOp::Rule { x1, x2, y } => {
                layer.set_outline_color(color(Ink::Black));
                layer.add_shape(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(*y)), false),
                        (Point::new(Mm(*x2), Mm(*y)), false),
                    ],
                    is_closed: false,
                    has_fill: false,
                    has_stroke: true,
                    is_clipping_path: false,
                });
            }
        }
    }
}

fn color(ink: Ink) -> Color {
    match ink {
        Ink::Black => Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        // reportlab 的 darkblue (#00008B)
        Ink::DarkBlue => Color::Rgb(Rgb::new(0.0, 0.0, 0.545, None)),
    }
}

fn render_error(e: impl std::fmt::Debug) -> ReportError {
    ReportError::RenderError {
        message: format!("PDF generation failed: {:?}", e),
    }
}
