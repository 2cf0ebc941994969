//! Renderizador de reportes PDF
//!
//! Genera un documento de una sola página (600×800) con fuentes base
//! Helvetica / Helvetica-Bold: título en negrita, subtítulo con fecha,
//! fila de encabezados y hasta 15 filas de datos a ancho de columna fijo.
//! Sin paginación ni auto-ajuste de columnas: es un reporte plano.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;

/// Dimensiones y layout fijos de la página
const PAGE_WIDTH: f32 = 600.0;
const PAGE_HEIGHT: f32 = 800.0;
const MARGIN_X: f32 = 40.0;
const COLUMN_WIDTH: f32 = 120.0;
const ROW_HEIGHT: f32 = 18.0;

/// Máximo de filas de datos por reporte
pub const MAX_ROWS: usize = 15;

const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);
const GREY: (f32, f32, f32) = (0.45, 0.45, 0.45);
const NAVY: (f32, f32, f32) = (0.10, 0.10, 0.45);

/// Errores de la capa de síntesis de PDF
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Error generando PDF: {0}")]
    Render(#[from] lopdf::Error),
}

/// Contenido tabular de un reporte de una página
#[derive(Debug, Clone)]
pub struct TableDocument {
    pub title: String,
    pub subtitle: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: String,
}

/// Renderizar el documento a bytes PDF
pub fn render_table(table: &TableDocument) -> Result<Vec<u8>, PdfError> {
    let mut ops: Vec<Operation> = Vec::new();

    // Título y subtítulo
    draw_text(&mut ops, "F2", 18.0, MARGIN_X, 760.0, BLACK, &table.title);
    draw_text(&mut ops, "F1", 11.0, MARGIN_X, 735.0, GREY, &table.subtitle);

    // Fila de encabezados
    for (i, column) in table.columns.iter().enumerate() {
        let x = MARGIN_X + COLUMN_WIDTH * i as f32;
        draw_text(&mut ops, "F2", 10.0, x, 700.0, NAVY, column);
    }

    // Filas de datos, truncadas a MAX_ROWS
    for (row_index, row) in table.rows.iter().take(MAX_ROWS).enumerate() {
        let y = 682.0 - ROW_HEIGHT * row_index as f32;
        for (col_index, value) in row.iter().enumerate() {
            let x = MARGIN_X + COLUMN_WIDTH * col_index as f32;
            draw_text(&mut ops, "F1", 9.0, x, y, BLACK, value);
        }
    }

    // Pie con la fecha de generación
    draw_text(&mut ops, "F1", 9.0, MARGIN_X, 40.0, GREY, &table.footer);

    build_document(ops)
}

/// Emitir las operaciones de texto de una celda
fn draw_text(
    ops: &mut Vec<Operation>,
    font: &str,
    size: f32,
    x: f32,
    y: f32,
    color: (f32, f32, f32),
    text: &str,
) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new(
        "rg",
        vec![color.0.into(), color.1.into(), color.2.into()],
    ));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(text))]));
    ops.push(Operation::new("ET", vec![]));
}

/// Armar el documento de una página con las fuentes base embebidas
fn build_document(ops: Vec<Operation>) -> Result<Vec<u8>, PdfError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let content = Content { operations: ops };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            PAGE_WIDTH.into(),
            PAGE_HEIGHT.into(),
        ],
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(lopdf::Error::from)?;
    Ok(buffer)
}

/// Codificar texto a WinAnsi (cp1252). Las fuentes base no llevan
/// embedding de glifos, así que los caracteres fuera de tabla caen a '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            'á' => 0xE1,
            'é' => 0xE9,
            'í' => 0xED,
            'ó' => 0xF3,
            'ú' => 0xFA,
            'ñ' => 0xF1,
            'ü' => 0xFC,
            'Á' => 0xC1,
            'É' => 0xC9,
            'Í' => 0xCD,
            'Ó' => 0xD3,
            'Ú' => 0xDA,
            'Ñ' => 0xD1,
            'Ü' => 0xDC,
            '¿' => 0xBF,
            '¡' => 0xA1,
            '°' => 0xB0,
            c if c.is_ascii() => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table(row_count: usize) -> TableDocument {
        TableDocument {
            title: "Reporte de Vehiculos".to_string(),
            subtitle: "Generado el 2026-08-28".to_string(),
            columns: vec!["Placa".to_string(), "Estado".to_string()],
            rows: (0..row_count)
                .map(|i| vec![format!("ROW{}", i), "disponible".to_string()])
                .collect(),
            footer: "Fecha de generacion: 2026-08-28".to_string(),
        }
    }

    #[test]
    fn test_render_single_page() {
        let bytes = render_table(&sample_table(3)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_render_contains_title_and_rows() {
        let bytes = render_table(&sample_table(3)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Reporte de Vehiculos"));
        assert!(text.contains("Placa"));
        assert!(text.contains("ROW0"));
        assert!(text.contains("ROW2"));
    }

    #[test]
    fn test_render_truncates_to_max_rows() {
        let bytes = render_table(&sample_table(20)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("ROW14"));
        assert!(!text.contains("ROW15"));
    }

    #[test]
    fn test_render_empty_rows_still_valid() {
        let bytes = render_table(&sample_table(0)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
