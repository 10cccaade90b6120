//! PDF serialization
//!
//! Writes a [`Document`] as an uncompressed PDF 1.4 file using the base-14
//! Helvetica faces with WinAnsi encoding, so no fonts are embedded.
//!
//! Object layout: `1` catalog, `2` page tree, `3..=5` fonts, `6` info,
//! then a page object and its content stream for every page.

use crate::layout::{Align, Document, DocumentMetadata, DrawOp, Font, Page, MM_PER_PT};
use crate::metrics::encoded_width_pt;
use crate::renderer::{RenderError, Renderer};

const FONT_OBJECTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
];
const FIRST_PAGE_OBJECT: usize = 7;

/// Encode text as WinAnsi bytes
///
/// Latin-1 maps directly; the typographic punctuation WinAnsi carries in
/// `0x80..=0x9F` is mapped; anything else becomes `?`. Control characters
/// become spaces.
#[must_use]
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            c if c.is_control() => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

/// Escape bytes for a PDF literal string (without the parentheses)
fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(char::from(b));
            }
            0x20..=0x7E => out.push(char::from(b)),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
    }
    out
}

fn literal(text: &str) -> String {
    format!("({})", escape_literal(&encode_win_ansi(text)))
}

fn font_resource(font: Font) -> &'static str {
    match font {
        Font::Regular => "F1",
        Font::Bold => "F2",
        Font::Italic => "F3",
    }
}

#[inline]
fn pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

/// Build the content stream of one page
fn content_stream(page: &Page, page_index: usize) -> Result<String, RenderError> {
    let height = pt(page.size.height);
    let mut out = String::new();

    for (op_index, op) in page.ops.iter().enumerate() {
        if !op.is_finite() {
            return Err(RenderError::InvalidCoordinate {
                page: page_index,
                op: op_index,
            });
        }
        match op {
            DrawOp::Text {
                x,
                y,
                text,
                font,
                size,
                color,
                align,
            } => {
                let bytes = encode_win_ansi(text);
                let mut x = pt(*x);
                if *align == Align::Center {
                    x -= encoded_width_pt(*font, *size, &bytes) / 2.0;
                }
                let (r, g, b) = color.unit();
                out.push_str(&format!(
                    "BT\n/{} {size:.2} Tf\n{r:.3} {g:.3} {b:.3} rg\n{x:.2} {:.2} Td\n({}) Tj\nET\n",
                    font_resource(*font),
                    height - pt(*y),
                    escape_literal(&bytes),
                ));
            }
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                let (r, g, b) = color.unit();
                out.push_str(&format!(
                    "{r:.3} {g:.3} {b:.3} RG\n{:.2} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\n",
                    pt(*width),
                    pt(from.0),
                    height - pt(from.1),
                    pt(to.0),
                    height - pt(to.1),
                ));
            }
        }
    }
    Ok(out)
}

fn info_dictionary(metadata: &DocumentMetadata) -> String {
    let mut dict = String::from("<< /Producer (enrol)");
    for (key, value) in [
        ("Title", &metadata.title),
        ("Author", &metadata.author),
        ("Subject", &metadata.subject),
    ] {
        if !value.is_empty() {
            dict.push_str(&format!(" /{key} {}", literal(value)));
        }
    }
    dict.push_str(" >>");
    dict
}

/// Serializes documents to PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Create a PDF renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        if document.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }

        let page_ids: Vec<usize> = (0..document.pages.len())
            .map(|i| FIRST_PAGE_OBJECT + 2 * i)
            .collect();

        let mut objects: Vec<Vec<u8>> = Vec::with_capacity(6 + 2 * page_ids.len());
        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

        let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
        objects.push(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_ids.len()
            )
            .into_bytes(),
        );

        for (_, base) in FONT_OBJECTS {
            objects.push(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{base} /Encoding /WinAnsiEncoding >>"
                )
                .into_bytes(),
            );
        }
        objects.push(info_dictionary(&document.metadata).into_bytes());

        let font_refs: Vec<String> = FONT_OBJECTS
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("/{name} {} 0 R", 3 + i))
            .collect();

        for (index, (page, id)) in document.pages.iter().zip(&page_ids).enumerate() {
            let content = content_stream(page, index)?;
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << {} >> >> /Contents {} 0 R >>",
                    pt(page.size.width),
                    pt(page.size.height),
                    font_refs.join(" "),
                    id + 1,
                )
                .into_bytes(),
            );
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(content.as_bytes());
            stream.extend_from_slice(b"endstream");
            objects.push(stream);
        }

        let mut out: Vec<u8> = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in &offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        out.extend_from_slice(xref.as_bytes());

        tracing::debug!(pages = document.pages.len(), bytes = out.len(), "pdf rendered");
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn media_type(&self) -> &'static str {
        "application/pdf"
    }
}
