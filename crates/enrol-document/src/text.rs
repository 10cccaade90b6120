//! Plain-text preview
//!
//! Approximates the page on a terminal: text sharing a baseline shares a
//! row, horizontal position maps to columns at two millimetres per column,
//! and rules become dashes. Pages are separated by a form feed.

use crate::layout::{Align, Document, DrawOp, Page};
use crate::renderer::{RenderError, Renderer};

const MM_PER_COLUMN: f64 = 2.0;

/// Renders documents as plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a text renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render to a string
    ///
    /// # Errors
    /// Returns error if the document has no pages
    pub fn render_string(&self, document: &Document) -> Result<String, RenderError> {
        if document.pages.is_empty() {
            return Err(RenderError::EmptyDocument);
        }
        let pages: Vec<String> = document.pages.iter().map(render_page).collect();
        Ok(pages.join("\u{c}\n"))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn column(mm: f64) -> usize {
    (mm.max(0.0) / MM_PER_COLUMN).round() as usize
}

fn render_page(page: &Page) -> String {
    // (baseline, column, text)
    let mut cells: Vec<(f64, usize, String)> = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x, y, text, align, ..
            } => {
                let start = match align {
                    Align::Left => column(*x),
                    Align::Center => column(*x).saturating_sub(text.chars().count() / 2),
                };
                cells.push((*y, start, text.clone()));
            }
            DrawOp::Line { from, to, .. } => {
                let (left, right) = (from.0.min(to.0), from.0.max(to.0));
                let len = column(right).saturating_sub(column(left)).max(1);
                cells.push((from.1, column(left), "-".repeat(len)));
            }
        }
    }
    cells.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut rows: Vec<String> = Vec::new();
    let mut current_y: Option<f64> = None;
    for (y, col, text) in cells {
        if current_y != Some(y) {
            rows.push(String::new());
            current_y = Some(y);
        }
        if let Some(row) = rows.last_mut() {
            let width = row.chars().count();
            if width < col {
                row.push_str(&" ".repeat(col - width));
            } else if width > 0 {
                row.push(' ');
            }
            row.push_str(&text);
        }
    }

    let mut out = rows
        .iter()
        .map(|r| r.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

impl Renderer for TextRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        self.render_string(document).map(String::into_bytes)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn media_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}
