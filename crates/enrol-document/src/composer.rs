//! Cursor-driven page composition
//!
//! [`LayoutComposer`] keeps a vertical cursor and the current text style.
//! Flowing writes go to the cursor and break to a fresh page when the
//! baseline would pass the bottom margin. Absolute writes go where they are
//! told. A footer, when set, is stamped on every page at finish.

use crate::layout::{Align, Document, DocumentMetadata, DrawOp, Font, Page, PageSize, Rgb};

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Where flowing text starts on a fresh page
    pub top: f64,
    /// Distance of the lowest baseline from the bottom edge
    pub bottom: f64,
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            bottom: 20.0,
            left: 20.0,
            right: 20.0,
        }
    }
}

/// Text repeated at the foot of each page
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    /// Content, centred
    pub text: String,
    /// Size in points
    pub size: f64,
    /// Fill colour
    pub color: Rgb,
    /// Baseline distance from the bottom edge
    pub offset: f64,
}

/// Current text style
#[derive(Debug, Clone, Copy, PartialEq)]
struct Style {
    font: Font,
    size: f64,
    color: Rgb,
}

/// Builds a [`Document`] page by page
#[derive(Debug, Clone)]
pub struct LayoutComposer {
    size: PageSize,
    margins: Margins,
    footer: Option<Footer>,
    style: Style,
    pages: Vec<Page>,
    current: Page,
    cursor: f64,
}

impl LayoutComposer {
    /// Start a document with one empty page
    #[must_use]
    pub fn new(size: PageSize) -> Self {
        let margins = Margins::default();
        Self {
            size,
            margins,
            footer: None,
            style: Style {
                font: Font::Regular,
                size: 12.0,
                color: Rgb::BLACK,
            },
            pages: Vec::new(),
            current: Page::new(size),
            cursor: margins.top,
        }
    }

    /// With custom margins
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self.cursor = self.cursor.max(margins.top);
        self
    }

    /// With a footer on every page
    #[must_use]
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Page size
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.size
    }

    /// Lowest baseline a flowing write may use
    #[inline]
    #[must_use]
    pub fn bottom_limit(&self) -> f64 {
        self.size.height - self.margins.bottom
    }

    /// Current cursor position
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Zero-based index of the page being written
    #[inline]
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.pages.len()
    }

    /// Set the typeface
    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.style.font = font;
        self
    }

    /// Set the font size in points
    pub fn set_font_size(&mut self, size: f64) -> &mut Self {
        self.style.size = size;
        self
    }

    /// Set the text colour
    pub fn set_text_color(&mut self, color: Rgb) -> &mut Self {
        self.style.color = color;
        self
    }

    /// Move the cursor to an absolute position on the current page
    pub fn move_to(&mut self, y: f64) -> &mut Self {
        self.cursor = y;
        self
    }

    /// Move the cursor down
    pub fn advance(&mut self, dy: f64) -> &mut Self {
        self.cursor += dy;
        self
    }

    /// Place text at an absolute position with the current style
    pub fn text_at(&mut self, x: f64, y: f64, text: impl Into<String>, align: Align) -> &mut Self {
        let Style { font, size, color } = self.style;
        self.current.ops.push(DrawOp::Text {
            x,
            y,
            text: text.into(),
            font,
            size,
            color,
            align,
        });
        self
    }

    /// Draw a straight line
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgb) -> &mut Self {
        self.current.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
        self
    }

    /// Break to a new page when the cursor is past the bottom limit
    ///
    /// Returns whether a break happened.
    pub fn ensure_room(&mut self) -> bool {
        if self.cursor <= self.bottom_limit() {
            return false;
        }
        self.new_page();
        true
    }

    /// Write text at the cursor, breaking pages as needed
    pub fn write(&mut self, x: f64, text: impl Into<String>) -> &mut Self {
        self.ensure_room();
        let y = self.cursor;
        self.text_at(x, y, text, Align::Left)
    }

    /// Write a bold label and a regular value on the cursor line
    pub fn write_pair(
        &mut self,
        label_x: f64,
        label: impl Into<String>,
        value_x: f64,
        value: impl Into<String>,
    ) -> &mut Self {
        self.ensure_room();
        let y = self.cursor;
        let font = self.style.font;
        self.set_font(Font::Bold);
        self.text_at(label_x, y, label, Align::Left);
        self.set_font(Font::Regular);
        self.text_at(value_x, y, value, Align::Left);
        self.set_font(font)
    }

    /// Close the current page and start another at the top margin
    pub fn new_page(&mut self) -> &mut Self {
        let finished = std::mem::replace(&mut self.current, Page::new(self.size));
        self.pages.push(finished);
        self.cursor = self.margins.top;
        tracing::debug!(page = self.pages.len() + 1, "page break");
        self
    }

    /// Finish composition
    #[must_use]
    pub fn finish(mut self, metadata: DocumentMetadata) -> Document {
        self.pages.push(self.current);

        if let Some(footer) = &self.footer {
            for page in &mut self.pages {
                page.ops.push(DrawOp::Text {
                    x: self.size.center_x(),
                    y: self.size.height - footer.offset,
                    text: footer.text.clone(),
                    font: Font::Regular,
                    size: footer.size,
                    color: footer.color,
                    align: Align::Center,
                });
            }
        }

        Document {
            metadata,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_at_cursor() {
        let mut composer = LayoutComposer::new(PageSize::A4);
        composer.move_to(100.0).write(20.0, "hello");
        let doc = composer.finish(DocumentMetadata::default());

        assert_eq!(doc.page_count(), 1);
        assert!(matches!(
            &doc.pages[0].ops[0],
            DrawOp::Text { y, text, .. } if *y == 100.0 && text == "hello"
        ));
    }

    #[test]
    fn breaks_past_bottom_limit() {
        let mut composer = LayoutComposer::new(PageSize::A4);
        composer.move_to(277.0).write(20.0, "last on page");
        assert_eq!(composer.page_index(), 0);

        composer.advance(10.0).write(20.0, "first on next");
        assert_eq!(composer.page_index(), 1);
        assert_eq!(composer.cursor(), 20.0);
    }

    #[test]
    fn pair_restores_font() {
        let mut composer = LayoutComposer::new(PageSize::A4);
        composer.set_font(Font::Italic).write_pair(20.0, "A:", 80.0, "b");
        composer.write(20.0, "c");
        let doc = composer.finish(DocumentMetadata::default());

        let fonts: Vec<Font> = doc.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { font, .. } => Some(*font),
                DrawOp::Line { .. } => None,
            })
            .collect();
        assert_eq!(fonts, vec![Font::Bold, Font::Regular, Font::Italic]);
    }

    #[test]
    fn footer_on_every_page() {
        let mut composer = LayoutComposer::new(PageSize::A4).with_footer(Footer {
            text: "foot".to_string(),
            size: 10.0,
            color: Rgb(100, 100, 100),
            offset: 10.0,
        });
        composer.write(20.0, "one").new_page().write(20.0, "two");
        let doc = composer.finish(DocumentMetadata::default());

        assert_eq!(doc.page_count(), 2);
        for page in &doc.pages {
            assert_eq!(page.texts().last(), Some("foot"));
        }
    }
}
