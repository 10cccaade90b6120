//! Page layout model
//!
//! A [`Document`] is a list of [`Page`]s, each a list of positioned drawing
//! operations. Coordinates are millimetres from the top-left corner of the
//! page; a text operation's `y` is its baseline. Font sizes are points.

use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Physical page size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width in millimetres
    pub width: f64,
    /// Height in millimetres
    pub height: f64,
}

impl PageSize {
    /// ISO A4 portrait
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };

    /// Horizontal centre
    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components scaled to `0.0..=1.0`
    #[inline]
    #[must_use]
    pub fn unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }
}

/// Typeface variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// Upright
    #[default]
    Regular,
    /// Bold
    Bold,
    /// Slanted
    Italic,
}

/// Horizontal anchoring of text relative to its `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// `x` is the left edge
    #[default]
    Left,
    /// `x` is the centre
    Center,
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    /// One line of text
    Text {
        /// Anchor position, millimetres from the left edge
        x: f64,
        /// Baseline, millimetres from the top edge
        y: f64,
        /// Content
        text: String,
        /// Typeface
        font: Font,
        /// Size in points
        size: f64,
        /// Fill colour
        color: Rgb,
        /// Anchoring of `x`
        align: Align,
    },
    /// Straight stroke
    Line {
        /// Start point `(x, y)` in millimetres
        from: (f64, f64),
        /// End point `(x, y)` in millimetres
        to: (f64, f64),
        /// Stroke width in millimetres
        width: f64,
        /// Stroke colour
        color: Rgb,
    },
}

impl DrawOp {
    /// Text content, for text operations
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            DrawOp::Line { .. } => None,
        }
    }

    /// Whether every coordinate and size is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            DrawOp::Text { x, y, size, .. } => x.is_finite() && y.is_finite() && size.is_finite(),
            DrawOp::Line {
                from, to, width, ..
            } => [from.0, from.1, to.0, to.1, *width].iter().all(|v| v.is_finite()),
        }
    }
}

/// One page of drawing operations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    /// Physical size
    pub size: PageSize,
    /// Operations in paint order
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Empty page
    #[inline]
    #[must_use]
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Text of every text operation, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }
}

/// Descriptive metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,
    /// Issuing organisation
    pub author: String,
    /// Short description
    pub subject: String,
}

/// A laid-out, paginated document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Title, author and subject
    pub metadata: DocumentMetadata,
    /// Pages in order
    pub pages: Vec<Page>,
}

impl Document {
    /// Number of pages
    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every page, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Whether some text operation equals `needle`
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t == needle)
    }
}
