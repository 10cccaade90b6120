//! Helvetica glyph metrics
//!
//! Advance widths (per 1000 em) of the base-14 Helvetica faces for
//! WinAnsi-encoded bytes. Oblique shares the upright widths.

use crate::layout::{Font, MM_PER_PT};

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Map an accented Latin-1 letter to its unaccented ASCII base
fn base_letter(byte: u8) -> Option<u8> {
    let base = match byte {
        0xC0..=0xC5 => b'A',
        0xC7 => b'C',
        0xC8..=0xCB => b'E',
        0xCC..=0xCF => b'I',
        0xD1 => b'N',
        0xD2..=0xD6 | 0xD8 => b'O',
        0xD9..=0xDC => b'U',
        0xDD => b'Y',
        0xE0..=0xE5 => b'a',
        0xE7 => b'c',
        0xE8..=0xEB => b'e',
        0xEC..=0xEF => b'i',
        0xF1 => b'n',
        0xF2..=0xF6 | 0xF8 => b'o',
        0xF9..=0xFC => b'u',
        0xFD | 0xFF => b'y',
        _ => return None,
    };
    Some(base)
}

/// Advance width of one WinAnsi byte, in 1/1000 em
#[must_use]
pub fn glyph_width(font: Font, byte: u8) -> u16 {
    let table = match font {
        Font::Bold => &HELVETICA_BOLD,
        Font::Regular | Font::Italic => &HELVETICA,
    };
    let byte = base_letter(byte).unwrap_or(byte);
    match byte {
        0x20..=0x7E => table[usize::from(byte - 0x20)],
        // bullet
        0x95 => 350,
        0x96 => 556,
        0x97 => 1000,
        _ => 556,
    }
}

/// Width in points of WinAnsi-encoded text
#[must_use]
pub fn encoded_width_pt(font: Font, size_pt: f64, bytes: &[u8]) -> f64 {
    let units: u32 = bytes.iter().map(|b| u32::from(glyph_width(font, *b))).sum();
    f64::from(units) * size_pt / 1000.0
}

/// Width in millimetres of text as it will be encoded
#[must_use]
pub fn text_width_mm(font: Font, size_pt: f64, text: &str) -> f64 {
    encoded_width_pt(font, size_pt, &crate::pdf::encode_win_ansi(text)) * MM_PER_PT
}
