//! PDF Font Handling
//!
//! Only the standard Type1 Helvetica faces are used. They are built into
//! every PDF viewer, so nothing is embedded; text is encoded with
//! WinAnsiEncoding and measured with the fonts' AFM advance widths.

use super::objects::{PdfDictionary, PdfObject};
use crate::surface::FontStyle;

/// Standard PDF fonts used by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Helvetica
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
}

/// Advance width for glyphs without an entry in the tables below.
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica widths for codes 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold widths for codes 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl StandardFont {
    /// Font for a layout style
    pub fn for_style(style: FontStyle) -> Self {
        match style {
            FontStyle::Regular => StandardFont::Helvetica,
            FontStyle::Bold => StandardFont::HelveticaBold,
        }
    }

    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// Advance width of a WinAnsi code, in 1/1000 em
    pub fn glyph_width(&self, code: u8) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match code {
            32..=126 => table[usize::from(code - 32)],
            0x85 | 0x89 | 0x97 | 0x99 => 1000,
            0x91 | 0x92 => 278,
            0x93 | 0x94 => 500,
            0x95 => 350,
            0xA0 => 278,
            _ => DEFAULT_WIDTH,
        }
    }

    /// Width of encoded text at `size`, in points
    pub fn text_width(&self, encoded: &[u8], size: f64) -> f64 {
        let units: u32 = encoded.iter().map(|&b| u32::from(self.glyph_width(b))).sum();
        f64::from(units) * size / 1000.0
    }
}

/// Create a font dictionary for a standard font
pub fn create_font_dict(font: StandardFont) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Font");
    dict.insert("Subtype", PdfObject::name("Type1"));
    dict.insert("BaseFont", PdfObject::name(font.pdf_name()));
    dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
    dict
}

/// Encode text with WinAnsiEncoding.
///
/// Characters outside the encoding become `?`. Tabs become spaces and other
/// control characters are dropped.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push(b' '),
            c if c.is_control() => {}
            ' '..='~' => out.push(c as u8),
            '\u{A0}'..='\u{FF}' => out.push(c as u8),
            _ => out.push(win_ansi_special(c).unwrap_or(b'?')),
        }
    }
    out
}

/// WinAnsi codes 0x80..=0x9F, which differ from Latin-1.
fn win_ansi_special(c: char) -> Option<u8> {
    let code = match c {
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
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_names() {
        assert_eq!(StandardFont::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(StandardFont::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(StandardFont::for_style(FontStyle::Bold), StandardFont::HelveticaBold);
    }

    #[test]
    fn test_glyph_widths() {
        assert_eq!(StandardFont::Helvetica.glyph_width(b' '), 278);
        assert_eq!(StandardFont::Helvetica.glyph_width(b'W'), 944);
        assert_eq!(StandardFont::Helvetica.glyph_width(b'~'), 584);
        assert_eq!(StandardFont::HelveticaBold.glyph_width(b'i'), 278);
        assert_eq!(StandardFont::HelveticaBold.glyph_width(b'~'), 584);
    }

    #[test]
    fn test_bold_is_wider() {
        let text = encode_win_ansi("Question 1: Which planet is largest?");
        let regular = StandardFont::Helvetica.text_width(&text, 11.0);
        let bold = StandardFont::HelveticaBold.text_width(&text, 11.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_encoding() {
        assert_eq!(encode_win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("“ok” – 5€"), vec![0x93, b'o', b'k', 0x94, b' ', 0x96, b' ', b'5', 0x80]);
        assert_eq!(encode_win_ansi("π🎉"), b"??".to_vec());
        assert_eq!(encode_win_ansi("a\tb\u{7}c"), b"a bc".to_vec());
    }

    #[test]
    fn test_font_dict() {
        let mut out = Vec::new();
        create_font_dict(StandardFont::Helvetica).write_to(&mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<< /BaseFont /Helvetica /Encoding /WinAnsiEncoding /Subtype /Type1 /Type /Font >>"
        );
    }
}
