//! PDF canvas: the built-in drawing surface.

use super::content::ContentStream;
use super::fonts::{create_font_dict, encode_win_ansi, StandardFont};
use super::objects::{PdfDictionary, PdfObject};
use super::writer::{PdfError, PdfWriter};
use crate::config::PageSize;
use crate::surface::{FontStyle, PdfSurface, SurfaceError};
use crate::{MM_TO_PT, PT_TO_MM};
use chrono::Local;

const FONTS: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];
const RULE_GRAY: f64 = 0.6;
const RULE_WIDTH_PT: f64 = 0.5;
const CREATOR: &str = "exam-pdf";

/// Page content collected in memory and written out by [`PdfCanvas::finish`].
#[derive(Debug)]
pub struct PdfCanvas {
    page_size: PageSize,
    pages: Vec<ContentStream>,
    font: StandardFont,
    font_size: f64,
    title: Option<String>,
    max_pages: usize,
    compress: bool,
}

impl PdfCanvas {
    /// Create a canvas with one empty page.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: vec![ContentStream::new()],
            font: StandardFont::Helvetica,
            font_size: 11.0,
            title: None,
            max_pages: usize::MAX,
            compress: true,
        }
    }

    /// Title stored in the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Set whether to compress page content streams
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn current_page(&mut self) -> &mut ContentStream {
        // `pages` starts with one page and only grows.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Convert a top-left millimetre position to PDF user space.
    fn to_user_space(&self, x: f64, y: f64) -> Result<(f64, f64), SurfaceError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SurfaceError::InvalidPosition { x, y });
        }
        Ok((x * MM_TO_PT, (self.page_size.height - y) * MM_TO_PT))
    }

    /// Write the complete PDF file.
    pub fn finish(self) -> Result<Vec<u8>, PdfError> {
        let mut pdf = PdfWriter::new(Vec::new());
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();
        let font_refs: Vec<(StandardFont, u32)> =
            FONTS.iter().map(|&font| (font, pdf.allocate_object())).collect();
        let page_refs: Vec<(u32, u32)> = self
            .pages
            .iter()
            .map(|_| (pdf.allocate_object(), pdf.allocate_object()))
            .collect();

        let mut catalog = PdfDictionary::new().with_type("Catalog");
        catalog.insert("Pages", PdfObject::Reference(pages_ref));
        pdf.write_object(catalog_ref, &PdfObject::Dictionary(catalog))?;

        let mut pages = PdfDictionary::new().with_type("Pages");
        pages.insert(
            "Kids",
            PdfObject::Array(
                page_refs
                    .iter()
                    .map(|(page, _)| PdfObject::Reference(*page))
                    .collect(),
            ),
        );
        pages.insert("Count", PdfObject::Integer(page_refs.len() as i64));
        pdf.write_object(pages_ref, &PdfObject::Dictionary(pages))?;

        pdf.write_object(info_ref, &PdfObject::Dictionary(self.info_dictionary()))?;

        for (font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &PdfObject::Dictionary(create_font_dict(*font)))?;
        }

        let mut font_resources = PdfDictionary::new();
        for (font, font_ref) in &font_refs {
            font_resources.insert(font.resource_name(), PdfObject::Reference(*font_ref));
        }
        let mut resources = PdfDictionary::new();
        resources.insert("Font", PdfObject::Dictionary(font_resources));
        resources.insert(
            "ProcSet",
            PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
        );

        let media_box = PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(self.page_size.width * MM_TO_PT),
            PdfObject::Real(self.page_size.height * MM_TO_PT),
        ]);

        for (content, (page_ref, content_ref)) in self.pages.into_iter().zip(&page_refs) {
            let mut page = PdfDictionary::new().with_type("Page");
            page.insert("Parent", PdfObject::Reference(pages_ref));
            page.insert("MediaBox", media_box.clone());
            page.insert("Resources", PdfObject::Dictionary(resources.clone()));
            page.insert("Contents", PdfObject::Reference(*content_ref));
            pdf.write_object(*page_ref, &PdfObject::Dictionary(page))?;
            pdf.write_stream_object(*content_ref, content.into_bytes())?;
        }

        pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
        pdf.finish()
    }

    fn info_dictionary(&self) -> PdfDictionary {
        let mut info = PdfDictionary::new();
        if let Some(title) = &self.title {
            info.insert("Title", PdfObject::String(encode_win_ansi(title)));
        }
        info.insert("Creator", PdfObject::text(CREATOR));
        info.insert("Producer", PdfObject::text(CREATOR));
        let created = Local::now().format("D:%Y%m%d%H%M%S").to_string();
        info.insert("CreationDate", PdfObject::text(&created));
        info
    }
}

impl PdfSurface for PdfCanvas {
    fn page_size(&self) -> PageSize {
        self.page_size
    }

    fn set_font(&mut self, style: FontStyle, size: f64) {
        self.font = StandardFont::for_style(style);
        self.font_size = size;
    }

    fn text_width(&self, text: &str) -> f64 {
        self.font.text_width(&encode_win_ansi(text), self.font_size) * PT_TO_MM
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        let (px, py) = self.to_user_space(x, y)?;
        let encoded = encode_win_ansi(text);
        if encoded.is_empty() {
            return Ok(());
        }
        let (resource, size) = (self.font.resource_name(), self.font_size);
        self.current_page()
            .begin_text()
            .set_font(resource, size)
            .move_text(px, py)
            .show_text(&encoded)
            .end_text();
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), SurfaceError> {
        let (px1, py1) = self.to_user_space(x1, y1)?;
        let (px2, py2) = self.to_user_space(x2, y2)?;
        self.current_page()
            .save_state()
            .set_stroke_gray(RULE_GRAY)
            .set_line_width(RULE_WIDTH_PT)
            .move_to(px1, py1)
            .line_to(px2, py2)
            .stroke()
            .restore_state();
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), SurfaceError> {
        if self.pages.len() >= self.max_pages {
            return Err(SurfaceError::PageLimit(self.max_pages));
        }
        self.pages.push(ContentStream::new());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncompressed(mut canvas: PdfCanvas) -> String {
        canvas.set_compression(false);
        let bytes = canvas.finish().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_empty_canvas_is_valid_pdf() {
        let text = uncompressed(PdfCanvas::new(PageSize::a4()));
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/MediaBox [0 0 595.2756 841.8898]"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_text_placement() {
        let mut canvas = PdfCanvas::new(PageSize::a4()).with_title("Answer Key");
        canvas.set_font(FontStyle::Bold, 11.0);
        canvas.draw_text("Answer 1:", 20.0, 297.0 - 10.0).unwrap();
        let text = uncompressed(canvas);

        assert!(text.contains("/F2 11 Tf"));
        assert!(text.contains("56.6929 28.3465 Td"));
        assert!(text.contains("(Answer 1:) Tj"));
        assert!(text.contains("/Title (Answer Key)"));
    }

    #[test]
    fn test_pages_and_lines() {
        let mut canvas = PdfCanvas::new(PageSize::letter());
        canvas.draw_line(20.0, 30.0, 190.0, 30.0).unwrap();
        canvas.add_page().unwrap();
        canvas.add_page().unwrap();
        assert_eq!(canvas.page_count(), 3);

        let text = uncompressed(canvas);
        assert!(text.contains("/Count 3"));
        assert!(text.contains(" l\nS\n"));
    }

    #[test]
    fn test_page_limit() {
        let mut canvas = PdfCanvas::new(PageSize::a4()).with_max_pages(2);
        canvas.add_page().unwrap();
        assert!(matches!(canvas.add_page(), Err(SurfaceError::PageLimit(2))));
    }

    #[test]
    fn test_rejects_non_finite_positions() {
        let mut canvas = PdfCanvas::new(PageSize::a4());
        assert!(matches!(
            canvas.draw_text("x", f64::NAN, 10.0),
            Err(SurfaceError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_measurement_in_millimetres() {
        let mut canvas = PdfCanvas::new(PageSize::a4());
        canvas.set_font(FontStyle::Regular, 10.0);
        // Ten spaces at 10pt: 10 * 278 / 1000 * 10 = 27.8pt
        let width = canvas.text_width("          ");
        assert!((width - 27.8 * PT_TO_MM).abs() < 1e-9);
    }
}
