//! Layout engine
//!
//! Places a [`Document`]'s content on a [`PdfSurface`]: headings, bold runs,
//! greedy word wrap, explicit `---` page breaks and automatic page breaks
//! when the next line would run into the bottom margin.

use crate::config::LayoutConfig;
use crate::surface::{FontStyle, PdfSurface, SurfaceError};
use crate::PT_TO_MM;
use exam_core::{markup, Block, Document, Span};
use tracing::debug;

/// Baseline offset from the top of a line box, as a fraction of the font size.
const BASELINE_RATIO: f64 = 0.8;

/// What a layout run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    pub pages: usize,
    pub explicit_breaks: usize,
    pub automatic_breaks: usize,
    /// Text lines drawn, after wrapping.
    pub lines: usize,
}

/// Lay out `document` onto `surface`, starting on its current page.
pub fn layout_document<S>(
    surface: &mut S,
    document: &Document,
    config: &LayoutConfig,
) -> Result<LayoutSummary, SurfaceError>
where
    S: PdfSurface + ?Sized,
{
    let mut engine = LayoutEngine::new(surface, config);

    if config.include_title && !document.title.trim().is_empty() {
        engine.styled_block(&document.title, config.title_font_size, false)?;
    }

    for block in markup::parse(&document.content) {
        match block {
            Block::Separator => engine.explicit_break()?,
            Block::Heading(text) if text.trim().is_empty() => engine.blank(),
            Block::Heading(text) => {
                engine.styled_block(text.trim(), config.heading_font_size, true)?
            }
            Block::Blank => engine.blank(),
            Block::Paragraph(spans) => engine.paragraph(&spans)?,
        }
    }

    let summary = engine.finish();
    debug!(
        title = %document.title,
        pages = summary.pages,
        explicit_breaks = summary.explicit_breaks,
        automatic_breaks = summary.automatic_breaks,
        lines = summary.lines,
        "Document laid out"
    );
    Ok(summary)
}

/// A styled piece of a word.
#[derive(Debug, Clone, PartialEq)]
struct Fragment {
    text: String,
    style: FontStyle,
}

/// Text between two whitespace boundaries. Adjacent fragments differ in style.
#[derive(Debug, Clone, Default, PartialEq)]
struct Word {
    fragments: Vec<Fragment>,
}

impl Word {
    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn push(&mut self, text: &str, style: FontStyle) {
        match self.fragments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.fragments.push(Fragment {
                text: text.to_string(),
                style,
            }),
        }
    }
}

/// Split styled spans into words, keeping each piece's own style.
fn split_words(spans: &[Span<'_>]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();

    for span in spans {
        let style = if span.bold {
            FontStyle::Bold
        } else {
            FontStyle::Regular
        };
        for (i, piece) in span.text.split(char::is_whitespace).enumerate() {
            if i > 0 && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if !piece.is_empty() {
                current.push(piece, style);
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

struct LayoutEngine<'a, S: ?Sized> {
    surface: &'a mut S,
    config: &'a LayoutConfig,
    page_height: f64,
    max_width: f64,
    /// Top of the next line box, in mm from the page top.
    y: f64,
    page_has_content: bool,
    summary: LayoutSummary,
}

impl<'a, S: PdfSurface + ?Sized> LayoutEngine<'a, S> {
    fn new(surface: &'a mut S, config: &'a LayoutConfig) -> Self {
        let page_height = surface.page_size().height;
        surface.set_font(FontStyle::Regular, config.body_font_size);
        Self {
            page_height,
            max_width: config.printable_width(),
            y: config.margin_top,
            page_has_content: false,
            summary: LayoutSummary::default(),
            surface,
            config,
        }
    }

    fn finish(mut self) -> LayoutSummary {
        self.summary.pages = self.surface.page_count();
        self.summary
    }

    fn new_page(&mut self) -> Result<(), SurfaceError> {
        self.surface.add_page()?;
        self.y = self.config.margin_top;
        self.page_has_content = false;
        Ok(())
    }

    fn explicit_break(&mut self) -> Result<(), SurfaceError> {
        if !self.page_has_content {
            return Ok(());
        }
        self.new_page()?;
        self.summary.explicit_breaks += 1;
        debug!(page = self.surface.page_count(), "Explicit page break");
        Ok(())
    }

    /// Start a new page if a line of `line_height` would cross the bottom margin.
    fn ensure_room(&mut self, line_height: f64) -> Result<(), SurfaceError> {
        let limit = self.page_height - self.config.margin_bottom;
        if self.page_has_content && self.y + line_height > limit {
            self.new_page()?;
            self.summary.automatic_breaks += 1;
            debug!(page = self.surface.page_count(), "Automatic page break");
        }
        Ok(())
    }

    fn blank(&mut self) {
        if self.page_has_content {
            self.y += self.config.paragraph_gap();
        }
    }

    fn paragraph(&mut self, spans: &[Span<'_>]) -> Result<(), SurfaceError> {
        let size = self.config.body_font_size;
        let words = split_words(spans);
        for line in self.wrap(words, size) {
            self.draw_line_of_words(&line, size)?;
        }
        Ok(())
    }

    /// Bold text at `size` followed by extra spacing, optionally with a rule
    /// under it. The body font is restored afterwards.
    fn styled_block(&mut self, text: &str, size: f64, rule: bool) -> Result<(), SurfaceError> {
        let words = split_words(&[Span {
            text,
            bold: true,
        }]);
        for line in self.wrap(words, size) {
            self.draw_line_of_words(&line, size)?;
        }

        let spacing = self.config.heading_spacing;
        if rule {
            let rule_y = self.y + spacing / 2.0;
            self.surface.draw_line(
                self.config.margin_left,
                rule_y,
                self.config.margin_left + self.max_width,
                rule_y,
            )?;
        }
        self.y += spacing;
        self.surface.set_font(FontStyle::Regular, self.config.body_font_size);
        Ok(())
    }

    fn measure(&mut self, text: &str, style: FontStyle, size: f64) -> f64 {
        self.surface.set_font(style, size);
        self.surface.text_width(text)
    }

    fn word_width(&mut self, word: &Word, size: f64) -> f64 {
        word.fragments
            .iter()
            .map(|f| self.measure(&f.text, f.style, size))
            .sum()
    }

    /// Greedy word wrap to the printable width.
    fn wrap(&mut self, words: Vec<Word>, size: f64) -> Vec<Vec<Word>> {
        let space = self.measure(" ", FontStyle::Regular, size);
        let mut lines = Vec::new();
        let mut line: Vec<Word> = Vec::new();
        let mut width = 0.0;

        for word in words {
            let word_width = self.word_width(&word, size);

            if word_width > self.max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces = self.break_word(word, size);
                let last = pieces.pop();
                lines.extend(pieces.into_iter().map(|piece| vec![piece]));
                if let Some(last) = last {
                    width = self.word_width(&last, size);
                    line.push(last);
                }
            } else if line.is_empty() {
                width = word_width;
                line.push(word);
            } else if width + space + word_width <= self.max_width {
                width += space + word_width;
                line.push(word);
            } else {
                lines.push(std::mem::take(&mut line));
                width = word_width;
                line.push(word);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Break a word wider than the printable width into pieces that fit.
    fn break_word(&mut self, word: Word, size: f64) -> Vec<Word> {
        let mut pieces = Vec::new();
        let mut current = Word::default();
        let mut width = 0.0;
        let mut buf = [0u8; 4];

        for fragment in word.fragments {
            for c in fragment.text.chars() {
                let ch: &str = c.encode_utf8(&mut buf);
                let char_width = self.measure(ch, fragment.style, size);
                if !current.is_empty() && width + char_width > self.max_width {
                    pieces.push(std::mem::take(&mut current));
                    width = 0.0;
                }
                current.push(ch, fragment.style);
                width += char_width;
            }
        }
        if !current.is_empty() {
            pieces.push(current);
        }
        pieces
    }

    fn draw_line_of_words(&mut self, words: &[Word], size: f64) -> Result<(), SurfaceError> {
        let line_height = self.config.line_height(size);
        self.ensure_room(line_height)?;

        let baseline = self.y + size * PT_TO_MM * BASELINE_RATIO;
        let space = self.measure(" ", FontStyle::Regular, size);
        let mut x = self.config.margin_left;

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                x += space;
            }
            for fragment in &word.fragments {
                self.surface.set_font(fragment.style, size);
                self.surface.draw_text(&fragment.text, x, baseline)?;
                x += self.surface.text_width(&fragment.text);
            }
        }

        self.y += line_height;
        self.page_has_content = true;
        self.summary.lines += 1;
        Ok(())
    }
}
