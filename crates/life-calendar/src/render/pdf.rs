//! PDF canvas
//!
//! Builds content streams by hand and assembles them into a `lopdf`
//! document. The canvas works in y-down points; every coordinate is flipped
//! to PDF's y-up space as it is written.

use crate::constants::BEZIER_CIRCLE_FACTOR;
use crate::fonts::{FontFamily, FontSlant, FontWeight};
use crate::types::{Result, Rgb};
use lopdf::{Dictionary, Document, Object, Stream};
use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;
use std::fmt::Write as _;

use super::canvas::{Canvas, FontState};

// =============================================================================
// Canvas
// =============================================================================

/// A PDF page surface of fixed size
pub struct PdfCanvas {
    width: f64,
    height: f64,
    /// Content streams of finished pages
    pages: Vec<String>,
    content: String,
    /// Path operators since the last fill, already in PDF space
    path: String,
    point: Option<(f64, f64)>,
    /// A `move_to` not yet written to the path; text placement never needs it
    pending_move: Option<(f64, f64)>,
    color: Rgb,
    line_width: f64,
    font: FontState,
    /// Base font name to resource name (`F1`, `F2`, ...)
    fonts: BTreeMap<&'static str, String>,
}

impl PdfCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: Vec::new(),
            content: String::new(),
            path: String::new(),
            point: None,
            pending_move: None,
            color: Rgb::gray(0.0),
            line_width: 1.0,
            font: FontState::default(),
            fonts: BTreeMap::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    fn path_move_to(&mut self, x: f64, y: f64) {
        let y_pdf = self.flip(y);
        let _ = writeln!(self.path, "{} {} m", num(x), num(y_pdf));
        self.point = Some((x, y));
    }

    fn path_line_to(&mut self, x: f64, y: f64) {
        let y_pdf = self.flip(y);
        let _ = writeln!(self.path, "{} {} l", num(x), num(y_pdf));
        self.point = Some((x, y));
    }

    fn path_curve_to(&mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) {
        let (c1_y, c2_y, end_y) = (self.flip(c1.1), self.flip(c2.1), self.flip(end.1));
        let _ = writeln!(
            self.path,
            "{} {} {} {} {} {} c",
            num(c1.0),
            num(c1_y),
            num(c2.0),
            num(c2_y),
            num(end.0),
            num(end_y)
        );
        self.point = Some(end);
    }

    fn font_resource(&mut self) -> String {
        let base = self.font.family.base_font(self.font.weight, self.font.slant);
        let next = format!("F{}", self.fonts.len() + 1);
        self.fonts.entry(base).or_insert(next).clone()
    }

    /// Assemble all finished pages into a document.
    ///
    /// Content drawn after the last `show_page` becomes a final page.
    pub fn finish(mut self) -> Result<Document> {
        if !self.content.is_empty() {
            self.show_page();
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for (base_font, name) in &self.fonts {
            let font_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                ("BaseFont", Object::Name(base_font.as_bytes().to_vec())),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            font_dict.set(name.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(font_dict),
        )]));

        let mut kids = Vec::new();
        for content in &self.pages {
            let content_id = doc.add_object(Stream::new(
                Dictionary::new(),
                content.clone().into_bytes(),
            ));
            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(self.width as f32),
                        Object::Real(self.height as f32),
                    ]),
                ),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(content_id)),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(kids.len() as i64)),
            ("Kids", Object::Array(kids)),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }

    /// Assemble and serialize the document
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut doc = self.finish()?;
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }
}

impl Canvas for PdfCanvas {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.point = Some((x, y));
        self.pending_move = Some((x, y));
    }

    fn new_sub_path(&mut self) {
        self.point = None;
        self.pending_move = None;
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64) {
        if let Some((x, y)) = self.pending_move.take() {
            self.path_move_to(x, y);
        }
        let start = (cx + radius * angle1.cos(), cy + radius * angle1.sin());
        match self.point {
            Some(_) => self.path_line_to(start.0, start.1),
            None => self.path_move_to(start.0, start.1),
        }
        for segment in arc_segments(cx, cy, radius, angle1, angle2) {
            self.path_curve_to(segment[0], segment[1], segment[2]);
        }
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let bottom = self.flip(y + height);
        let _ = writeln!(
            self.path,
            "{} {} {} {} re",
            num(x),
            num(bottom),
            num(width),
            num(height)
        );
        self.point = Some((x, y));
        self.pending_move = None;
    }

    fn close_path(&mut self) {
        self.path.push_str("h\n");
    }

    fn stroke_preserve(&mut self) {
        let _ = writeln!(
            self.content,
            "{} w {} RG\n{}S",
            num(self.line_width),
            color_ops(self.color),
            self.path
        );
    }

    fn fill(&mut self) {
        let _ = writeln!(self.content, "{} rg\n{}f", color_ops(self.color), self.path);
        self.path.clear();
        self.point = None;
        self.pending_move = None;
    }

    fn select_font(&mut self, family: FontFamily, weight: FontWeight, slant: FontSlant) {
        self.font.family = family;
        self.font.weight = weight;
        self.font.slant = slant;
    }

    fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
    }

    fn measure_text(&self, text: &str) -> (f64, f64) {
        self.font.measure(text)
    }

    fn show_text(&mut self, text: &str) {
        let (x, y) = self.point.unwrap_or_default();
        let resource = self.font_resource();
        let baseline = self.flip(y);
        let _ = writeln!(
            self.content,
            "{} rg\nBT /{} {} Tf {} {} Td ({}) Tj ET",
            color_ops(self.color),
            resource,
            num(self.font.size),
            num(x),
            num(baseline),
            escape_text(text)
        );
        let (width, _) = self.font.measure(text);
        self.point = Some((x + width, y));
        self.pending_move = None;
    }

    fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.content));
        self.path.clear();
        self.point = None;
        self.pending_move = None;
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Format a coordinate for a content stream: three decimals, no trailing zeros
fn num(value: f64) -> String {
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

fn color_ops(color: Rgb) -> String {
    format!(
        "{} {} {}",
        num(color.r as f64),
        num(color.g as f64),
        num(color.b as f64)
    )
}

/// Escape text for a literal string in WinAnsi encoding.
/// Characters outside Latin-1 are replaced with `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\u{a0}'..='\u{ff}' => {
                let _ = write!(out, "\\{:03o}", ch as u32);
            }
            _ => out.push('?'),
        }
    }
    out
}

/// Cubic Bezier segments `[c1, c2, end]` approximating an arc.
///
/// The sweep runs from `angle1` toward increasing angles; `angle2` is
/// pushed up by full turns until it is not below `angle1`. Each segment
/// covers at most a quarter turn.
fn arc_segments(cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64) -> Vec<[(f64, f64); 3]> {
    let mut end_angle = angle2;
    while end_angle < angle1 {
        end_angle += std::f64::consts::TAU;
    }

    let point = |angle: f64| (cx + radius * angle.cos(), cy + radius * angle.sin());
    let mut segments = Vec::new();
    let mut start = angle1;
    while end_angle - start > 1e-9 {
        let sweep = (end_angle - start).min(FRAC_PI_2);
        let factor = if (sweep - FRAC_PI_2).abs() < 1e-9 {
            BEZIER_CIRCLE_FACTOR
        } else {
            4.0 / 3.0 * (sweep / 4.0).tan()
        };
        let end = start + sweep;
        let (x0, y0) = point(start);
        let (x3, y3) = point(end);
        let k = factor * radius;
        segments.push([
            (x0 - k * start.sin(), y0 + k * start.cos()),
            (x3 + k * end.sin(), y3 - k * end.cos()),
            (x3, y3),
        ]);
        start = end;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(12.34567), "12.346");
    }

    #[test]
    fn text_escaping() {
        assert_eq!(escape_text("a (b) \\c"), "a \\(b\\) \\\\c");
        assert_eq!(escape_text("é"), "\\351");
        assert_eq!(escape_text("日"), "?");
    }

    #[test]
    fn quarter_arc_is_one_segment() {
        let segments = arc_segments(0.0, 0.0, 1.0, 0.0, FRAC_PI_2);
        assert_eq!(segments.len(), 1);
        let [c1, c2, end] = segments[0];
        assert!((c1.0 - 1.0).abs() < 1e-9);
        assert!((c1.1 - BEZIER_CIRCLE_FACTOR).abs() < 1e-9);
        assert!((c2.0 - BEZIER_CIRCLE_FACTOR).abs() < 1e-9);
        assert!((c2.1 - 1.0).abs() < 1e-9);
        assert!(end.0.abs() < 1e-9);
        assert!((end.1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_turn_is_four_segments() {
        let segments = arc_segments(5.0, 5.0, 2.0, 0.0, std::f64::consts::TAU);
        assert_eq!(segments.len(), 4);
        let last = segments[3][2];
        assert!((last.0 - 7.0).abs() < 1e-9);
        assert!((last.1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn show_page_collects_content() {
        let mut canvas = PdfCanvas::new(100.0, 200.0);
        canvas.set_color(Rgb::gray(0.5));
        canvas.rectangle(0.0, 0.0, 100.0, 200.0);
        canvas.fill();
        canvas.move_to(10.0, 20.0);
        canvas.show_text("hi");
        canvas.show_page();
        assert_eq!(canvas.page_count(), 1);
        assert!(canvas.pages[0].contains("0 0 100 200 re"));
        assert!(canvas.pages[0].contains("10 180 Td (hi) Tj"));
    }
}
