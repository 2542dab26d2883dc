//! The drawing surface the composer paints on
//!
//! Coordinates are points in a y-down space with the origin at the top-left
//! corner of the page. Paths follow the usual current-point model: `arc`
//! connects from the current point (or starts a new one after
//! `new_sub_path`), `stroke_preserve` keeps the path for a following `fill`.

use crate::fonts::{FontFamily, FontSlant, FontWeight};
use crate::types::Rgb;

pub trait Canvas {
    fn set_line_width(&mut self, width: f64);

    /// Color for the next stroke, fill or text
    fn set_color(&mut self, color: Rgb);

    fn move_to(&mut self, x: f64, y: f64);

    /// Forget the current point without closing the path
    fn new_sub_path(&mut self);

    /// Circular arc around `(cx, cy)` from `angle1` to `angle2` (radians),
    /// in the direction of increasing angle
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64);

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn close_path(&mut self);

    /// Stroke the current path and keep it
    fn stroke_preserve(&mut self);

    /// Fill the current path and clear it
    fn fill(&mut self);

    fn select_font(&mut self, family: FontFamily, weight: FontWeight, slant: FontSlant);

    fn set_font_size(&mut self, size: f64);

    /// `(width, height)` of `text` in the current font
    fn measure_text(&self, text: &str) -> (f64, f64);

    /// Draw `text` with its baseline starting at the current point
    fn show_text(&mut self, text: &str);

    /// Finish the current page
    fn show_page(&mut self);
}

/// Font state shared by the canvas implementations
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FontState {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub size: f64,
}

impl Default for FontState {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            size: 10.0,
        }
    }
}

impl FontState {
    pub fn measure(&self, text: &str) -> (f64, f64) {
        self.family.measure(text, self.size, self.weight)
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    SetLineWidth(f64),
    SetColor(Rgb),
    MoveTo(f64, f64),
    NewSubPath,
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    ClosePath,
    StrokePreserve,
    Fill,
    SelectFont(FontFamily, FontWeight, FontSlant),
    SetFontSize(f64),
    ShowText(String),
    ShowPage,
}

/// A text run as it would appear on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub color: Rgb,
}

/// Canvas that keeps every call in memory instead of drawing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    font: FontState,
    color: Option<Rgb>,
    point: Option<(f64, f64)>,
    texts: Vec<PlacedText>,
    boxes: Vec<RecordedBox>,
    pending_stroke: Option<f64>,
    line_width: f64,
}

/// A stroked and filled sub path, as produced for week boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedBox {
    /// Left edge of the arcs' bounding box
    pub x: f64,
    /// Top edge of the arcs' bounding box
    pub y: f64,
    pub line_width: f64,
    pub fill: Rgb,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn texts(&self) -> &[PlacedText] {
        &self.texts
    }

    /// Rounded boxes in drawing order
    pub fn boxes(&self) -> &[RecordedBox] {
        &self.boxes
    }

    pub fn pages(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::ShowPage))
            .count()
    }

    /// Bounding box origin of the arcs since the last path was cleared
    fn arc_origin(&self) -> Option<(f64, f64)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, CanvasOp::Fill | CanvasOp::NewSubPath))?;
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Arc { cx, cy, radius, .. } => Some((cx - radius, cy - radius)),
                _ => None,
            })
            .reduce(|(ax, ay), (bx, by)| (ax.min(bx), ay.min(by)))
    }
}

impl Canvas for RecordingCanvas {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(CanvasOp::SetLineWidth(width));
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = Some(color);
        self.ops.push(CanvasOp::SetColor(color));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.point = Some((x, y));
        self.ops.push(CanvasOp::MoveTo(x, y));
    }

    fn new_sub_path(&mut self) {
        self.point = None;
        self.ops.push(CanvasOp::NewSubPath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, angle1: f64, angle2: f64) {
        self.point = Some((cx + radius * angle2.cos(), cy + radius * angle2.sin()));
        self.ops.push(CanvasOp::Arc {
            cx,
            cy,
            radius,
            angle1,
            angle2,
        });
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.point = Some((x, y));
        self.ops.push(CanvasOp::Rectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn stroke_preserve(&mut self) {
        self.pending_stroke = Some(self.line_width);
        self.ops.push(CanvasOp::StrokePreserve);
    }

    fn fill(&mut self) {
        if let (Some(line_width), Some((x, y)), Some(fill)) =
            (self.pending_stroke.take(), self.arc_origin(), self.color)
        {
            self.boxes.push(RecordedBox {
                x,
                y,
                line_width,
                fill,
            });
        }
        self.point = None;
        self.ops.push(CanvasOp::Fill);
    }

    fn select_font(&mut self, family: FontFamily, weight: FontWeight, slant: FontSlant) {
        self.font.family = family;
        self.font.weight = weight;
        self.font.slant = slant;
        self.ops.push(CanvasOp::SelectFont(family, weight, slant));
    }

    fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
        self.ops.push(CanvasOp::SetFontSize(size));
    }

    fn measure_text(&self, text: &str) -> (f64, f64) {
        self.font.measure(text)
    }

    fn show_text(&mut self, text: &str) {
        let (x, y) = self.point.unwrap_or_default();
        let (width, _) = self.font.measure(text);
        self.texts.push(PlacedText {
            x,
            y,
            text: text.to_string(),
            size: self.font.size,
            color: self.color.unwrap_or(Rgb::gray(0.0)),
        });
        self.point = Some((x + width, y));
        self.ops.push(CanvasOp::ShowText(text.to_string()));
    }

    fn show_page(&mut self) {
        self.point = None;
        self.ops.push(CanvasOp::ShowPage);
    }
}
