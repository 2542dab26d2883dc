//! Rendering modules for the calendar page
//!
//! This module handles everything that touches a drawing surface:
//! - The `Canvas` capability and an in-memory recording implementation
//! - PDF content stream generation
//! - Page composition (title, header, rows, boxes, tags)

mod canvas;
mod compose;
mod pdf;

pub use canvas::{Canvas, CanvasOp, PlacedText, RecordedBox, RecordingCanvas};
pub use compose::*;
pub use pdf::PdfCanvas;
