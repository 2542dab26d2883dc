//! Font family resolution and approximate text metrics
//!
//! Text is set in the PDF standard Type1 faces, which every viewer can
//! render without embedding. Widths are estimated per character class.

use crate::types::{CalendarError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    Helvetica,
    #[default]
    Times,
    Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Average advance widths, as fractions of the font size
struct ClassWidths {
    upper: f64,
    lower: f64,
    digit: f64,
    space: f64,
    other: f64,
}

const HELVETICA_WIDTHS: ClassWidths = ClassWidths {
    upper: 0.68,
    lower: 0.52,
    digit: 0.556,
    space: 0.278,
    other: 0.40,
};

const TIMES_WIDTHS: ClassWidths = ClassWidths {
    upper: 0.68,
    lower: 0.46,
    digit: 0.5,
    space: 0.25,
    other: 0.36,
};

const COURIER_WIDTHS: ClassWidths = ClassWidths {
    upper: 0.6,
    lower: 0.6,
    digit: 0.6,
    space: 0.6,
    other: 0.6,
};

/// Extra advance of the bold faces over the regular ones
const BOLD_WIDTH_FACTOR: f64 = 1.08;

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Helvetica,
        FontFamily::Times,
        FontFamily::Courier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Times => "Times",
            FontFamily::Courier => "Courier",
        }
    }

    /// PostScript name of the standard face for this style
    pub fn base_font(self, weight: FontWeight, slant: FontSlant) -> &'static str {
        use FontFamily::{Courier, Helvetica, Times};
        let bold = weight == FontWeight::Bold;
        let italic = slant == FontSlant::Italic;
        match (self, bold, italic) {
            (Helvetica, false, false) => "Helvetica",
            (Helvetica, true, false) => "Helvetica-Bold",
            (Helvetica, false, true) => "Helvetica-Oblique",
            (Helvetica, true, true) => "Helvetica-BoldOblique",
            (Times, false, false) => "Times-Roman",
            (Times, true, false) => "Times-Bold",
            (Times, false, true) => "Times-Italic",
            (Times, true, true) => "Times-BoldItalic",
            (Courier, false, false) => "Courier",
            (Courier, true, false) => "Courier-Bold",
            (Courier, false, true) => "Courier-Oblique",
            (Courier, true, true) => "Courier-BoldOblique",
        }
    }

    /// Height of capitals and digits, as a fraction of the font size
    fn cap_height(self) -> f64 {
        match self {
            FontFamily::Helvetica => 0.718,
            FontFamily::Times => 0.662,
            FontFamily::Courier => 0.571,
        }
    }

    fn widths(self) -> &'static ClassWidths {
        match self {
            FontFamily::Helvetica => &HELVETICA_WIDTHS,
            FontFamily::Times => &TIMES_WIDTHS,
            FontFamily::Courier => &COURIER_WIDTHS,
        }
    }

    /// Estimated `(width, height)` of `text` set at `size` points
    pub fn measure(self, text: &str, size: f64, weight: FontWeight) -> (f64, f64) {
        let widths = self.widths();
        let em: f64 = text
            .chars()
            .map(|ch| match ch {
                'A'..='Z' => widths.upper,
                'a'..='z' => widths.lower,
                '0'..='9' => widths.digit,
                ' ' => widths.space,
                _ => widths.other,
            })
            .sum();
        let factor = match weight {
            FontWeight::Bold if self != FontFamily::Courier => BOLD_WIDTH_FACTOR,
            _ => 1.0,
        };
        let height = if text.is_empty() {
            0.0
        } else {
            self.cap_height() * size
        };
        (em * size * factor, height)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = CalendarError;

    /// Accepts the family names plus common aliases, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "helvetica" | "arial" | "sans" | "sans-serif" => Ok(FontFamily::Helvetica),
            "times" | "times new roman" | "times-roman" | "serif" => Ok(FontFamily::Times),
            "courier" | "courier new" | "mono" | "monospace" => Ok(FontFamily::Courier),
            _ => Err(CalendarError::NoRenderableFont(s.to_string())),
        }
    }
}
