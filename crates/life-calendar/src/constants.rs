//! Shared constants for life calendar generation
//!
//! This module centralizes magic numbers and constants used throughout
//! geometry resolution, week classification and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per PDF point (1 inch = 72 points, 1 inch = 25.4mm)
pub const MM_PER_PT: f64 = 0.3528;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

// =============================================================================
// ISO 216 Sheet
// =============================================================================

/// Height of an A0 sheet in meters: 2^(1/4), so that the area is exactly 1m²
pub const A0_HEIGHT_M: f64 = 1.189_207_115_002_721;

/// Default paper size exponent (A2)
pub const DEFAULT_A_SIZE: u32 = 2;

/// Smallest accepted sheet (A10)
pub const MAX_A_SIZE: u32 = 10;

// =============================================================================
// Grid
// =============================================================================

/// One column per week of a year
pub const NUM_COLUMNS: u32 = 52;

/// An extra gap is inserted after every fourth column
pub const GAP_X_INTERVAL: u32 = 4;

/// An extra gap is inserted after every tenth row
pub const GAP_Y_INTERVAL: u32 = 10;

/// Default number of rows (years)
pub const DEFAULT_AGE: u32 = 100;

/// Smallest accepted number of rows
pub const MIN_AGE: u32 = 80;

/// Largest accepted number of rows
pub const MAX_AGE: u32 = 150;

// =============================================================================
// Ratios (relative to the cell bound)
// =============================================================================

/// Space between neighbouring boxes
pub const BOX_MARGIN_RATIO: f64 = 35.0 / 100.0;

/// Top whitespace reserved for title and subtitle (fraction of page height)
pub const TOP_MARGIN_RATIO: f64 = 0.10;

/// Minimum bottom whitespace (fraction of page height)
pub const MIN_BOTTOM_MARGIN_RATIO: f64 = 0.05;

/// Minimum whitespace on each side (fraction of page width)
pub const MIN_SIDE_MARGIN_RATIO: f64 = 0.10;

// =============================================================================
// Typography (page height divisors)
// =============================================================================

/// Title font size: ≈ 80pt at A1
pub const TITLE_FONT_DIVISOR: f64 = 30.0;

/// Subtitle font size: ≈ 20pt at A1
pub const SUBTITLE_FONT_DIVISOR: f64 = 120.0;

/// Labels and tags: ≈ 12pt at A1
pub const LABEL_FONT_DIVISOR: f64 = 200.0;

// =============================================================================
// Milestones
// =============================================================================

/// Days in one "1000 weeks" block
pub const DAYS_PER_KILOWEEK: i64 = 7_000;

/// Seconds in one gigasecond block
pub const SECONDS_PER_GIGASECOND: i64 = 1_000_000_000;

/// Seconds in one calendar day (no leap seconds)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days between consecutive week boxes
pub const DAYS_PER_WEEK: i64 = 7;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f64 = 0.552284749831;

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_TITLE: &str = "LIFE CALENDAR";

pub const DEFAULT_FILENAME: &str = "life_calendar.pdf";
