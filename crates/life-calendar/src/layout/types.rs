//! Layout data types for the calendar grid
//!
//! All lengths are PDF points in a y-down coordinate space with the
//! origin at the top-left corner of the page.

use crate::constants::*;
use crate::types::{CalendarError, Result};

/// Inclusive range of accepted row counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowBounds {
    pub min: u32,
    pub max: u32,
}

impl Default for RowBounds {
    fn default() -> Self {
        Self {
            min: MIN_AGE,
            max: MAX_AGE,
        }
    }
}

impl RowBounds {
    pub fn contains(&self, rows: u32) -> bool {
        (self.min..=self.max).contains(&rows)
    }

    /// A usable range holds at least one row and is not empty
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min > self.max {
            return Err(CalendarError::Config(format!(
                "Row bounds must satisfy 1 <= min <= max, got {}..={}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Visual tuning surface for the geometry resolver.
///
/// Box-relative ratios are fractions of the cell bound, page-relative
/// ratios are fractions of the page height (top, bottom) or width (side).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRatios {
    pub box_margin: f64,
    pub gap_size: f64,
    pub line_width: f64,
    pub corner_radius: f64,
    pub top_margin: f64,
    pub min_bottom_margin: f64,
    pub min_side_margin: f64,
    pub gap_x_interval: u32,
    pub gap_y_interval: u32,
    pub row_bounds: RowBounds,
}

impl Default for LayoutRatios {
    fn default() -> Self {
        Self {
            box_margin: BOX_MARGIN_RATIO,
            gap_size: BOX_MARGIN_RATIO,
            line_width: (1.0 - BOX_MARGIN_RATIO) / 6.0,
            corner_radius: (1.0 - BOX_MARGIN_RATIO) / 5.0,
            top_margin: TOP_MARGIN_RATIO,
            min_bottom_margin: MIN_BOTTOM_MARGIN_RATIO,
            min_side_margin: MIN_SIDE_MARGIN_RATIO,
            gap_x_interval: GAP_X_INTERVAL,
            gap_y_interval: GAP_Y_INTERVAL,
            row_bounds: RowBounds::default(),
        }
    }
}

/// Font sizes, proportional to the page height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub title_size: f64,
    pub subtitle_size: f64,
    pub label_size: f64,
}

/// Resolved page geometry. Computed once per run and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub columns: u32,
    pub rows: u32,
    /// Number of extra gaps across a row
    pub x_gaps: u32,
    /// Number of extra gaps down the grid
    pub y_gaps: u32,
    pub gap_x_interval: u32,
    pub gap_y_interval: u32,
    /// Side of the square allotted to one week, margin included
    pub cell_bound: f64,
    pub cell_margin: f64,
    /// Visible box side (`cell_bound - cell_margin`)
    pub cell_size: f64,
    pub gap_size: f64,
    pub corner_radius: f64,
    pub border_width: f64,
    pub heavy_border_width: f64,
    /// Left edge of the grid; the grid is centered horizontally
    pub side_margin: f64,
    /// Top edge of the grid
    pub top_margin: f64,
    pub typography: Typography,
}

impl PageGeometry {
    /// Distance from one box's left edge to the next
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.cell_margin
    }

    /// Whether an extra horizontal gap follows column `col` (0-based)
    pub fn gap_after_column(&self, col: u32) -> bool {
        col % self.gap_x_interval == self.gap_x_interval - 1
    }

    /// Whether an extra vertical gap follows row `row` (0-based)
    pub fn gap_after_row(&self, row: u32) -> bool {
        row % self.gap_y_interval == self.gap_y_interval - 1
    }

    /// Left edge of the box in column `col`
    pub fn column_x(&self, col: u32) -> f64 {
        let gaps = col / self.gap_x_interval;
        self.side_margin + col as f64 * self.pitch() + gaps as f64 * self.gap_size
    }

    /// Top edge of the boxes in row `row`
    pub fn row_y(&self, row: u32) -> f64 {
        let gaps = row / self.gap_y_interval;
        self.top_margin + row as f64 * self.pitch() + gaps as f64 * self.gap_size
    }

    /// Width of the 52-column grid, from the first box's left edge to the
    /// last box's right edge
    pub fn grid_width(&self) -> f64 {
        self.column_x(self.columns - 1) + self.cell_size - self.side_margin
    }

    /// Height of the grid, from the first row's top edge to the last row's
    /// bottom edge
    pub fn grid_height(&self) -> f64 {
        self.row_y(self.rows - 1) + self.cell_size - self.top_margin
    }

    /// Right edge of the grid
    pub fn horizontal_extent(&self) -> f64 {
        self.side_margin + self.grid_width()
    }

    /// Bottom edge of the grid
    pub fn vertical_extent(&self) -> f64 {
        self.top_margin + self.grid_height()
    }
}
