//! Geometry resolution
//!
//! Turns a paper-size exponent and a row count into a [`PageGeometry`].
//! The cell bound is the largest square that lets the grid fit both the
//! horizontal and the vertical space available; the looser axis keeps the
//! leftover as extra margin.

use crate::constants::{A0_HEIGHT_M, LABEL_FONT_DIVISOR, MAX_A_SIZE, NUM_COLUMNS};
use crate::constants::{SUBTITLE_FONT_DIVISOR, TITLE_FONT_DIVISOR, mm_to_pt};
use crate::types::{CalendarError, Result};

use super::{LayoutRatios, PageGeometry, Typography};

// =============================================================================
// Page Size
// =============================================================================

/// Page dimensions in points for ISO 216 size `A{a_size}` (portrait).
///
/// Each step halves the sheet area, dividing the height by √2.
pub fn page_size_pt(a_size: u32) -> (f64, f64) {
    let height_m = A0_HEIGHT_M / std::f64::consts::SQRT_2.powf(a_size as f64);
    let height = mm_to_pt(height_m * 1000.0);
    (height / std::f64::consts::SQRT_2, height)
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolve the page geometry with the default ratios.
pub fn resolve(a_size: u32, rows: u32) -> Result<PageGeometry> {
    resolve_with(&LayoutRatios::default(), a_size, rows)
}

/// Resolve the page geometry with custom ratios.
///
/// Fails with [`CalendarError::InvalidRowCount`] when `rows` is outside
/// `ratios.row_bounds`, and with [`CalendarError::Config`] for unusable
/// bounds or a sheet smaller than A10. Pure and deterministic otherwise.
pub fn resolve_with(ratios: &LayoutRatios, a_size: u32, rows: u32) -> Result<PageGeometry> {
    if a_size > MAX_A_SIZE {
        return Err(CalendarError::Config(format!(
            "Paper size A{} is smaller than A{}",
            a_size, MAX_A_SIZE
        )));
    }
    let bounds = ratios.row_bounds;
    bounds.validate()?;
    if !bounds.contains(rows) {
        return Err(CalendarError::InvalidRowCount {
            rows,
            min: bounds.min,
            max: bounds.max,
        });
    }
    if ratios.gap_x_interval == 0 || ratios.gap_y_interval == 0 {
        return Err(CalendarError::Config(
            "Gap intervals must be at least 1".to_string(),
        ));
    }

    let (page_width, page_height) = page_size_pt(a_size);
    let columns = NUM_COLUMNS;

    let x_gaps = (columns - 1) / ratios.gap_x_interval;
    let y_gaps = (rows - 1) / ratios.gap_y_interval;

    // Grid size in cell bounds; the last box's margin doesn't extend the grid
    let grid_ratio_x = columns as f64 - ratios.box_margin + x_gaps as f64 * ratios.gap_size;
    let grid_ratio_y = rows as f64 - ratios.box_margin + y_gaps as f64 * ratios.gap_size;

    let top_margin = page_height * ratios.top_margin;
    let min_bottom_margin = page_height * ratios.min_bottom_margin;
    let min_side_margin = page_width * ratios.min_side_margin;

    let max_bound_x = (page_width - 2.0 * min_side_margin) / grid_ratio_x;
    let max_bound_y = (page_height - top_margin - min_bottom_margin) / grid_ratio_y;
    let cell_bound = max_bound_x.min(max_bound_y);

    let cell_margin = ratios.box_margin * cell_bound;
    let border_width = ratios.line_width * cell_bound;

    let geometry = PageGeometry {
        page_width,
        page_height,
        columns,
        rows,
        x_gaps,
        y_gaps,
        gap_x_interval: ratios.gap_x_interval,
        gap_y_interval: ratios.gap_y_interval,
        cell_bound,
        cell_margin,
        cell_size: cell_bound - cell_margin,
        gap_size: ratios.gap_size * cell_bound,
        corner_radius: ratios.corner_radius * cell_bound,
        border_width,
        heavy_border_width: 2.0 * border_width,
        // Recentered on the chosen bound, not the minimum side margin
        side_margin: (page_width - cell_bound * grid_ratio_x) / 2.0,
        top_margin,
        typography: Typography {
            title_size: page_height / TITLE_FONT_DIVISOR,
            subtitle_size: page_height / SUBTITLE_FONT_DIVISOR,
            label_size: page_height / LABEL_FONT_DIVISOR,
        },
    };

    log::debug!(
        "Resolved A{} geometry: {:.1}x{:.1}pt, {} rows, cell bound {:.3}pt, side margin {:.1}pt",
        a_size,
        page_width,
        page_height,
        rows,
        cell_bound,
        geometry.side_margin
    );

    Ok(geometry)
}
