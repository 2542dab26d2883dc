//! Page composition
//!
//! Lays out the title block, the column header and one row per year on a
//! [`Canvas`]. Everything is streamed: rows are classified and drawn one at
//! a time, nothing of the grid is kept.

use crate::dates::{format_date, weekday_plural};
use crate::fonts::{FontFamily, FontSlant, FontWeight};
use crate::layout::PageGeometry;
use crate::options::CalendarOptions;
use crate::types::{Palette, Result, Rgb};
use crate::week::{BorderWeight, RowPlan};
use std::f64::consts::FRAC_PI_2;

use super::Canvas;

/// Validate `options`, resolve the geometry and draw the whole page.
///
/// Nothing is drawn when validation fails.
pub fn render_calendar<C: Canvas>(options: &CalendarOptions, canvas: &mut C) -> Result<()> {
    options.validate()?;
    let geometry = options.geometry()?;
    compose(&geometry, options, canvas)
}

/// Draw the page for an already resolved geometry
pub fn compose<C: Canvas>(
    geometry: &PageGeometry,
    options: &CalendarOptions,
    canvas: &mut C,
) -> Result<()> {
    let palette = Palette::default();
    let family = options.font_family;

    // Background
    canvas.set_color(palette.paper);
    canvas.rectangle(0.0, 0.0, geometry.page_width, geometry.page_height);
    canvas.fill();

    draw_title(canvas, geometry, options, &palette);
    draw_column_header(canvas, geometry, options, &palette);

    let classifier = options.classifier();
    let mut pos_y = geometry.top_margin;
    let mut weeks = 0usize;

    for (row, plan) in (0..geometry.rows).zip(classifier.walk_rows(geometry.rows)) {
        let plan = plan?;
        weeks += plan.cells.len();
        draw_row(canvas, geometry, &plan, pos_y, family, &palette);

        pos_y += geometry.pitch();
        if geometry.gap_after_row(row) {
            pos_y += geometry.gap_size;
        }
    }

    log::debug!("Composed {} rows, {} weeks", geometry.rows, weeks);

    canvas.show_page();
    Ok(())
}

// =============================================================================
// Title Block
// =============================================================================

fn draw_title<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    options: &CalendarOptions,
    palette: &Palette,
) {
    let center_x = geometry.page_width / 2.0;
    let baseline = geometry.top_margin / 2.0;

    canvas.select_font(options.font_family, FontWeight::Bold, FontSlant::Normal);
    canvas.set_color(palette.ink);
    canvas.set_font_size(geometry.typography.title_size);
    let (title_width, title_height) = canvas.measure_text(&options.title);
    canvas.move_to(center_x - title_width / 2.0, baseline);
    canvas.show_text(&options.title);

    if let Some(subtitle) = &options.subtitle {
        canvas.set_color(palette.light_gray);
        canvas.set_font_size(geometry.typography.subtitle_size);
        let (width, height) = canvas.measure_text(subtitle);
        canvas.move_to(
            center_x - width / 2.0,
            baseline + title_height - height / 2.0,
        );
        canvas.show_text(subtitle);
    }
}

// =============================================================================
// Column Header
// =============================================================================

/// Weekday label over the first column, then every fourth week number
/// unless it would run into the label
fn draw_column_header<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    options: &CalendarOptions,
    palette: &Palette,
) {
    let baseline = geometry.top_margin - geometry.cell_size;

    canvas.set_color(palette.dark_gray);
    canvas.set_font_size(geometry.typography.label_size);
    canvas.select_font(options.font_family, FontWeight::Normal, FontSlant::Normal);

    let label = weekday_plural(options.birth_date);
    let (label_width, _) = canvas.measure_text(&label);
    canvas.move_to(geometry.side_margin, baseline);
    canvas.show_text(&label);
    let label_end = geometry.side_margin + label_width + geometry.cell_margin;

    for col in 1..geometry.columns {
        if !geometry.gap_after_column(col) {
            continue;
        }
        let text = (col + 1).to_string();
        let (width, _) = canvas.measure_text(&text);
        let x = geometry.column_x(col) + geometry.cell_size / 2.0 - width / 2.0;
        if x > label_end {
            canvas.move_to(x, baseline);
            canvas.show_text(&text);
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

/// Draw a row's date label, its boxes and the milestone tags after them
pub fn draw_row<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    plan: &RowPlan,
    pos_y: f64,
    family: FontFamily,
    palette: &Palette,
) {
    canvas.set_font_size(geometry.typography.label_size);
    canvas.select_font(family, FontWeight::Normal, FontSlant::Normal);
    canvas.set_color(palette.dark_gray);
    let label = format_date(plan.start);
    let (width, height) = canvas.measure_text(&label);
    canvas.move_to(
        geometry.side_margin - width - geometry.cell_size,
        pos_y + geometry.cell_size / 2.0 + height / 2.0,
    );
    canvas.show_text(&label);

    let mut pos_x = geometry.side_margin;
    for (week, cell) in (0u32..).zip(&plan.cells) {
        let line_width = match cell.border {
            BorderWeight::Normal => geometry.border_width,
            BorderWeight::Heavy => geometry.heavy_border_width,
        };
        draw_box(canvas, geometry, pos_x, pos_y, cell.fill, line_width, palette);

        pos_x += geometry.pitch();
        if geometry.gap_after_column(week) {
            pos_x += geometry.gap_size;
        }
    }

    for tag in plan.tags() {
        canvas.set_color(palette.dark_gray);
        let (width, height) = canvas.measure_text(tag);
        canvas.move_to(pos_x, pos_y + (geometry.cell_size + height) / 2.0);
        pos_x += width + geometry.gap_size;
        canvas.show_text(tag);
    }
}

/// Rounded box: four quarter-circle corners, stroked in ink, then filled
pub fn draw_box<C: Canvas>(
    canvas: &mut C,
    geometry: &PageGeometry,
    x: f64,
    y: f64,
    fill: Rgb,
    line_width: f64,
    palette: &Palette,
) {
    let radius = geometry.corner_radius;
    let (x1, x2) = (x, x + geometry.cell_size);
    let (y1, y2) = (y, y + geometry.cell_size);

    // (center x, center y, start quadrant, end quadrant), clockwise from top-left
    let corners = [
        (x1 + radius, y1 + radius, 2.0, 3.0),
        (x2 - radius, y1 + radius, 3.0, 4.0),
        (x2 - radius, y2 - radius, 0.0, 1.0),
        (x1 + radius, y2 - radius, 1.0, 2.0),
    ];

    canvas.set_line_width(line_width);
    canvas.set_color(palette.ink);
    canvas.new_sub_path();
    for (cx, cy, start, end) in corners {
        canvas.arc(cx, cy, radius, start * FRAC_PI_2, end * FRAC_PI_2);
    }
    canvas.close_path();
    canvas.stroke_preserve();

    canvas.set_color(fill);
    canvas.fill();
}
