use crate::options::CalendarOptions;
use crate::types::*;
use chrono::NaiveDate;

/// A milestone week and its tag
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub date: NaiveDate,
    pub tag: String,
}

/// Summary of a calendar run
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarStatistics {
    pub rows: u32,
    pub total_weeks: usize,
    /// Rows holding 53 weeks
    pub long_rows: usize,
    pub darkened_weeks: usize,
    pub highlighted_weeks: usize,
    pub milestones: Vec<Milestone>,
    pub page_width_pt: f64,
    pub page_height_pt: f64,
    /// First day after the last row
    pub end_date: NaiveDate,
}

/// Walk every row the way the composer does, without drawing
pub fn calculate_statistics(options: &CalendarOptions) -> Result<CalendarStatistics> {
    options.validate()?;
    let geometry = options.geometry()?;
    let classifier = options.classifier();

    let mut total_weeks = 0;
    let mut long_rows = 0;
    let mut darkened_weeks = 0;
    let mut highlighted_weeks = 0;
    let mut milestones = Vec::new();
    let mut end_date = options.birth_date;

    for plan in classifier.walk_rows(geometry.rows) {
        let plan = plan?;
        total_weeks += plan.cells.len();
        if plan.cells.len() > geometry.columns as usize {
            long_rows += 1;
        }
        for cell in &plan.cells {
            if cell.darkened {
                darkened_weeks += 1;
            }
            if cell.highlighted {
                highlighted_weeks += 1;
            }
            milestones.extend(cell.tags.iter().map(|tag| Milestone {
                date: cell.date,
                tag: tag.clone(),
            }));
        }
        end_date = plan.next_cursor;
    }

    Ok(CalendarStatistics {
        rows: geometry.rows,
        total_weeks,
        long_rows,
        darkened_weeks,
        highlighted_weeks,
        milestones,
        page_width_pt: geometry.page_width,
        page_height_pt: geometry.page_height,
        end_date,
    })
}
