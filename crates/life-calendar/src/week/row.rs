//! Row walking
//!
//! A row starts at the cursor and advances one week per cell until the
//! cursor reaches the week holding the next birthday. Depending on how the
//! weekdays drift against the calendar that takes 52 or 53 weeks.

use crate::dates::is_current_week;
use crate::types::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};

use super::{WeekCell, WeekClassifier};

/// Upper bound on cells in one row; a real row never exceeds 53
const MAX_ROW_CELLS: usize = 54;

/// The cells of one row plus the cursor the next row starts at
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    pub start: NaiveDate,
    pub cells: Vec<WeekCell>,
    /// First week of the next row: the next birthday week
    pub next_cursor: NaiveDate,
}

impl RowPlan {
    /// All tags of the row, left to right
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .flat_map(|cell| cell.tags.iter().map(String::as_str))
    }
}

impl<'a> WeekClassifier<'a> {
    /// Walk one row starting at `cursor`.
    ///
    /// The first cell is always emitted, so the row's own birthday week
    /// never ends it.
    pub fn walk_row(&self, cursor: NaiveDate) -> Result<RowPlan> {
        let birthday_day = self.birth_date.day();
        let birthday_month = self.birth_date.month();

        let mut date = cursor;
        let mut cells = Vec::with_capacity(53);

        loop {
            cells.push(self.classify(date)?);
            date = date
                .checked_add_days(Days::new(7))
                .ok_or_else(|| CalendarError::Config(format!("date overflow after {date}")))?;

            if is_current_week(date, birthday_day, birthday_month, None)? {
                break;
            }
            if cells.len() >= MAX_ROW_CELLS {
                return Err(CalendarError::Config(format!(
                    "row starting {cursor} never reached a birthday week"
                )));
            }
        }

        Ok(RowPlan {
            start: cursor,
            cells,
            next_cursor: date,
        })
    }

    /// Walk `rows` consecutive rows from the birth date
    pub fn walk_rows(&self, rows: u32) -> RowWalk<'_, 'a> {
        RowWalk {
            classifier: self,
            cursor: self.birth_date,
            remaining: rows,
        }
    }
}

/// Iterator over consecutive rows, each starting where the previous ended
pub struct RowWalk<'c, 'a> {
    classifier: &'c WeekClassifier<'a>,
    cursor: NaiveDate,
    remaining: u32,
}

impl Iterator for RowWalk<'_, '_> {
    type Item = Result<RowPlan>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.classifier.walk_row(self.cursor) {
            Ok(plan) => {
                self.cursor = plan.next_cursor;
                Some(Ok(plan))
            }
            Err(err) => {
                self.remaining = 0;
                Some(Err(err))
            }
        }
    }
}
