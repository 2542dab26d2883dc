//! Date parsing, formatting and the anniversary-week test

use crate::types::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Accepted textual date formats, tried in order
pub const DATE_FORMATS: [&str; 4] = ["%Y/%m/%d", "%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

const ROMAN_MONTHS: [&str; 12] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii",
];

/// Parse a date in YMD or DMY order, separated by `/` or `-`
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CalendarError::InvalidDateFormat(text.to_string()))
}

/// Parse a darken-until date, where `"today"` resolves against `today`
pub fn parse_darken_until(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    if text.trim().eq_ignore_ascii_case("today") {
        Ok(today)
    } else {
        parse_date(text)
    }
}

/// Parse a comma-separated list of dates. Empty entries are skipped.
pub fn parse_highlight_dates(text: &str) -> Result<Vec<NaiveDate>> {
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_date)
        .collect()
}

/// Row label: zero-padded day, lowercase roman month, year (e.g. `"01 iii 2019"`)
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        ROMAN_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Header label for the first column, e.g. `"saturdays"`
pub fn weekday_plural(date: NaiveDate) -> String {
    let name = match date.weekday() {
        chrono::Weekday::Mon => "monday",
        chrono::Weekday::Tue => "tuesday",
        chrono::Weekday::Wed => "wednesday",
        chrono::Weekday::Thu => "thursday",
        chrono::Weekday::Fri => "friday",
        chrono::Weekday::Sat => "saturday",
        chrono::Weekday::Sun => "sunday",
    };
    format!("{name}s")
}

/// The occurrence of `day`/`month` in `year`.
///
/// February 29th falls back to the 28th in common years; any other
/// impossible combination is an error.
pub fn anniversary_in(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, month, 28)
            } else {
                None
            }
        })
        .ok_or(CalendarError::InvalidCalendarDate { year, month, day })
}

/// Whether the week `[week_start, week_start + 7 days)` contains
/// `day`/`month`.
///
/// With `year` unset both the week's own year and the following one are
/// tried, so a week straddling New Year still matches early-January dates.
pub fn is_current_week(
    week_start: NaiveDate,
    day: u32,
    month: u32,
    year: Option<i32>,
) -> Result<bool> {
    let week_end = week_start
        .checked_add_days(Days::new(7))
        .ok_or_else(|| CalendarError::Config(format!("date overflow after {week_start}")))?;

    let candidates = match year {
        Some(year) => vec![year],
        None => vec![week_start.year(), week_start.year() + 1],
    };

    for candidate in candidates {
        let date = anniversary_in(candidate, month, day)?;
        if week_start <= date && date < week_end {
            return Ok(true);
        }
    }

    Ok(false)
}
