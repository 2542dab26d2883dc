//! Per-week classification
//!
//! Decides the fill color, border weight and milestone tags of one week.
//! Base fill is chosen first (white, or light gray for a highlighted week),
//! then the darken transform runs on top of it. Milestones only touch the
//! border and the tags.

use crate::constants::{
    DAYS_PER_KILOWEEK, DAYS_PER_WEEK, SECONDS_PER_DAY, SECONDS_PER_GIGASECOND,
};
use crate::dates::is_current_week;
use crate::types::{DarkenStyle, Palette, Result, Rgb};
use chrono::NaiveDate;

/// Outline weight of a week box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderWeight {
    #[default]
    Normal,
    /// Milestone weeks (1000-week blocks, gigaseconds)
    Heavy,
}

/// One classified week. Produced while walking a row, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekCell {
    /// First day of the week
    pub date: NaiveDate,
    pub fill: Rgb,
    pub border: BorderWeight,
    /// Milestone annotations in the order they fired, e.g. `["1k", "1Gs"]`
    pub tags: Vec<String>,
    pub highlighted: bool,
    pub darkened: bool,
}

/// Completed `block`-sized intervals at `elapsed`, if the week ending at
/// `elapsed` crossed into a new one.
fn crossed_block(elapsed: i64, week: i64, block: i64) -> Option<i64> {
    let count = elapsed.div_euclid(block);
    if (elapsed - week).div_euclid(block) < count && count > 0 {
        Some(count)
    } else {
        None
    }
}

/// Classifies weeks for one run
#[derive(Debug, Clone)]
pub struct WeekClassifier<'a> {
    pub birth_date: NaiveDate,
    pub darken_until: Option<NaiveDate>,
    pub highlight_dates: &'a [NaiveDate],
    pub darken_style: DarkenStyle,
    pub palette: Palette,
}

impl<'a> WeekClassifier<'a> {
    pub fn new(
        birth_date: NaiveDate,
        darken_until: Option<NaiveDate>,
        highlight_dates: &'a [NaiveDate],
    ) -> Self {
        Self {
            birth_date,
            darken_until,
            highlight_dates,
            darken_style: DarkenStyle::default(),
            palette: Palette::default(),
        }
    }

    pub fn with_darken_style(mut self, style: DarkenStyle) -> Self {
        self.darken_style = style;
        self
    }

    fn days_since_birth(&self, date: NaiveDate) -> i64 {
        (date - self.birth_date).num_days()
    }

    /// Number of completed 7000-day blocks, if this week crossed one
    pub fn kiloweek_count(&self, date: NaiveDate) -> Option<i64> {
        crossed_block(
            self.days_since_birth(date),
            DAYS_PER_WEEK,
            DAYS_PER_KILOWEEK,
        )
    }

    /// Number of completed gigaseconds, if this week crossed one
    pub fn gigasecond_count(&self, date: NaiveDate) -> Option<i64> {
        crossed_block(
            self.days_since_birth(date) * SECONDS_PER_DAY,
            DAYS_PER_WEEK * SECONDS_PER_DAY,
            SECONDS_PER_GIGASECOND,
        )
    }

    /// Whether the week starting at `date` contains one of the highlight dates
    pub fn is_highlighted(&self, date: NaiveDate) -> Result<bool> {
        use chrono::Datelike;
        for highlight in self.highlight_dates {
            if is_current_week(
                date,
                highlight.day(),
                highlight.month(),
                Some(highlight.year()),
            )? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether the week starting at `date` falls before the darken-until date
    pub fn is_darkened(&self, date: NaiveDate) -> bool {
        self.darken_until.is_some_and(|until| date < until)
    }

    /// Classify the week starting at `date`
    pub fn classify(&self, date: NaiveDate) -> Result<WeekCell> {
        let highlighted = self.is_highlighted(date)?;
        let mut fill = if highlighted {
            self.palette.light_gray
        } else {
            self.palette.paper
        };

        let mut border = BorderWeight::Normal;
        let mut tags = Vec::new();

        if let Some(count) = self.kiloweek_count(date) {
            tags.push(format!("{count}k"));
            border = BorderWeight::Heavy;
        }
        if let Some(count) = self.gigasecond_count(date) {
            tags.push(format!("{count}Gs"));
            border = BorderWeight::Heavy;
        }

        let darkened = self.is_darkened(date);
        if darkened {
            fill = self.darken_style.apply(fill, self.palette.paper);
        }

        Ok(WeekCell {
            date,
            fill,
            border,
            tags,
            highlighted,
            darkened,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_week_is_not_a_milestone() {
        assert_eq!(crossed_block(0, 7, 7000), None);
        assert_eq!(crossed_block(6993, 7, 7000), None);
        assert_eq!(crossed_block(7000, 7, 7000), Some(1));
        assert_eq!(crossed_block(7007, 7, 7000), None);
        assert_eq!(crossed_block(14_000, 7, 7000), Some(2));
    }
}
