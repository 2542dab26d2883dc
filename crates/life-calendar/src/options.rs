use crate::constants::{DEFAULT_A_SIZE, DEFAULT_AGE, DEFAULT_TITLE, MAX_A_SIZE};
use crate::fonts::FontFamily;
use crate::layout::{LayoutRatios, PageGeometry, resolve_with};
use crate::types::*;
use crate::week::WeekClassifier;
use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything one calendar run needs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarOptions {
    // Whose life
    pub birth_date: NaiveDate,

    /// Number of rows (years)
    #[cfg_attr(feature = "serde", serde(default = "default_age"))]
    pub age: u32,

    // Week styling
    #[cfg_attr(feature = "serde", serde(default))]
    pub darken_until: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight_dates: Vec<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub darken_style: DarkenStyle,

    // Title block
    #[cfg_attr(feature = "serde", serde(default = "default_title"))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: Option<String>,

    // Page
    /// ISO 216 size exponent: 0 for A0, 1 for A1, ...
    #[cfg_attr(feature = "serde", serde(default = "default_a_size"))]
    pub a_size: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_family: FontFamily,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratios: LayoutRatios,
}

#[cfg(feature = "serde")]
fn default_age() -> u32 {
    DEFAULT_AGE
}

#[cfg(feature = "serde")]
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[cfg(feature = "serde")]
fn default_a_size() -> u32 {
    DEFAULT_A_SIZE
}

impl CalendarOptions {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            age: DEFAULT_AGE,
            darken_until: None,
            highlight_dates: Vec::new(),
            darken_style: DarkenStyle::default(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: None,
            a_size: DEFAULT_A_SIZE,
            font_family: FontFamily::default(),
            ratios: LayoutRatios::default(),
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CalendarError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CalendarError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let bounds = self.ratios.row_bounds;
        bounds.validate()?;
        if !bounds.contains(self.age) {
            return Err(CalendarError::InvalidRowCount {
                rows: self.age,
                min: bounds.min,
                max: bounds.max,
            });
        }

        if self.a_size > MAX_A_SIZE {
            return Err(CalendarError::Config(format!(
                "Paper size must be A0 to A{}, got A{}",
                MAX_A_SIZE, self.a_size
            )));
        }

        if self.title.trim().is_empty() {
            return Err(CalendarError::Config("Title must not be empty".to_string()));
        }

        if let DarkenStyle::Additive { delta } = self.darken_style {
            let channels = [delta.r, delta.g, delta.b];
            if channels.iter().any(|c| !(-1.0..=1.0).contains(c)) {
                return Err(CalendarError::Config(format!(
                    "Darken delta channels must lie in [-1, 1], got {:?}",
                    channels
                )));
            }
        }

        Ok(())
    }

    /// Resolve the page geometry for these options
    pub fn geometry(&self) -> Result<PageGeometry> {
        resolve_with(&self.ratios, self.a_size, self.age)
    }

    /// Week classifier for these options
    pub fn classifier(&self) -> WeekClassifier<'_> {
        WeekClassifier::new(self.birth_date, self.darken_until, &self.highlight_dates)
            .with_darken_style(self.darken_style)
    }
}
