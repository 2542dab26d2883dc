use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Incorrect date format '{0}': must be DMY or YMD with / or -")]
    InvalidDateFormat(String),
    #[error("Invalid age {rows}, must be between {min} and {max}")]
    InvalidRowCount { rows: u32, min: u32, max: u32 },
    #[error("Invalid calendar date: day {day} of month {month} in {year}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    #[error("No renderable font family matches '{0}'")]
    NoRenderableFont(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

/// An RGB color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// Add `delta` channel-wise, clamping each channel back into range
    pub fn offset(self, delta: Rgb) -> Self {
        Self {
            r: (self.r + delta.r).clamp(0.0, 1.0),
            g: (self.g + delta.g).clamp(0.0, 1.0),
            b: (self.b + delta.b).clamp(0.0, 1.0),
        }
    }
}

/// Colors used across the poster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Box outlines and title text
    pub ink: Rgb,
    /// Page background and default box fill
    pub paper: Rgb,
    /// Highlighted weeks and subtitle text
    pub light_gray: Rgb,
    /// Row labels, week numbers and tags
    pub dark_gray: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: Rgb::gray(0.2),
            paper: Rgb::gray(1.0),
            light_gray: Rgb::gray(0.7),
            dark_gray: Rgb::gray(0.5),
        }
    }
}

/// How a week before the darken-until date is muted
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DarkenStyle {
    /// Add a (usually negative) delta to the fill, clamped per channel.
    /// White becomes `1.0 + delta`, a highlighted week gets darker still.
    Additive { delta: Rgb },
    /// Swap a white fill for `color`, leave any other fill untouched
    Replace { color: Rgb },
}

impl Default for DarkenStyle {
    fn default() -> Self {
        DarkenStyle::Additive {
            delta: Rgb::gray(-0.7),
        }
    }
}

impl DarkenStyle {
    /// Fixed replacement with the ink color
    pub fn replace_with_ink() -> Self {
        DarkenStyle::Replace {
            color: Palette::default().ink,
        }
    }

    pub fn apply(self, fill: Rgb, paper: Rgb) -> Rgb {
        match self {
            DarkenStyle::Additive { delta } => fill.offset(delta),
            DarkenStyle::Replace { color } => {
                if fill == paper {
                    color
                } else {
                    fill
                }
            }
        }
    }
}
