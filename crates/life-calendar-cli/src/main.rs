use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use life_calendar::{CalendarOptions, DarkenStyle, FontFamily};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "life-calendar",
    about = "Generate a personalized \"Life Calendar\": one row per year, one box per week",
    version
)]
struct Cli {
    /// Starting date (your birthday), in either YMD or DMY format
    /// (dashes '-' may also be used in place of slashes '/')
    date: Option<String>,

    /// Output filename; any extension other than .pdf is replaced
    #[arg(short, long, default_value = life_calendar::constants::DEFAULT_FILENAME)]
    filename: PathBuf,

    /// Output size in ISO 216 A format (A0 is 0, A1 is 1, etc.) [default: 2]
    #[arg(short = 's', long)]
    a_size: Option<u32>,

    /// Calendar title text [default: "LIFE CALENDAR"]
    #[arg(short, long)]
    title: Option<String>,

    /// Text to show under the calendar title
    #[arg(short = 'b', long)]
    subtitle_text: Option<String>,

    /// Number of rows to generate, representing years of life [default: 100]
    #[arg(short, long)]
    age: Option<u32>,

    /// Darken weeks before this date (today if the flag is given without a value)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "today")]
    darken_until: Option<String>,

    /// Comma-separated list of dates to highlight
    #[arg(short = 'x', long)]
    highlight_dates: Option<String>,

    /// Font family: helvetica, times or courier [default: times]
    #[arg(long)]
    font_family: Option<String>,

    /// How weeks before the darken-until date are muted
    #[arg(long, value_enum)]
    darken_style: Option<DarkenStyleArg>,

    /// Load options from a JSON file; other flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DarkenStyleArg {
    /// Subtract a fixed amount from every channel
    Additive,
    /// Replace white boxes with the ink color
    Replace,
}

impl From<DarkenStyleArg> for DarkenStyle {
    fn from(arg: DarkenStyleArg) -> Self {
        match arg {
            DarkenStyleArg::Additive => DarkenStyle::default(),
            DarkenStyleArg::Replace => DarkenStyle::replace_with_ink(),
        }
    }
}

/// Merge the command line over the loaded (or default) options
async fn build_options(cli: &Cli) -> Result<CalendarOptions> {
    let mut options = match (&cli.config, &cli.date) {
        (Some(path), _) => CalendarOptions::load(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        (None, Some(date)) => CalendarOptions::new(life_calendar::parse_date(date)?),
        (None, None) => bail!("a birth date is required unless --config is given"),
    };

    if let (Some(_), Some(date)) = (&cli.config, &cli.date) {
        options.birth_date = life_calendar::parse_date(date)?;
    }
    if let Some(a_size) = cli.a_size {
        options.a_size = a_size;
    }
    if let Some(title) = &cli.title {
        options.title = title.clone();
    }
    if let Some(subtitle) = &cli.subtitle_text {
        options.subtitle = Some(subtitle.clone());
    }
    if let Some(age) = cli.age {
        options.age = age;
    }
    if let Some(text) = &cli.darken_until {
        let today = chrono::Local::now().date_naive();
        options.darken_until = Some(life_calendar::parse_darken_until(text, today)?);
    }
    if let Some(text) = &cli.highlight_dates {
        options.highlight_dates = life_calendar::parse_highlight_dates(text)?;
    }
    if let Some(name) = &cli.font_family {
        options.font_family = name.parse::<FontFamily>()?;
    }
    if let Some(style) = cli.darken_style {
        options.darken_style = style.into();
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = build_options(&cli).await?;
    log::debug!("Effective options: {:?}", options);

    // Validates the options before anything is saved or written
    let stats = life_calendar::calculate_statistics(&options)?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        println!("Saved options → {}", path.display());
    }

    println!("Calendar Statistics:");
    println!(
        "  Page: {:.0} x {:.0} pt (A{})",
        stats.page_width_pt, stats.page_height_pt, options.a_size
    );
    println!("  Rows: {}", stats.rows);
    println!("  Weeks: {}", stats.total_weeks);
    println!("  53-week rows: {}", stats.long_rows);
    if options.darken_until.is_some() {
        println!("  Darkened weeks: {}", stats.darkened_weeks);
    }
    if !options.highlight_dates.is_empty() {
        println!("  Highlighted weeks: {}", stats.highlighted_weeks);
    }
    for milestone in &stats.milestones {
        println!("  {}: week of {}", milestone.tag, milestone.date);
    }

    if cli.stats_only {
        return Ok(());
    }

    let written = life_calendar::generate_pdf(&options, &cli.filename).await?;
    println!("Created {}", written.display());

    Ok(())
}
