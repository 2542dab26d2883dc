use chrono::NaiveDate;
use life_calendar::layout::RowBounds;
use life_calendar::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_defaults() {
    let options = CalendarOptions::new(date(1990, 7, 14));
    assert_eq!(options.age, 100);
    assert_eq!(options.a_size, 2);
    assert_eq!(options.title, "LIFE CALENDAR");
    assert_eq!(options.subtitle, None);
    assert_eq!(options.font_family, FontFamily::Times);
    assert_eq!(options.darken_style, DarkenStyle::default());
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_row_count() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));

    for age in [80, 100, 150] {
        options.age = age;
        assert!(options.validate().is_ok());
    }

    options.age = 79;
    match options.validate() {
        Err(CalendarError::InvalidRowCount { rows, min, max }) => {
            assert_eq!((rows, min, max), (79, 80, 150));
        }
        _ => panic!("Expected InvalidRowCount error"),
    }

    options.age = 151;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_custom_bounds() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.ratios.row_bounds = RowBounds { min: 10, max: 40 };
    options.age = 30;
    assert!(options.validate().is_ok());

    options.age = 100;
    assert!(matches!(
        options.validate(),
        Err(CalendarError::InvalidRowCount { max: 40, .. })
    ));
}

#[test]
fn test_validation_rejects_unusable_row_bounds() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.ratios.row_bounds = RowBounds { min: 0, max: 150 };
    options.age = 0;
    assert!(matches!(options.validate(), Err(CalendarError::Config(_))));

    options.ratios.row_bounds = RowBounds { min: 100, max: 90 };
    options.age = 95;
    assert!(matches!(options.validate(), Err(CalendarError::Config(_))));

    // Nothing is drawn either
    let mut canvas = render::RecordingCanvas::new();
    assert!(render::render_calendar(&options, &mut canvas).is_err());
    assert!(canvas.ops().is_empty());
}

#[test]
fn test_validation_paper_size() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.a_size = 10;
    assert!(options.validate().is_ok());

    options.a_size = 11;
    match options.validate() {
        Err(CalendarError::Config(msg)) => assert!(msg.contains("A11")),
        _ => panic!("Expected Config error"),
    }

    options.a_size = u32::MAX;
    assert!(calculate_statistics(&options).is_err());
}

#[test]
fn test_validation_title() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.title = "   ".to_string();
    match options.validate() {
        Err(CalendarError::Config(msg)) => assert!(msg.contains("Title")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_darken_delta() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.darken_style = DarkenStyle::Additive {
        delta: Rgb::new(-0.5, -1.5, 0.0),
    };
    assert!(matches!(options.validate(), Err(CalendarError::Config(_))));

    options.darken_style = DarkenStyle::Additive {
        delta: Rgb::gray(-1.0),
    };
    assert!(options.validate().is_ok());

    // Replacement colors are not checked
    options.darken_style = DarkenStyle::replace_with_ink();
    assert!(options.validate().is_ok());
}

#[test]
fn test_geometry_follows_options() {
    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.a_size = 3;
    options.age = 90;

    let geometry = options.geometry().unwrap();
    assert_eq!(geometry.rows, 90);
    assert_eq!(geometry, resolve(3, 90).unwrap());
}

#[test]
fn test_darken_style_apply() {
    let paper = Palette::default().paper;

    let additive = DarkenStyle::default();
    assert_eq!(additive.apply(Rgb::gray(0.2), paper), Rgb::gray(0.0));

    let replace = DarkenStyle::replace_with_ink();
    assert_eq!(replace.apply(paper, paper), Palette::default().ink);
    assert_eq!(replace.apply(Rgb::gray(0.7), paper), Rgb::gray(0.7));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = CalendarOptions::new(date(1990, 7, 14));
    options.age = 90;
    options.title = "ANNA".to_string();
    options.subtitle = Some("so far".to_string());
    options.darken_until = Some(date(2026, 10, 16));
    options.highlight_dates = vec![date(2001, 9, 1), date(2015, 6, 20)];
    options.darken_style = DarkenStyle::replace_with_ink();
    options.font_family = FontFamily::Helvetica;
    options.a_size = 1;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = CalendarOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_fills_in_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{ "birth_date": "1990-07-14" }"#)
        .await
        .unwrap();

    let loaded = CalendarOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded, CalendarOptions::new(date(1990, 7, 14)));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "{ not json").await.unwrap();

    match CalendarOptions::load(temp_file.path()).await {
        Err(CalendarError::Config(msg)) => assert!(msg.contains("parse")),
        _ => panic!("Expected Config error"),
    }
}
