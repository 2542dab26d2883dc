use chrono::NaiveDate;
use life_calendar::render::*;
use life_calendar::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn render(options: &CalendarOptions) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    render_calendar(options, &mut canvas).unwrap();
    canvas
}

#[test]
fn test_out_of_range_age_draws_nothing() {
    for age in [10, 79, 151, 200] {
        let mut options = CalendarOptions::new(date(2000, 1, 1));
        options.age = age;

        let mut canvas = RecordingCanvas::new();
        let result = render_calendar(&options, &mut canvas);

        assert!(matches!(
            result,
            Err(CalendarError::InvalidRowCount { rows, min: 80, max: 150 }) if rows == age
        ));
        assert!(canvas.ops().is_empty());
    }
}

#[test]
fn test_single_page_with_every_week() {
    let canvas = render(&CalendarOptions::new(date(2000, 1, 1)));

    assert_eq!(canvas.pages(), 1);
    assert_eq!(canvas.boxes().len(), 5217);
    assert_eq!(canvas.ops().last(), Some(&CanvasOp::ShowPage));
}

#[test]
fn test_background_is_painted_first() {
    let options = CalendarOptions::new(date(2000, 1, 1));
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);

    assert_eq!(
        &canvas.ops()[..3],
        &[
            CanvasOp::SetColor(Palette::default().paper),
            CanvasOp::Rectangle {
                x: 0.0,
                y: 0.0,
                width: geometry.page_width,
                height: geometry.page_height,
            },
            CanvasOp::Fill,
        ]
    );
}

#[test]
fn test_title_and_subtitle() {
    let mut options = CalendarOptions::new(date(2000, 1, 1));
    options.title = "MY LIFE".to_string();
    options.subtitle = Some("one box per week".to_string());
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);
    let palette = Palette::default();

    let title = canvas.texts().iter().find(|t| t.text == "MY LIFE").unwrap();
    assert_eq!(title.size, geometry.typography.title_size);
    assert_eq!(title.color, palette.ink);
    assert!((title.y - geometry.top_margin / 2.0).abs() < 1e-9);
    // Centered
    let (width, _) = options.font_family.measure("MY LIFE", title.size, fonts::FontWeight::Bold);
    assert!((title.x + width / 2.0 - geometry.page_width / 2.0).abs() < 1e-6);

    let subtitle = canvas
        .texts()
        .iter()
        .find(|t| t.text == "one box per week")
        .unwrap();
    assert_eq!(subtitle.size, geometry.typography.subtitle_size);
    assert_eq!(subtitle.color, palette.light_gray);
    assert!(subtitle.y > title.y);
}

#[test]
fn test_no_subtitle_by_default() {
    let canvas = render(&CalendarOptions::new(date(2000, 1, 1)));
    assert!(
        canvas
            .texts()
            .iter()
            .all(|t| t.color != Palette::default().light_gray)
    );
}

#[test]
fn test_column_header() {
    let options = CalendarOptions::new(date(2000, 1, 1));
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);
    let header_y = geometry.top_margin - geometry.cell_size;

    let header: Vec<&PlacedText> = canvas
        .texts()
        .iter()
        .filter(|t| (t.y - header_y).abs() < 1e-9)
        .collect();

    assert_eq!(header[0].text, "saturdays");
    assert_eq!(header[0].x, geometry.side_margin);

    let numbers: Vec<&str> = header[1..].iter().map(|t| t.text.as_str()).collect();
    assert!(!numbers.is_empty());
    for number in &numbers {
        let n: u32 = number.parse().unwrap();
        assert_eq!(n % 4, 0);
    }
    assert_eq!(numbers.last(), Some(&"52"));

    // Week numbers never overlap the weekday label
    let label_end = header[0].x
        + options
            .font_family
            .measure("saturdays", header[0].size, fonts::FontWeight::Normal)
            .0;
    assert!(header[1..].iter().all(|t| t.x > label_end));
}

#[test]
fn test_row_labels_and_positions() {
    let options = CalendarOptions::new(date(2000, 1, 1));
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);

    let first = canvas.texts().iter().find(|t| t.text == "01 i 2000").unwrap();
    let second = canvas.texts().iter().find(|t| t.text == "30 xii 2000").unwrap();
    assert!(first.x < geometry.side_margin);
    assert!((second.y - first.y - geometry.pitch()).abs() < 1e-9);

    let boxes = canvas.boxes();
    assert!((boxes[0].x - geometry.side_margin).abs() < 1e-9);
    assert!((boxes[0].y - geometry.top_margin).abs() < 1e-9);
    // Fifth box sits after the first column gap
    assert!((boxes[4].x - geometry.column_x(4)).abs() < 1e-9);
    // Row 11 sits after the first row gap
    let row_10 = boxes.iter().position(|b| (b.y - geometry.row_y(10)).abs() < 1e-9);
    assert!(row_10.is_some());
}

#[test]
fn test_milestone_boxes_and_tags() {
    let options = CalendarOptions::new(date(2000, 1, 1));
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);

    let heavy = canvas
        .boxes()
        .iter()
        .filter(|b| b.line_width == geometry.heavy_border_width)
        .count();
    assert_eq!(heavy, 8);
    assert!(geometry.heavy_border_width > geometry.border_width);

    let tags: Vec<&str> = canvas
        .texts()
        .iter()
        .map(|t| t.text.as_str())
        .filter(|t| t.ends_with('k') || t.ends_with("Gs"))
        .collect();
    assert_eq!(tags, vec!["1k", "1Gs", "2k", "3k", "2Gs", "4k", "3Gs", "5k"]);

    // Tags sit to the right of the grid
    let right_edge = geometry.side_margin + geometry.grid_width();
    for text in canvas.texts().iter().filter(|t| t.text == "1k" || t.text == "1Gs") {
        assert!(text.x >= right_edge - geometry.pitch());
    }
}

#[test]
fn test_box_fills_follow_classification() {
    let mut options = CalendarOptions::new(date(2000, 1, 1));
    options.darken_until = Some(date(2005, 1, 1));
    options.highlight_dates = vec![date(2010, 6, 15)];
    let canvas = render(&options);
    let palette = Palette::default();

    let darkened = canvas
        .boxes()
        .iter()
        .filter(|b| b.fill == palette.paper.offset(Rgb::gray(-0.7)))
        .count();
    assert_eq!(darkened, 261);

    let highlighted = canvas
        .boxes()
        .iter()
        .filter(|b| b.fill == palette.light_gray)
        .count();
    assert_eq!(highlighted, 1);
    assert_eq!(canvas.boxes()[545].fill, palette.light_gray);
}

#[test]
fn test_box_is_four_quarter_arcs() {
    let options = CalendarOptions::new(date(2000, 1, 1));
    let geometry = options.geometry().unwrap();
    let canvas = render(&options);

    let ops = canvas.ops();
    let start = ops
        .iter()
        .position(|op| matches!(op, CanvasOp::NewSubPath))
        .unwrap();
    for op in &ops[start + 1..start + 5] {
        match op {
            CanvasOp::Arc {
                radius,
                angle1,
                angle2,
                ..
            } => {
                assert_eq!(*radius, geometry.corner_radius);
                assert!((angle2 - angle1 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }
    assert_eq!(ops[start + 5], CanvasOp::ClosePath);
    assert_eq!(ops[start + 6], CanvasOp::StrokePreserve);
}

#[test]
fn test_font_family_is_used_for_labels() {
    let mut options = CalendarOptions::new(date(2000, 1, 1));
    options.font_family = FontFamily::Courier;
    let canvas = render(&options);

    assert!(canvas.ops().iter().all(|op| match op {
        CanvasOp::SelectFont(family, _, _) => *family == FontFamily::Courier,
        _ => true,
    }));
}
