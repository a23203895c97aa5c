//! Integration tests for border painting.

use lantern_paint::{
    BorderEdge, BorderSet, BorderStyle, Color, CornerRadii, CornerRadius, DisplayCommand,
    DisplayList, PaintIssue, PenStyle, Point, Rect, paint_borders,
};

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);
const BLUE: Color = Color::rgb(0, 0, 255);
const YELLOW: Color = Color::rgb(255, 255, 0);

fn lines(list: &DisplayList) -> Vec<(Point, Point, Color)> {
    list.commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::StrokeLine { from, to, pen } => Some((*from, *to, pen.color)),
            _ => None,
        })
        .collect()
}

fn arcs(list: &DisplayList) -> Vec<(Rect, f32, f32)> {
    list.commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::StrokeArc {
                bounds,
                start_angle,
                sweep_angle,
                ..
            } => Some((*bounds, *start_angle, *sweep_angle)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_none_and_hidden_edges_draw_nothing() {
    for style in [BorderStyle::None, BorderStyle::Hidden] {
        let borders = BorderSet::uniform(BorderEdge::new(style, 3.0, RED));
        let mut list = DisplayList::new();
        let issues = paint_borders(&borders, &Rect::new(0.0, 0.0, 50.0, 50.0), &mut list);
        assert!(issues.is_empty());
        assert!(list.is_empty(), "{style} should draw nothing");
    }
}

#[test]
fn test_four_edges_are_independent() {
    let borders = BorderSet {
        top: BorderEdge::new(BorderStyle::Solid, 1.0, RED),
        right: BorderEdge::new(BorderStyle::Dashed, 2.0, GREEN),
        bottom: BorderEdge::new(BorderStyle::Dotted, 3.0, BLUE),
        left: BorderEdge::new(BorderStyle::Solid, 4.0, YELLOW),
        radii: CornerRadii::ZERO,
    };
    let mut list = DisplayList::new();
    let issues = paint_borders(&borders, &Rect::new(10.0, 20.0, 100.0, 50.0), &mut list);
    assert!(issues.is_empty());

    assert_eq!(
        lines(&list),
        vec![
            (Point::new(10.0, 20.0), Point::new(110.0, 20.0), RED),
            (Point::new(10.0, 70.0), Point::new(110.0, 70.0), BLUE),
            (Point::new(10.0, 20.0), Point::new(10.0, 70.0), YELLOW),
            (Point::new(110.0, 20.0), Point::new(110.0, 70.0), GREEN),
        ]
    );
    assert!(arcs(&list).is_empty());

    let styles: Vec<(PenStyle, f32)> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::StrokeLine { pen, .. } => Some((pen.style, pen.width)),
            _ => None,
        })
        .collect();
    assert_eq!(
        styles,
        vec![
            (PenStyle::Solid, 1.0),
            (PenStyle::Dot, 3.0),
            (PenStyle::Solid, 4.0),
            (PenStyle::Dash, 2.0),
        ]
    );
}

#[test]
fn test_single_hidden_edge_leaves_others() {
    let mut borders = BorderSet::uniform(BorderEdge::new(BorderStyle::Solid, 1.0, RED));
    borders.left.style = BorderStyle::Hidden;
    let mut list = DisplayList::new();
    let _ = paint_borders(&borders, &Rect::new(0.0, 0.0, 10.0, 10.0), &mut list);
    assert_eq!(lines(&list).len(), 3);
}

#[test]
fn test_rounded_corners_shorten_lines_and_add_arcs() {
    let mut borders = BorderSet::uniform(BorderEdge::new(BorderStyle::Solid, 2.0, RED));
    borders.radii = CornerRadii::uniform(CornerRadius::circular(5.0));
    let draw_pos = Rect::new(0.0, 0.0, 40.0, 30.0);
    let mut list = DisplayList::new();
    let _ = paint_borders(&borders, &draw_pos, &mut list);

    let lines = lines(&list);
    assert_eq!(lines[0].0, Point::new(5.0, 0.0));
    assert_eq!(lines[0].1, Point::new(35.0, 0.0));
    assert_eq!(lines[2].0, Point::new(0.0, 5.0));
    assert_eq!(lines[2].1, Point::new(0.0, 25.0));

    assert_eq!(
        arcs(&list),
        vec![
            (Rect::new(0.0, 0.0, 10.0, 10.0), 90.0, 90.0),
            (Rect::new(30.0, 0.0, 10.0, 10.0), 0.0, 90.0),
            (Rect::new(0.0, 20.0, 10.0, 10.0), 180.0, 90.0),
            (Rect::new(30.0, 20.0, 10.0, 10.0), 270.0, 90.0),
        ]
    );
}

#[test]
fn test_zero_radius_arcs_are_omitted() {
    let mut borders = BorderSet::uniform(BorderEdge::new(BorderStyle::Solid, 1.0, RED));
    borders.radii.top_right = CornerRadius::circular(4.0);
    let mut list = DisplayList::new();
    let _ = paint_borders(&borders, &Rect::new(0.0, 0.0, 20.0, 20.0), &mut list);
    assert_eq!(arcs(&list), vec![(Rect::new(12.0, 0.0, 8.0, 8.0), 0.0, 90.0)]);
}

#[test]
fn test_unsupported_style_falls_back_to_solid() {
    let borders = BorderSet {
        top: BorderEdge::new(BorderStyle::Double, 3.0, RED),
        ..BorderSet::default()
    };
    let mut list = DisplayList::new();
    let issues = paint_borders(&borders, &Rect::new(0.0, 0.0, 20.0, 20.0), &mut list);
    assert_eq!(
        issues,
        vec![PaintIssue::UnsupportedBorderStyle(BorderStyle::Double)]
    );
    assert!(matches!(
        list.commands()[0],
        DisplayCommand::StrokeLine { pen, .. } if pen.style == PenStyle::Solid
    ));
}
