//! Integration tests for the document container.

mod common;

use common::{RecordingHost, container_with, png_bytes, svg_bytes};
use lantern_common::warning::warn_once;
use lantern_container::{
    ContainerConfig, ContainerError, DocumentContainer, FontLibrary, MediaType,
};
use lantern_paint::{
    BorderEdge, BorderSet, BorderStyle, Color, CornerRadii, CornerRadius, CursorShape,
    DisplayCommand, DisplayList, Rect, Size, TextDecoration, TextTransform,
};

const BASE: &str = "https://x.test/docs/page.html";

// ---------------------------------------------------------------------------
// URLs and shell callbacks
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_against_document_base() {
    let container = container_with(RecordingHost::default(), BASE);
    assert_eq!(
        container.resolve_url("img/a.png", ""),
        "https://x.test/docs/img/a.png"
    );
    assert_eq!(
        container.resolve_url("/root.css", "https://y.test/q/r"),
        "https://y.test/root.css"
    );
}

#[test]
fn test_set_base_url_replaces_previous_base() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.set_base_url("https://other.test/index.html");
    assert_eq!(
        container.resolve_url("a.css", ""),
        "https://other.test/a.css"
    );
    assert_eq!(
        container.document_base().as_str(),
        "https://other.test/index.html"
    );
}

#[test]
fn test_new_document_rearms_warnings_process_wide() {
    let _first = container_with(RecordingHost::default(), BASE);
    let mut second = container_with(RecordingHost::default(), BASE);

    let message = "rearm check for a second document";
    assert!(warn_once("image", message));

    second.set_base_url("https://other.test/index.html");
    assert!(warn_once("image", message));
}

#[test]
fn test_anchor_click_opens_resolved_link() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.on_anchor_click("next.html");
    container.on_anchor_click("#top");
    assert_eq!(
        container.host().links,
        vec!["https://x.test/docs/next.html".to_string(), "#top".to_string()]
    );
}

#[test]
fn test_caption_is_forwarded() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.set_caption("Hello");
    assert_eq!(container.host().captions, vec!["Hello".to_string()]);
}

#[test]
fn test_cursor_notifies_only_on_change() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.set_cursor("pointer");
    container.set_cursor("pointer");
    container.set_cursor("text");
    container.set_cursor("default");
    container.set_cursor("auto");
    assert_eq!(
        container.host().cursors,
        vec![CursorShape::PointingHand, CursorShape::IBeam, CursorShape::Arrow]
    );
    assert_eq!(container.cursor(), CursorShape::Arrow);
}

#[test]
fn test_unknown_cursor_shows_arrow() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.set_cursor("wait");
    container.set_cursor("no-such-cursor");
    assert_eq!(
        container.host().cursors,
        vec![CursorShape::Busy, CursorShape::Arrow]
    );
}

#[test]
fn test_import_css_returns_text_and_directory() {
    let host = RecordingHost::default().serve(
        "https://x.test/docs/css/site.css",
        b"body { color: red }".to_vec(),
    );
    let mut container = container_with(host, BASE);
    let (text, base) = container.import_css("css/site.css", "");
    assert_eq!(text, "body { color: red }");
    assert_eq!(base, "https://x.test/docs/css");
    assert_eq!(
        container.host().loads,
        vec!["https://x.test/docs/css/site.css".to_string()]
    );
}

#[test]
fn test_import_css_missing_is_empty() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let (text, base) = container.import_css("/missing.css", "");
    assert!(text.is_empty());
    assert_eq!(base, "https://x.test");
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[test]
fn test_load_png_and_report_size() {
    let host = RecordingHost::default().serve(
        "https://x.test/docs/a.png",
        png_bytes(3, 2, [255, 0, 0, 255]),
    );
    let mut container = container_with(host, BASE);
    container.load_image("a.png", "");
    assert!(container.images().contains("https://x.test/docs/a.png"));
    assert_eq!(container.image_size("a.png", ""), Size::new(3.0, 2.0));
}

#[test]
fn test_load_svg() {
    let host = RecordingHost::default().serve(
        "https://x.test/docs/icon.svg",
        svg_bytes(8, 6, "#00ff00"),
    );
    let mut container = container_with(host, BASE);
    container.load_image("icon.svg", "");
    assert_eq!(container.image_size("icon.svg", ""), Size::new(8.0, 6.0));
    let image = container
        .images()
        .get("https://x.test/docs/icon.svg")
        .expect("svg cached");
    assert_eq!(image.pixel(4, 3), Some([0, 255, 0, 255]));
}

#[test]
fn test_cached_image_not_fetched_twice() {
    let host = RecordingHost::default().serve(
        "https://x.test/docs/a.png",
        png_bytes(1, 1, [0, 0, 0, 255]),
    );
    let mut container = container_with(host, BASE);
    container.load_image("a.png", "");
    container.load_image("https://x.test/docs/a.png", "");
    assert_eq!(container.host().loads.len(), 1);
}

#[test]
fn test_undecodable_image_caches_nothing() {
    let host =
        RecordingHost::default().serve("https://x.test/docs/bad.png", b"not an image".to_vec());
    let mut container = container_with(host, BASE);
    container.load_image("bad.png", "");
    container.load_image("gone.png", "");
    assert!(container.images().is_empty());
    assert_eq!(container.image_size("bad.png", ""), Size::default());
}

#[test]
fn test_empty_image_source_is_ignored() {
    let mut container = container_with(RecordingHost::default(), BASE);
    container.load_image("", "");
    assert!(container.host().loads.is_empty());
    assert_eq!(container.image_size("", ""), Size::default());
}

// ---------------------------------------------------------------------------
// Fonts and text
// ---------------------------------------------------------------------------

#[test]
fn test_create_font_with_estimated_metrics() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let (_font, metrics) =
        container.create_font("\"Open Sans\", serif", 20.0, 400, false, TextDecoration::NONE);
    assert_eq!(metrics.ascent, 16.0);
    assert_eq!(metrics.descent, 4.0);
    assert_eq!(metrics.height, 20.0);
    assert_eq!(metrics.x_height, 10.0);
    assert!(!metrics.draw_spaces);
}

#[test]
fn test_decorated_font_draws_spaces() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let decoration = TextDecoration {
        underline: true,
        ..TextDecoration::NONE
    };
    let (_font, metrics) = container.create_font("Arial", 16.0, 400, false, decoration);
    assert!(metrics.draw_spaces);
}

#[test]
fn test_text_width_and_delete() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let (font, _) = container.create_font("monospace", 10.0, 700, true, TextDecoration::NONE);
    assert_eq!(container.text_width(&font, "abcd").ok(), Some(20.0));
    assert_eq!(container.text_width(&font, "").ok(), Some(0.0));
    assert!(container.delete_font(font).is_ok());
}

#[test]
fn test_foreign_font_handle_is_rejected() {
    let mut first = container_with(RecordingHost::default(), BASE);
    let mut second = container_with(RecordingHost::default(), BASE);
    let (font, _) = first.create_font("serif", 12.0, 400, false, TextDecoration::NONE);

    assert!(matches!(
        second.text_width(&font, "x"),
        Err(ContainerError::UnknownFont { .. })
    ));
    let mut list = DisplayList::new();
    assert!(
        second
            .draw_text(&mut list, "x", &font, Color::BLACK, &Rect::default())
            .is_err()
    );
    assert!(list.is_empty());
    assert!(matches!(
        second.delete_font(font),
        Err(ContainerError::UnknownFont { .. })
    ));
}

#[test]
fn test_draw_text_records_font_families() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let (font, _) = container.create_font(" 'x', sans-serif ,", 14.0, 400, false, TextDecoration::NONE);
    let mut list = DisplayList::new();
    container
        .draw_text(
            &mut list,
            "Hi",
            &font,
            Color::BLACK,
            &Rect::new(1.0, 2.0, 30.0, 14.0),
        )
        .expect("font is live");
    let [DisplayCommand::DrawText { text, font, .. }] = list.commands() else {
        panic!("expected one text command, got {:?}", list.commands());
    };
    assert_eq!(text, "Hi");
    assert_eq!(font.families.last().map(String::as_str), Some("Arial"));
    assert_eq!(font.size, 14.0);
}

#[test]
fn test_empty_family_list_uses_default_font() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let (font, _) = container.create_font("", 12.0, 400, false, TextDecoration::NONE);
    let mut list = DisplayList::new();
    container
        .draw_text(&mut list, "a", &font, Color::BLACK, &Rect::default())
        .expect("font is live");
    assert!(matches!(
        list.commands(),
        [DisplayCommand::DrawText { font, .. }] if font.families == vec!["Segoe UI".to_string()]
    ));
}

#[test]
fn test_transform_text() {
    let container = container_with(RecordingHost::default(), BASE);
    assert_eq!(
        container.transform_text("hello big world", TextTransform::Capitalize),
        "Hello Big World"
    );
    assert_eq!(container.transform_text("Abc", TextTransform::Uppercase), "ABC");
    assert_eq!(container.transform_text("Abc", TextTransform::Lowercase), "abc");
    assert_eq!(container.transform_text("Abc", TextTransform::None), "Abc");
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

#[test]
fn test_units_and_defaults() {
    let container = container_with(RecordingHost::default(), BASE);
    assert_eq!(container.pt_to_px(12.0), 16.0);
    assert_eq!(container.default_font_size(), 16.0);
    assert_eq!(container.default_font_name(), "Segoe UI");
}

#[test]
fn test_pt_to_px_follows_dpi() {
    let container = DocumentContainer::with_fonts(
        ContainerConfig::default().with_dpi(144.0),
        RecordingHost::default(),
        FontLibrary::empty(),
    );
    assert_eq!(container.pt_to_px(12.0), 24.0);
}

#[test]
fn test_client_rect_media_and_language() {
    let container = container_with(RecordingHost::default(), BASE);
    assert_eq!(container.client_rect(), Rect::new(0.0, 0.0, 555.0, 777.0));

    let media = container.media_features();
    assert_eq!(media.media_type, MediaType::Screen);
    assert_eq!((media.width, media.height), (555, 777));
    assert_eq!(media.color, 8);
    assert_eq!(media.resolution, 96.0);

    assert_eq!(container.language(), ("en", ""));
}

// ---------------------------------------------------------------------------
// Clip stack
// ---------------------------------------------------------------------------

#[test]
fn test_paint_calls_run_inside_active_clips() {
    let mut container = container_with(RecordingHost::default(), BASE);
    let borders = BorderSet::uniform(BorderEdge::new(BorderStyle::Solid, 1.0, Color::BLACK));
    let draw_pos = Rect::new(0.0, 0.0, 10.0, 10.0);

    container.set_clip(&Rect::new(0.0, 0.0, 50.0, 50.0), &CornerRadii::ZERO);
    container.set_clip(
        &Rect::new(5.0, 5.0, 20.0, 20.0),
        &CornerRadii::uniform(CornerRadius::circular(4.0)),
    );
    let mut list = DisplayList::new();
    container.draw_borders(&mut list, &borders, &draw_pos);

    let commands = list.commands();
    assert_eq!(commands.first(), Some(&DisplayCommand::Save));
    assert!(matches!(&commands[1], DisplayCommand::ClipRegion(region) if region.as_rect().is_some()));
    assert!(matches!(&commands[2], DisplayCommand::ClipRegion(region) if region.pieces().len() == 7));
    assert_eq!(commands.last(), Some(&DisplayCommand::Restore));

    container.del_clip();
    container.del_clip();
    container.del_clip();
    let mut unclipped = DisplayList::new();
    container.draw_borders(&mut unclipped, &borders, &draw_pos);
    assert!(
        unclipped
            .commands()
            .iter()
            .all(|command| matches!(command, DisplayCommand::StrokeLine { .. }))
    );
}
