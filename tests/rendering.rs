use egui::{pos2, Color32};
use sticker_builder::element::{ElementPatch, ElementType, ShapeKind, TextAlign};
use sticker_builder::renderer::{svg, Primitive, TextAnchor, SELECTION_COLOR};
use sticker_builder::{EditorSession, StickerConfig};

fn session() -> EditorSession {
    EditorSession::new(StickerConfig::default())
}

#[test]
fn test_scene_follows_paint_order_with_selection_last() {
    let mut session = session();
    let shape = session.add_element(ElementType::Shape, &ElementPatch::default()).unwrap();
    session.add_element(ElementType::Text, &ElementPatch::default()).unwrap();
    session.click_element(shape);

    let primitives = session.render();
    assert_eq!(primitives.len(), 3);
    assert!(matches!(primitives[0], Primitive::Rect { .. }));
    match &primitives[1] {
        Primitive::SelectionOutline { rect, stroke } => {
            // shape at (200, 225) 100x50, padded by 5
            assert_eq!(rect.min, pos2(195.0, 220.0));
            assert_eq!(rect.max, pos2(305.0, 280.0));
            assert_eq!(stroke.color, SELECTION_COLOR);
        }
        other => panic!("expected selection outline, got {:?}", other),
    }
    assert!(matches!(primitives[2], Primitive::Text { .. }));
}

#[test]
fn test_text_alignment_maps_to_anchor() {
    let mut session = session();
    let overrides = ElementPatch {
        text_align: Some(TextAlign::Right),
        ..Default::default()
    };
    session.add_element(ElementType::Text, &overrides).unwrap();
    session.click_canvas();

    match &session.render()[0] {
        Primitive::Text {
            anchor, anchor_pos, ..
        } => {
            assert_eq!(*anchor, TextAnchor::End);
            // text at (200, 235) with a 30px font
            assert_eq!(*anchor_pos, pos2(200.0, 265.0));
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_circle_uses_smaller_dimension() {
    let mut session = session();
    let overrides = ElementPatch {
        shape_type: Some(ShapeKind::Circle),
        ..Default::default()
    };
    session.add_element(ElementType::Shape, &overrides).unwrap();
    session.click_canvas();

    match &session.render()[0] {
        Primitive::Circle { center, radius, .. } => {
            assert_eq!(*center, pos2(250.0, 250.0));
            assert_eq!(*radius, 25.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
}

#[test]
fn test_svg_export_of_a_design() {
    let mut session = session();
    let overrides = ElementPatch {
        fill: Some(Color32::from_rgb(255, 0, 0)),
        rotation: Some(90.0),
        opacity: Some(0.5),
        ..Default::default()
    };
    session.add_element(ElementType::Shape, &overrides).unwrap();
    session
        .add_element(
            ElementType::Text,
            &ElementPatch {
                text: Some("Fish & <Chips>".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let out = session.to_svg();
    assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500""#));
    assert!(out.contains(svg::BACKGROUND));
    assert!(out.contains(
        r##"<rect x="200" y="225" width="100" height="50" fill="#ff0000" opacity="0.5" transform="rotate(90 250 250)"/>"##
    ));
    assert!(out.contains("Fish &amp; &lt;Chips&gt;"));
    assert!(out.trim_end().ends_with("</svg>"));
}

#[test]
fn test_configured_clipart_is_aspect_fitted() {
    let config = StickerConfig::from_json_str(
        r#"{
            "clipartCategories": [{
                "name": "Banners",
                "items": [{
                    "id": "clipart-banner",
                    "name": "Banner",
                    "src": "https://cdn.example.com/banner.svg",
                    "category": "Banners",
                    "originalWidth": 400,
                    "originalHeight": 100
                }]
            }]
        }"#,
    )
    .unwrap();
    let mut session = EditorSession::new(config);
    let banner = session.clipart_catalog().find("clipart-banner").cloned().unwrap();
    session.pick_clipart(&banner).unwrap();
    session.click_canvas();

    match &session.render()[0] {
        Primitive::Image { bounds, fitted, .. } => {
            assert_eq!(bounds.size(), egui::vec2(100.0, 100.0));
            assert_eq!(fitted.size(), egui::vec2(100.0, 25.0));
            assert_eq!(fitted.center(), bounds.center());
        }
        other => panic!("expected image, got {:?}", other),
    }
}

#[test]
fn test_svg_export_of_far_away_element() {
    let mut session = session();
    session
        .add_element(
            ElementType::Shape,
            &ElementPatch {
                x: Some(f32::MAX),
                ..Default::default()
            },
        )
        .unwrap();

    let out = session.to_svg();
    assert!(out.contains(r#"<rect x="340282346638528859811704183484516925440" y="225""#));
    assert!(!out.contains("9223372036854775807"));
}
