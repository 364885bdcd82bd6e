use egui::{pos2, vec2, Color32};
use sticker_builder::element::{ElementFactory, ElementKind, ElementPatch, ElementType, ShapeKind};
use sticker_builder::{EditorError, StickerConfig};

#[test]
fn test_shape_factory() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);

    let shape = factory
        .create(ElementType::Shape, &ElementPatch::default(), pos2(250.0, 250.0))
        .unwrap();

    assert_eq!(shape.element_type(), ElementType::Shape);
    assert_eq!(shape.size, vec2(100.0, 50.0));
    assert_eq!(shape.position, pos2(200.0, 225.0));

    let props = shape.as_shape().unwrap();
    assert_eq!(props.shape_type, ShapeKind::Rectangle);
    assert_eq!(props.fill, Color32::from_rgb(0x63, 0x66, 0xf1));
    assert!(props.outline().is_none());
}

#[test]
fn test_overrides_take_precedence() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);

    let overrides = ElementPatch {
        text: Some("Sale!".into()),
        font_size: Some(48.0),
        x: Some(10.0),
        rotation: Some(-90.0),
        ..Default::default()
    };
    let text = factory
        .create(ElementType::Text, &overrides, pos2(250.0, 250.0))
        .unwrap();

    let props = text.as_text().unwrap();
    assert_eq!(props.text, "Sale!");
    assert_eq!(props.font_size, 48.0);
    assert_eq!(text.position.x, 10.0);
    assert_eq!(text.rotation, 270.0);
}

#[test]
fn test_image_requires_source() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);

    let missing = factory.create(ElementType::Image, &ElementPatch::default(), pos2(0.0, 0.0));
    assert!(matches!(
        missing,
        Err(EditorError::MissingSource {
            element_type: ElementType::Image
        })
    ));

    let blank = factory.create(ElementType::Clipart, &ElementPatch::source("   "), pos2(0.0, 0.0));
    assert!(matches!(blank, Err(EditorError::MissingSource { .. })));

    let image = factory
        .create(
            ElementType::Image,
            &ElementPatch::source("https://cdn.example.com/cat.png"),
            pos2(250.0, 250.0),
        )
        .unwrap();
    assert_eq!(image.size, vec2(100.0, 100.0));
    assert_eq!(image.kind.source(), Some("https://cdn.example.com/cat.png"));
}

#[test]
fn test_clipart_shortcut() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);

    let star = config.clipart_categories[0].items[2].clone();
    let clipart = factory.create_clipart(&star, pos2(250.0, 250.0)).unwrap();
    assert!(matches!(clipart.kind, ElementKind::Clipart(_)));
    assert_eq!(clipart.kind.source(), Some(star.src.as_str()));
    assert_eq!(clipart.rect().center(), pos2(250.0, 250.0));
}

#[test]
fn test_negative_size_override_is_clamped() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);

    let shape = factory
        .create(
            ElementType::Shape,
            &ElementPatch::size(vec2(-10.0, 20.0)),
            pos2(250.0, 250.0),
        )
        .unwrap();
    assert_eq!(shape.size, vec2(0.0, 20.0));
    assert!(shape.validate().is_ok());
}

#[test]
fn test_elements_round_trip_through_json() {
    let config = StickerConfig::default();
    let factory = ElementFactory::new(&config);
    let text = factory
        .create(ElementType::Text, &ElementPatch::default(), pos2(250.0, 250.0))
        .unwrap();

    let json = serde_json::to_string(&text).unwrap();
    assert!(json.contains(r#""type":"text""#));
    let restored: sticker_builder::DesignElement = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, text);
}
