//! Backend-neutral drawing primitives.
//!
//! [`render_element`] is a pure mapping from one element (plus whether it is
//! selected) to the shapes that draw it. Both the egui painter and the SVG
//! exporter consume the resulting list, so the two outputs stay in sync.

use egui::{pos2, Color32, Pos2, Rect, Stroke};

use crate::element::{
    DesignElement, ElementKind, FontStyle, FontWeight, ShapeKind, TextAlign,
};
use crate::id_generator::ElementId;

/// Gap between an element's bounding box and its selection outline
pub const SELECTION_PADDING: f32 = 5.0;
pub const SELECTION_COLOR: Color32 = Color32::from_rgb(99, 102, 241);
pub const SELECTION_STROKE_WIDTH: f32 = 2.0;
/// Dash and gap length of the selection outline
pub const SELECTION_DASH: [f32; 2] = [4.0, 4.0];

/// Rotation about a pivot, in degrees clockwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Pos2,
}

impl Rotation {
    pub fn of(element: &DesignElement) -> Self {
        Self {
            degrees: element.rotation,
            pivot: element.center(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.degrees == 0.0
    }
}

/// Which point of the text run sits on the anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl From<TextAlign> for TextAnchor {
    fn from(align: TextAlign) -> Self {
        match align {
            TextAlign::Left => TextAnchor::Start,
            TextAlign::Center => TextAnchor::Middle,
            TextAlign::Right => TextAnchor::End,
        }
    }
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Single-line glyph run, vertically centered on `anchor_pos`
    Text {
        text: String,
        anchor_pos: Pos2,
        anchor: TextAnchor,
        font_family: String,
        font_size: f32,
        bold: bool,
        italic: bool,
        color: Color32,
        opacity: f32,
        rotation: Rotation,
    },
    Rect {
        rect: Rect,
        fill: Color32,
        stroke: Option<Stroke>,
        opacity: f32,
        rotation: Rotation,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Option<Stroke>,
        opacity: f32,
        rotation: Rotation,
    },
    /// Asset drawn into `bounds`; `fitted` is the aspect-fit area when the
    /// intrinsic size is known
    Image {
        src: String,
        bounds: Rect,
        fitted: Rect,
        opacity: f32,
        rotation: Rotation,
    },
    /// Dashed, unrotated highlight around the selected element
    SelectionOutline { rect: Rect, stroke: Stroke },
}

/// Primitives for one element, selection outline last
pub fn render_element(element: &DesignElement, is_selected: bool) -> Vec<Primitive> {
    let rotation = Rotation::of(element);
    let opacity = element.opacity;
    let rect = element.rect();

    let body = match &element.kind {
        ElementKind::Text(props) => Primitive::Text {
            text: props.text.clone(),
            // baseline adjustment: the run is centered one font size below the top edge
            anchor_pos: pos2(element.position.x, element.position.y + props.font_size),
            anchor: props.text_align.into(),
            font_family: props.font_family.clone(),
            font_size: props.font_size,
            bold: props.font_weight == FontWeight::Bold,
            italic: props.font_style == FontStyle::Italic,
            color: props.fill,
            opacity,
            rotation,
        },
        ElementKind::Shape(props) => {
            let stroke = props
                .outline()
                .map(|(color, width)| Stroke::new(width, color));
            match props.shape_type {
                ShapeKind::Rectangle => Primitive::Rect {
                    rect,
                    fill: props.fill,
                    stroke,
                    opacity,
                    rotation,
                },
                ShapeKind::Circle => Primitive::Circle {
                    center: rect.center(),
                    radius: rect.width().min(rect.height()) / 2.0,
                    fill: props.fill,
                    stroke,
                    opacity,
                    rotation,
                },
            }
        }
        ElementKind::Image(props) | ElementKind::Clipart(props) => Primitive::Image {
            src: props.src.clone(),
            bounds: rect,
            fitted: props.fitted_rect(rect),
            opacity,
            rotation,
        },
    };

    let mut primitives = vec![body];
    if is_selected {
        primitives.push(Primitive::SelectionOutline {
            rect: rect.expand(SELECTION_PADDING),
            stroke: Stroke::new(SELECTION_STROKE_WIDTH, SELECTION_COLOR),
        });
    }
    primitives
}

/// Primitives for the whole design in paint order
pub fn render_scene<'a>(
    elements: impl IntoIterator<Item = &'a DesignElement>,
    selected: Option<ElementId>,
) -> Vec<Primitive> {
    elements
        .into_iter()
        .flat_map(|element| render_element(element, selected == Some(element.id())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ImageProps, ShapeProps, TextProps};
    use crate::id_generator::generate_id;
    use egui::vec2;

    fn element(kind: ElementKind) -> DesignElement {
        DesignElement::new(generate_id(), pos2(10.0, 20.0), vec2(100.0, 50.0), kind)
    }

    #[test]
    fn test_text_is_anchored_below_top_edge() {
        let mut props = TextProps::new("Hi", "Arial", Color32::WHITE);
        props.text_align = TextAlign::Center;
        let primitives = render_element(&element(ElementKind::Text(props)), false);

        match &primitives[..] {
            [Primitive::Text { anchor_pos, anchor, font_size, .. }] => {
                assert_eq!(*anchor_pos, pos2(10.0, 50.0));
                assert_eq!(*anchor, TextAnchor::Middle);
                assert_eq!(*font_size, 30.0);
            }
            other => panic!("unexpected primitives: {other:?}"),
        }
    }

    #[test]
    fn test_circle_uses_smaller_side() {
        let props = ShapeProps::new(ShapeKind::Circle, Color32::RED);
        let primitives = render_element(&element(ElementKind::Shape(props)), false);

        match &primitives[..] {
            [Primitive::Circle { center, radius, stroke, .. }] => {
                assert_eq!(*center, pos2(60.0, 45.0));
                assert_eq!(*radius, 25.0);
                assert!(stroke.is_none());
            }
            other => panic!("unexpected primitives: {other:?}"),
        }
    }

    #[test]
    fn test_rotation_pivots_on_center() {
        let mut shape = element(ElementKind::Shape(ShapeProps::new(
            ShapeKind::Rectangle,
            Color32::RED,
        )));
        shape.rotation = 45.0;
        shape.opacity = 0.5;

        match &render_element(&shape, false)[0] {
            Primitive::Rect { rotation, opacity, .. } => {
                assert_eq!(rotation.degrees, 45.0);
                assert_eq!(rotation.pivot, pos2(60.0, 45.0));
                assert_eq!(*opacity, 0.5);
            }
            other => panic!("unexpected primitive: {other:?}"),
        }
    }

    #[test]
    fn test_selected_element_gets_padded_outline() {
        let image = element(ElementKind::Clipart(ImageProps::new("star.svg")));
        let primitives = render_element(&image, true);

        assert_eq!(primitives.len(), 2);
        match &primitives[1] {
            Primitive::SelectionOutline { rect, stroke } => {
                assert_eq!(rect.min, pos2(5.0, 15.0));
                assert_eq!(rect.max, pos2(115.0, 75.0));
                assert_eq!(stroke.color, SELECTION_COLOR);
            }
            other => panic!("unexpected primitive: {other:?}"),
        }
    }

    #[test]
    fn test_scene_follows_sequence_order() {
        let a = element(ElementKind::Shape(ShapeProps::new(ShapeKind::Rectangle, Color32::RED)));
        let b = element(ElementKind::Clipart(ImageProps::new("b.svg")));
        let selected = b.id();
        let scene = render_scene([&a, &b], Some(selected));

        assert_eq!(scene.len(), 3);
        assert!(matches!(scene[0], Primitive::Rect { .. }));
        assert!(matches!(scene[1], Primitive::Image { .. }));
        assert!(matches!(scene[2], Primitive::SelectionOutline { .. }));
    }
}
