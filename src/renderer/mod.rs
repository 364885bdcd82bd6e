mod primitive;
pub mod svg;

use egui::{Color32, FontFamily, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use egui::epaint::TextShape;
use egui::text::LayoutJob;

use crate::geometry::hit_testing::{rotate_point, rotated_corners};

pub use primitive::{
    render_element, render_scene, Primitive, Rotation, TextAnchor, SELECTION_COLOR,
    SELECTION_DASH, SELECTION_PADDING, SELECTION_STROKE_WIDTH,
};

/// Font size of the source label drawn over image placeholders
const IMAGE_LABEL_SIZE: f32 = 12.0;

/// Paints rendered primitives into an egui painter
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    image_placeholder: Color32,
    image_label: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::from_rgba_unmultiplied(255, 255, 255, 204),
            image_placeholder: Color32::from_gray(220),
            image_label: Color32::from_gray(90),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints the canvas background and `primitives`, with the canvas origin at `canvas_rect.min`
    pub fn paint(&self, painter: &Painter, canvas_rect: Rect, primitives: &[Primitive]) {
        painter.rect_filled(canvas_rect, 0.0, self.background);
        let origin = canvas_rect.min.to_vec2();
        for primitive in primitives {
            painter.extend(self.shapes(painter, origin, primitive));
        }
    }

    /// Screen shapes for one primitive, translated by `origin`
    pub fn shapes(&self, painter: &Painter, origin: Vec2, primitive: &Primitive) -> Vec<Shape> {
        match primitive {
            Primitive::Text {
                text,
                anchor_pos,
                anchor,
                font_family,
                font_size,
                bold,
                italic,
                color,
                opacity,
                rotation,
            } => {
                let font_id = FontId::new(*font_size, font_family_for(font_family));
                let color = color.gamma_multiply(*opacity);
                let mut shapes = vec![text_shape(
                    painter, text, font_id.clone(), color, *italic, *anchor_pos + origin,
                    *anchor, rotation, origin,
                )];
                if *bold {
                    // the default fonts have no bold face; overdraw a shifted copy instead
                    let shifted = *anchor_pos + origin + Vec2::new(1.0, 0.0);
                    shapes.push(text_shape(
                        painter, text, font_id, color, *italic, shifted, *anchor, rotation,
                        origin,
                    ));
                }
                shapes
            }
            Primitive::Rect {
                rect,
                fill,
                stroke,
                opacity,
                rotation,
            } => {
                let points = rotated_corners(rect.translate(origin), rotation.degrees).to_vec();
                vec![Shape::convex_polygon(
                    points,
                    fill.gamma_multiply(*opacity),
                    faded(*stroke, *opacity),
                )]
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
                opacity,
                ..
            } => {
                let center = *center + origin;
                let mut shapes = vec![Shape::circle_filled(
                    center,
                    *radius,
                    fill.gamma_multiply(*opacity),
                )];
                if let Some(stroke) = stroke {
                    shapes.push(Shape::circle_stroke(center, *radius, faded(Some(*stroke), *opacity)));
                }
                shapes
            }
            Primitive::Image {
                src,
                fitted,
                opacity,
                rotation,
                ..
            } => {
                // no image loader is installed, so assets are shown as labelled placeholders
                let fitted = fitted.translate(origin);
                let points = rotated_corners(fitted, rotation.degrees).to_vec();
                let placeholder = Shape::convex_polygon(
                    points,
                    self.image_placeholder.gamma_multiply(*opacity),
                    Stroke::NONE,
                );
                let label = text_shape(
                    painter,
                    asset_name(src),
                    FontId::proportional(IMAGE_LABEL_SIZE),
                    self.image_label.gamma_multiply(*opacity),
                    false,
                    fitted.center() - Vec2::new(0.0, IMAGE_LABEL_SIZE),
                    TextAnchor::Middle,
                    rotation,
                    origin,
                );
                vec![placeholder, label]
            }
            Primitive::SelectionOutline { rect, stroke } => {
                let rect = rect.translate(origin);
                let path = [
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                    rect.left_top(),
                ];
                Shape::dashed_line(&path, *stroke, SELECTION_DASH[0], SELECTION_DASH[1])
            }
        }
    }
}

/// Lays out a single-line run vertically centered on `anchor_pos`, rotated about the element pivot
#[allow(clippy::too_many_arguments)]
fn text_shape(
    painter: &Painter,
    text: &str,
    font_id: FontId,
    color: Color32,
    italic: bool,
    anchor_pos: Pos2,
    anchor: TextAnchor,
    rotation: &Rotation,
    origin: Vec2,
) -> Shape {
    let mut job = LayoutJob::simple_singleline(text.to_owned(), font_id, color);
    if let Some(section) = job.sections.first_mut() {
        section.format.italics = italic;
    }
    let galley = painter.layout_job(job);

    let size = galley.size();
    let dx = match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => -size.x / 2.0,
        TextAnchor::End => -size.x,
    };
    let top_left = anchor_pos + Vec2::new(dx, -size.y / 2.0);
    let pos = rotate_point(top_left, rotation.pivot + origin, rotation.degrees);

    Shape::Text(TextShape::new(pos, galley, color).with_angle(rotation.degrees.to_radians()))
}

fn faded(stroke: Option<Stroke>, opacity: f32) -> Stroke {
    stroke
        .map(|stroke| Stroke::new(stroke.width, stroke.color.gamma_multiply(opacity)))
        .unwrap_or(Stroke::NONE)
}

fn font_family_for(css_stack: &str) -> FontFamily {
    if css_stack.to_ascii_lowercase().contains("mono") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// Last path segment of an asset URL, without the query string
fn asset_name(src: &str) -> &str {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}
