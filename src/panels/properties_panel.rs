use egui::{Color32, ComboBox, DragValue, Slider};

use crate::StickerBuilderApp;
use crate::clipart::{ClipartItem, ALL_CATEGORIES};
use crate::element::{ElementPatch, FontStyle, FontWeight, ShapeKind, TextAlign};
use crate::product::{DetailsPatch, MAX_CUSTOM_CM, MAX_QUANTITY, MIN_CUSTOM_CM, MIN_QUANTITY};
use crate::state::PropertiesTab;
use crate::tools::ActiveTool;

const SWATCH_SIZE: f32 = 18.0;

enum ElementAction {
    Duplicate,
    Delete,
    BringForward,
    SendBackward,
}

pub fn properties_panel(app: &mut StickerBuilderApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match app.session().properties_tab() {
                PropertiesTab::Element => element_properties(app, ui),
                PropertiesTab::Clipart => clipart_picker(app, ui),
                PropertiesTab::Upload => upload_placeholder(app, ui),
                PropertiesTab::Sticker => sticker_options(app, ui),
            });
        });
}

fn element_properties(app: &mut StickerBuilderApp, ui: &mut egui::Ui) {
    let Some(element) = app.session().selected_element().cloned() else {
        return;
    };
    let id = element.id();
    let fonts = app.session().config().available_fonts.clone();
    let palette = app.session().config().palette();

    ui.heading(format!("Edit {}", element.element_type()));

    let mut action = None;
    ui.horizontal_wrapped(|ui| {
        if ui.button("⧉ Duplicate").clicked() {
            action = Some(ElementAction::Duplicate);
        }
        if ui.button("⬆ Forward").clicked() {
            action = Some(ElementAction::BringForward);
        }
        if ui.button("⬇ Backward").clicked() {
            action = Some(ElementAction::SendBackward);
        }
        if ui.button("🗑 Delete").clicked() {
            action = Some(ElementAction::Delete);
        }
    });
    ui.separator();

    let mut patch = ElementPatch::default();

    let mut position = element.position;
    let mut size = element.size;
    let mut rotation = element.rotation;
    let mut opacity = element.opacity;
    egui::Grid::new("element_geometry")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("X");
            if ui.add(DragValue::new(&mut position.x)).changed() {
                patch.x = Some(position.x);
            }
            ui.end_row();

            ui.label("Y");
            if ui.add(DragValue::new(&mut position.y)).changed() {
                patch.y = Some(position.y);
            }
            ui.end_row();

            ui.label("Width");
            if ui.add(DragValue::new(&mut size.x).range(0.0..=f32::MAX)).changed() {
                patch.width = Some(size.x);
            }
            ui.end_row();

            ui.label("Height");
            if ui.add(DragValue::new(&mut size.y).range(0.0..=f32::MAX)).changed() {
                patch.height = Some(size.y);
            }
            ui.end_row();

            ui.label("Rotation");
            if ui.add(Slider::new(&mut rotation, 0.0..=359.0).suffix("°")).changed() {
                patch.rotation = Some(rotation);
            }
            ui.end_row();

            ui.label("Opacity");
            if ui.add(Slider::new(&mut opacity, 0.0..=1.0)).changed() {
                patch.opacity = Some(opacity);
            }
            ui.end_row();
        });
    ui.separator();

    if let Some(text) = element.as_text() {
        let mut content = text.text.clone();
        ui.label("Text");
        if ui.text_edit_singleline(&mut content).changed() {
            patch.text = Some(content);
        }

        let selected_font = fonts
            .iter()
            .find(|font| font.value == text.font_family)
            .map_or(text.font_family.as_str(), |font| font.name.as_str());
        ComboBox::from_id_salt("font_family")
            .selected_text(selected_font)
            .show_ui(ui, |ui| {
                for font in &fonts {
                    if ui
                        .selectable_label(font.value == text.font_family, font.name.as_str())
                        .clicked()
                    {
                        patch.font_family = Some(font.value.clone());
                    }
                }
            });

        let mut font_size = text.font_size;
        ui.horizontal(|ui| {
            ui.label("Size");
            if ui.add(DragValue::new(&mut font_size).range(1.0..=400.0)).changed() {
                patch.font_size = Some(font_size);
            }
        });

        ui.horizontal(|ui| {
            let mut bold = text.font_weight == FontWeight::Bold;
            if ui.checkbox(&mut bold, "Bold").changed() {
                patch.font_weight = Some(if bold { FontWeight::Bold } else { FontWeight::Normal });
            }
            let mut italic = text.font_style == FontStyle::Italic;
            if ui.checkbox(&mut italic, "Italic").changed() {
                patch.font_style = Some(if italic { FontStyle::Italic } else { FontStyle::Normal });
            }
        });

        ui.horizontal(|ui| {
            for align in TextAlign::ALL {
                if ui
                    .selectable_label(text.text_align == align, align.label())
                    .clicked()
                {
                    patch.text_align = Some(align);
                }
            }
        });

        if let Some(fill) = color_row(ui, "Color", text.fill, &palette) {
            patch.fill = Some(fill);
        }
    }

    if let Some(shape) = element.as_shape() {
        ui.horizontal(|ui| {
            for kind in ShapeKind::ALL {
                if ui
                    .selectable_label(shape.shape_type == kind, kind.label())
                    .clicked()
                {
                    patch.shape_type = Some(kind);
                }
            }
        });

        if let Some(fill) = color_row(ui, "Fill", shape.fill, &palette) {
            patch.fill = Some(fill);
        }

        let stroke = shape.stroke.unwrap_or(Color32::TRANSPARENT);
        if let Some(stroke) = color_row(ui, "Stroke", stroke, &palette) {
            patch.stroke = Some(stroke);
        }
        let mut stroke_width = shape.stroke_width;
        ui.horizontal(|ui| {
            ui.label("Stroke width");
            if ui.add(DragValue::new(&mut stroke_width).range(0.0..=50.0)).changed() {
                patch.stroke_width = Some(stroke_width);
            }
        });
    }

    if let Some(image) = element.as_image() {
        ui.label("Source");
        ui.add(egui::Label::new(egui::RichText::new(&image.src).monospace()).wrap());
    }

    // committed as one step by the app once the gesture or typing ends
    if !patch.is_empty() {
        app.session_mut().preview_element(id, &patch);
    }

    let session = app.session_mut();
    match action {
        Some(ElementAction::Duplicate) => {
            session.duplicate_element(id);
        }
        Some(ElementAction::Delete) => {
            session.delete_element(id);
        }
        Some(ElementAction::BringForward) => {
            session.bring_forward(id);
        }
        Some(ElementAction::SendBackward) => {
            session.send_backward(id);
        }
        None => {}
    }
}

/// Color picker plus palette swatches; returns the newly chosen color
fn color_row(ui: &mut egui::Ui, label: &str, current: Color32, palette: &[Color32]) -> Option<Color32> {
    let mut chosen = None;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = current;
        if ui.color_edit_button_srgba(&mut color).changed() {
            chosen = Some(color);
        }
    });
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(2.0, 2.0);
        for &swatch in palette {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
            ui.painter().rect_filled(rect, 3.0, swatch);
            if swatch == current {
                ui.painter()
                    .rect_stroke(rect, 3.0, egui::Stroke::new(2.0, Color32::WHITE));
            }
            if response.clicked() {
                chosen = Some(swatch);
            }
        }
    });
    chosen.filter(|color| *color != current)
}

fn clipart_picker(app: &mut StickerBuilderApp, ui: &mut egui::Ui) {
    ui.heading("Clipart");

    let categories: Vec<String> = std::iter::once(ALL_CATEGORIES.to_owned())
        .chain(app.session().clipart_catalog().category_names().map(str::to_owned))
        .collect();
    ComboBox::from_id_salt("clipart_category")
        .selected_text(app.clipart_filter.category.clone())
        .show_ui(ui, |ui| {
            for category in &categories {
                ui.selectable_value(&mut app.clipart_filter.category, category.clone(), category.as_str());
            }
        });
    ui.add(egui::TextEdit::singleline(&mut app.clipart_filter.search).hint_text("Search clipart..."));
    ui.separator();

    let items: Vec<ClipartItem> = app
        .session()
        .clipart_catalog()
        .search(Some(app.clipart_filter.category.as_str()), &app.clipart_filter.search)
        .into_iter()
        .cloned()
        .collect();

    if items.is_empty() {
        ui.weak("No clipart found.");
    }

    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for item in &items {
            let button = ui
                .add(egui::Button::new(item.name.as_str()).min_size(egui::vec2(80.0, 32.0)))
                .on_hover_text(item.tags.join(", "));
            if button.clicked() {
                picked = Some(item.clone());
            }
        }
    });

    if let Some(item) = picked {
        app.pick_clipart(&item);
    }

    ui.separator();
    if ui.button("Close").clicked() {
        app.select_tool(ActiveTool::Select);
    }
}

fn upload_placeholder(app: &mut StickerBuilderApp, ui: &mut egui::Ui) {
    ui.heading("Upload image");
    ui.label("Uploading your own artwork is not available yet.");
    ui.weak("Use text, shapes and clipart to build your design.");
    ui.separator();
    if ui.button("Close").clicked() {
        app.select_tool(ActiveTool::Select);
    }
}

fn sticker_options(app: &mut StickerBuilderApp, ui: &mut egui::Ui) {
    ui.heading("Sticker options");

    let options = app.session().config().sticker_product_options.clone();
    let details = app.session().details().clone();
    let mut patch = DetailsPatch::default();

    egui::Grid::new("sticker_options")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Size");
            ComboBox::from_id_salt("sticker_size")
                .selected_text(details.size.name.clone().unwrap_or_default())
                .show_ui(ui, |ui| {
                    for size in &options.sizes {
                        let selected = details.size.name.as_deref() == Some(size.name.as_str());
                        if ui.selectable_label(selected, size.name.as_str()).clicked() {
                            patch.size_name = Some(size.name.clone());
                        }
                    }
                });
            ui.end_row();

            if details.is_custom_size() {
                let mut width = details.size.width_cm;
                let mut height = details.size.height_cm;
                ui.label("Width");
                if ui
                    .add(DragValue::new(&mut width).range(MIN_CUSTOM_CM..=MAX_CUSTOM_CM).suffix(" cm"))
                    .changed()
                {
                    patch.custom_width_cm = Some(width);
                }
                ui.end_row();
                ui.label("Height");
                if ui
                    .add(DragValue::new(&mut height).range(MIN_CUSTOM_CM..=MAX_CUSTOM_CM).suffix(" cm"))
                    .changed()
                {
                    patch.custom_height_cm = Some(height);
                }
                ui.end_row();
            }

            ui.label("Shape");
            let shape_name = options
                .shapes
                .iter()
                .find(|shape| shape.value == details.shape)
                .map_or_else(|| details.shape.to_string(), |shape| shape.name.clone());
            ComboBox::from_id_salt("sticker_shape")
                .selected_text(shape_name)
                .show_ui(ui, |ui| {
                    for shape in &options.shapes {
                        if ui
                            .selectable_label(shape.value == details.shape, shape.name.as_str())
                            .clicked()
                        {
                            patch.shape = Some(shape.value);
                        }
                    }
                });
            ui.end_row();

            ui.label("Material");
            let material_name = options
                .material(&details.material)
                .map_or(details.material.clone(), |material| material.name.clone());
            ComboBox::from_id_salt("sticker_material")
                .selected_text(material_name)
                .show_ui(ui, |ui| {
                    for material in &options.materials {
                        if ui
                            .selectable_label(material.value == details.material, material.name.as_str())
                            .on_hover_text(material.description.as_str())
                            .clicked()
                        {
                            patch.material = Some(material.value.clone());
                        }
                    }
                });
            ui.end_row();

            ui.label("Quantity");
            let mut quantity = details.quantity;
            if ui
                .add(DragValue::new(&mut quantity).range(MIN_QUANTITY..=MAX_QUANTITY))
                .changed()
            {
                patch.quantity = Some(quantity);
            }
            ui.end_row();
        });

    if patch != DetailsPatch::default() {
        app.session_mut().update_details(&patch);
    }

    ui.separator();
    ui.label("Estimated price");
    ui.heading(app.session().details().formatted_price());

    if ui.button("🛒 Add to cart").clicked() {
        app.add_to_cart();
    }
    if let Some(entry) = app.cart() {
        ui.label(format!(
            "Added {} stickers ({}) to your cart.",
            entry.details.quantity,
            entry.details.formatted_price()
        ));
    }

    ui.collapsing("Export", |ui| {
        if ui.button("Copy design JSON").clicked() {
            app.copy_design_json(ui.ctx());
        }
        if ui.button("Copy SVG").clicked() {
            ui.ctx().copy_text(app.session().to_svg());
        }
    });
}
