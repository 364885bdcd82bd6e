#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sticker_builder::StickerBuilderApp;
use sticker_builder::config::StickerConfig;

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Builder")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([820.0, 580.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sticker Builder",
        native_options,
        Box::new(|cc| Ok(Box::new(StickerBuilderApp::new(cc, config)))),
    )
}

/// Built-in catalog unless `STICKER_CONFIG` names a readable, valid JSON file
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> StickerConfig {
    use sticker_builder::config::CONFIG_ENV_VAR;

    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => StickerConfig::load(&path).unwrap_or_else(|err| {
            log::warn!(
                "Ignoring {} ({}): {}; using the built-in catalog",
                CONFIG_ENV_VAR,
                path.to_string_lossy(),
                err
            );
            StickerConfig::default()
        }),
        None => StickerConfig::default(),
    }
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(StickerBuilderApp::new(cc, StickerConfig::default())))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
