#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sticker_sketchpad::{SketchConfig, SketchpadApp};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SketchConfig::from_env().map_err(|e| {
        log::error!("{e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Sketchpad")
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sticker Sketchpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchpadApp::new(cc, config)?))),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use sticker_sketchpad::SketchError;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = match find_canvas("the_canvas_id") {
            Ok(canvas) => canvas,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, SketchConfig::default())?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start sketchpad: {e:?}");
        }
    });

    fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, SketchError> {
        let unavailable = |what: &str| SketchError::SurfaceUnavailable(what.to_owned());
        web_sys::window()
            .ok_or_else(|| unavailable("no window"))?
            .document()
            .ok_or_else(|| unavailable("no document"))?
            .get_element_by_id(id)
            .ok_or_else(|| unavailable("canvas element not found"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| unavailable("element is not a canvas"))
    }
}
