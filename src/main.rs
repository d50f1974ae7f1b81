#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 420.0])
            .with_min_inner_size([480.0, 340.0])
            .with_title(sketchpad::APP_NAME),
        ..Default::default()
    };
    eframe::run_native(
        sketchpad::APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(sketchpad::SketchpadApp::new(cc)?))),
    )
}

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, sketchpad::SketchpadError> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| sketchpad::SketchpadError::Platform("no document".to_owned()))?
        .get_element_by_id(id)
        .ok_or_else(|| sketchpad::SketchpadError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| sketchpad::SketchpadError::CanvasNotFound(id.to_owned()))
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = match find_canvas(CANVAS_ID) {
            Ok(canvas) => canvas,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(sketchpad::SketchpadApp::new(cc)?))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
}
