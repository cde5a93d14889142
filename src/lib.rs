//! Zheng Shangyou - a turn-based card-shedding game for the browser
//!
//! The rule engine lives in the `shangyou-shared` crate; this crate is the
//! egui view layer, compiled to WASM for the browser and runnable natively
//! through eframe for development.

pub mod game;

#[allow(unused_imports)]
use eframe::AppCreator;
#[cfg(target_arch = "wasm32")]
use eframe::{WebOptions, WebRunner};
#[cfg(target_arch = "wasm32")]
use game::App;
#[allow(unused_imports)]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlCanvasElement};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    /// JavaScript console.log binding for debug output
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Platform-agnostic println! alternative that works in both native and WASM
/// targets: console.log() in the browser, println! elsewhere.
#[macro_export]
macro_rules! sprintln {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::log(format!($($arg)*).as_str());
        #[cfg(not(target_arch = "wasm32"))]
        println!($($arg)*);
    }};
}

/// Helper function to start the eframe app with a canvas element.
#[cfg(target_arch = "wasm32")]
pub fn start_game(
    canvas: web_sys::HtmlCanvasElement,
    init: AppCreator<'static>,
) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Forward tracing::info!/warn!/error! to the browser console.
    tracing_wasm::set_as_global_default();

    let web_options = WebOptions::default();
    spawn_local(async move {
        if let Err(e) = WebRunner::new().start(canvas, web_options, init).await {
            // Avoid panicking inside a wasm task; log instead
            crate::sprintln!("Failed to start eframe: {:?}", e);
        }
    });
    Ok(())
}

/// Calculate the DPI scale factor from screen resolution and device pixel
/// ratio, used with `ctx.set_pixels_per_point()`.
#[cfg(target_arch = "wasm32")]
pub fn calculate_dpi_scale() -> f32 {
    let window = window().expect("no global window exists");
    let device_pixel_ratio = window.device_pixel_ratio() as f32;

    let screen = window.screen().expect("unable to get screen object");
    let width = screen.width().unwrap_or(1920) as f32;
    let height = screen.height().unwrap_or(1080) as f32;
    let diagonal = (width * width + height * height).sqrt();

    let base_scale = if diagonal > 3000.0 {
        1.8
    } else if diagonal > 2000.0 {
        1.4
    } else if diagonal > 1500.0 {
        1.2
    } else {
        1.0
    };

    base_scale * (device_pixel_ratio / 2.0).clamp(0.75, 1.5)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn calculate_dpi_scale() -> f32 {
    // Default for non-WASM targets
    1.5
}

/// Main entry point for starting the WASM application in a browser.
///
/// Called from JavaScript with the canvas element to render to:
///
/// ```javascript
/// import init, {start} from './pkg/shangyou.js';
///
/// async function run() {
///     await init();
///     start(document.getElementById("shangyou_canvas"));
/// }
///
/// run();
/// ```
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let init = Box::new(|_cc: &eframe::CreationContext| {
        let app: Box<dyn eframe::App> = Box::new(App::new());
        Ok(app)
    });
    start_game(canvas, init)
}
