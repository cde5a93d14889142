//! Native development runner; the browser entry point is `start` in lib.rs.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Zheng Shangyou",
        native_options,
        Box::new(|_cc| Ok(Box::new(shangyou::game::App::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
