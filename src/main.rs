//! Admin Shell - Main Entry Point
//!
//! Serves the Dioxus application together with the page manifest endpoint
//! used by the browser's route loaders.

use admin_shell::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;

    use admin_shell::handlers::page_manifest_handler;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Admin Shell...");

    dioxus::serve(|| async move {
        // NOTE: Axum 0.8 uses {param} syntax instead of :param
        let router = dioxus::server::router(App).route("/pages/{file}", get(page_manifest_handler));
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Admin Shell initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
