use dioxus::prelude::*;

use crate::shared::services::ShellService;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const ROLE_STORAGE_KEY: &str = "userRole";

/// Active role, restored from localStorage when the browser has one saved
pub fn use_role(service: &ShellService) -> Signal<String> {
    use_signal(|| service.resolve_role(load_saved_role().as_deref()))
}

#[cfg(target_arch = "wasm32")]
fn load_saved_role() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(ROLE_STORAGE_KEY).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn load_saved_role() -> Option<String> {
    // No localStorage during server rendering
    None
}

/// Save role to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_role(role: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(ROLE_STORAGE_KEY, role);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_role(_role: &str) {
    // No-op on server
}
