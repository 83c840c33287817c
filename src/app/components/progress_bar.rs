use dioxus::prelude::*;

use crate::shared::hooks::use_shell;

/// Thin bar across the top while a menu click is loading its page
#[component]
pub fn ProgressBar() -> Element {
    let shell = use_shell();
    let loading = shell.controller.read().is_loading();

    rsx! {
        if loading {
            div { class: "c-progress", role: "progressbar" }
        }
    }
}
