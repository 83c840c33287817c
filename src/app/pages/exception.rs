use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::shared::hooks::use_shell;

/// Shown for paths outside the active role's route table
#[component]
pub fn Forbidden(path: String) -> Element {
    let message = use_shell().label("exception.403");

    rsx! {
        div { class: "c-empty-state c-exception",
            h1 { class: "c-exception__code", "403" }
            p { "{message}" }
            p { class: "c-exception__path", "{path}" }
            Link {
                to: Route::Home {},
                class: "c-button c-button--primary",
                "Back to home"
            }
        }
    }
}
