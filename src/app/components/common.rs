use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(
    message: String,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "c-button",
                    onclick: move |_| handler.call(()),
                    "Dismiss"
                }
            }
        }
    }
}

// Shown when a role has nothing to navigate to
#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "c-empty-state",
            h3 { class: "c-empty-state__title", "{title}" }
            if let Some(hint) = hint {
                p { class: "c-empty-state__hint", "{hint}" }
            }
        }
    }
}
