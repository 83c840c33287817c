use dioxus::prelude::*;

use crate::shared::hooks::use_shell;

/// Labels of the current route's ancestors and of the route itself
#[component]
pub fn BreadcrumbBar() -> Element {
    let shell = use_shell();
    let labels: Vec<String> = shell
        .controller
        .read()
        .state()
        .current_breadcrumb
        .iter()
        .map(|name| shell.label(name))
        .collect();

    if labels.is_empty() {
        return rsx! {};
    }

    rsx! {
        ol { class: "c-breadcrumb",
            for (index, label) in labels.into_iter().enumerate() {
                li { key: "{index}", class: "c-breadcrumb__item", "{label}" }
            }
        }
    }
}
