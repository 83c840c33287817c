use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::shared::hooks::use_shell;

/// Top bar with the product name and the active role
#[component]
pub fn AppNavbar(height: u32) -> Element {
    let shell = use_shell();
    let role = shell.label(&role_label(&shell.role.read()));
    let title = shell.label("navbar.title");
    let switch_text = shell.label("menu.user.switchRoles");

    rsx! {
        nav { class: "c-navbar", style: "height: {height}px;",
            Link {
                to: Route::Home {},
                class: "c-navbar__logo",
                "🧭 {title}"
            }

            div { class: "c-navbar__actions",
                span { class: "c-navbar__role", "{role}" }
                button {
                    class: "c-button",
                    onclick: move |_| shell.switch_role(),
                    "{switch_text}"
                }
            }
        }
    }
}

/// Label key for a role name
fn role_label(role: &str) -> String {
    format!("menu.user.role.{role}")
}
