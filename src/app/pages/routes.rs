use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{BreadcrumbBar, ErrorMessage, ProgressBar};
use crate::app::layouts::{AppNavbar, SideMenu};
use crate::app::pages::{Home, Page};
use crate::shared::hooks::{use_shell_provider, SharedShell};
use crate::shared::services::ShellService;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Redirects to the first permitted page
    #[route("/")]
    Home {},

    // Every menu path; unknown paths render the 403 view
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let service = use_hook(|| ShellService::embedded().map(|service| SharedShell(Rc::new(service))));

    match service {
        Ok(service) => rsx! {
            ShellRoot { service }
        },
        Err(err) => {
            tracing::error!(error = %err, "Shell failed to start");
            rsx! {
                ErrorMessage { message: format!("Failed to start: {err}") }
            }
        }
    }
}

/// Makes the startup services visible to the router's layout
#[component]
fn ShellRoot(service: SharedShell) -> Element {
    use_context_provider(|| service.clone());

    use_effect(|| {
        tracing::info!("Admin shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let service = use_context::<SharedShell>();
    let path = use_route::<Route>().to_string();
    let shell = use_shell_provider(service, &path);

    // Back/forward and typed URLs bypass the menu; keep selection in step
    use_effect(use_reactive((&path,), move |(path,)| shell.sync_location(&path)));

    let settings = shell.settings.read().clone();
    let (collapsed, last_error) = {
        let controller = shell.controller.read();
        (controller.state().collapsed, controller.state().last_error.clone())
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        ProgressBar {}
        div { class: "c-layout",
            if settings.navbar {
                AppNavbar { height: settings.navbar_height }
            }

            div { class: "c-layout__body",
                if settings.menu {
                    SideMenu { width: settings.sider_width(collapsed) }
                }

                main { class: "c-layout__main",
                    BreadcrumbBar {}
                    if let Some(error) = last_error {
                        ErrorMessage {
                            message: error.to_string(),
                            on_dismiss: move |_| shell.dismiss_error(),
                        }
                    }
                    Outlet::<Route> {}
                }
            }

            if settings.footer {
                footer { class: "c-layout__footer", "Admin Shell" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_paths_are_routable() {
        let route: Route = "/dashboard/workplace".parse().unwrap();
        assert_eq!(
            route,
            Route::Page {
                segments: vec!["dashboard".to_string(), "workplace".to_string()]
            }
        );
        assert_eq!(route.to_string(), "/dashboard/workplace");
    }

    #[test]
    fn test_root_is_home() {
        let route: Route = "/".parse().unwrap();
        assert_eq!(route, Route::Home {});
    }
}
