use dioxus::prelude::*;

use crate::app::components::{render_markdown, EmptyState, ErrorMessage, LoadingText};
use crate::app::pages::routes::Route;
use crate::app::pages::Forbidden;
use crate::domain::models::PageModule;
use crate::shared::hooks::use_shell;

/// `/` goes to the first permitted page
#[component]
pub fn Home() -> Element {
    let shell = use_shell();
    let nav = navigator();
    let default_path = shell
        .controller
        .read()
        .table()
        .default_route()
        .map(|route| route.path.clone());

    use_effect(use_reactive((&default_path,), move |(default_path,)| {
        let Some(path) = default_path else {
            return;
        };
        match path.parse::<Route>() {
            Ok(route) => {
                nav.replace(route);
            }
            Err(err) => tracing::warn!(path = %path, error = ?err, "Default route is not routable"),
        }
    }));

    if default_path.is_none() {
        return rsx! {
            EmptyState { title: shell.label("exception.empty") }
        };
    }

    rsx! {
        LoadingText { message: "Redirecting..." }
    }
}

/// A menu page, resolved through the route's lazy loader
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let shell = use_shell();
    let path = format!("/{}", segments.join("/"));
    let permitted = shell.controller.read().table().route_by_path(&path).is_some();

    let page = use_resource(use_reactive((&path,), move |(path,)| async move {
        match shell.loader_for(&path) {
            Some(loader) => loader.load().await.map(Some),
            None => Ok(None),
        }
    }));

    if !permitted {
        return rsx! {
            Forbidden { path }
        };
    }

    let content = match &*page.read() {
        Some(Ok(Some(module))) => rsx! {
            PageContent { module: PageModule::clone(module) }
        },
        Some(Err(err)) => rsx! {
            ErrorMessage { message: err.to_string() }
        },
        _ => rsx! {
            LoadingText { message: "Loading page..." }
        },
    };
    content
}

#[component]
fn PageContent(module: PageModule) -> Element {
    rsx! {
        article { class: "c-page",
            h2 { class: "c-page__title", "{module.title}" }
            for (index, section) in module.sections.iter().enumerate() {
                section { key: "{index}", class: "c-page__section",
                    h3 { "{section.heading}" }
                    div { dangerous_inner_html: render_markdown(&section.body) }
                }
            }
        }
    }
}
