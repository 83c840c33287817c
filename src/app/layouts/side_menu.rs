use dioxus::prelude::*;

use crate::app::components::EmptyState;
use crate::domain::models::{MenuEntry, MenuEntryKind};
use crate::shared::hooks::use_shell;

/// Collapsible side menu built from the authorized route tree
#[component]
pub fn SideMenu(width: u32) -> Element {
    let shell = use_shell();
    let (entries, collapsed) = {
        let controller = shell.controller.read();
        (controller.table().menu().to_vec(), controller.state().collapsed)
    };

    let menu_class = if collapsed { "c-menu c-menu--collapsed" } else { "c-menu" };

    rsx! {
        aside { class: "c-sider", style: "width: {width}px;",
            if entries.is_empty() {
                EmptyState { title: shell.label("exception.empty") }
            } else {
                ul { class: "{menu_class}",
                    for entry in entries {
                        MenuNode { key: "{entry.key}", entry }
                    }
                }
            }
            div {
                class: "c-sider__collapse",
                title: if collapsed { "Expand menu" } else { "Collapse menu" },
                onclick: move |_| shell.toggle_collapsed(),
                if collapsed { "»" } else { "«" }
            }
        }
    }
}

/// One menu entry; submenus render their children recursively
#[component]
fn MenuNode(entry: MenuEntry) -> Element {
    let shell = use_shell();
    let label = shell.label(&entry.title.label);
    let icon = entry.title.icon.glyph();
    let (selected, open) = {
        let controller = shell.controller.read();
        (controller.state().is_selected(&entry.key), controller.state().is_open(&entry.key))
    };

    match &entry.kind {
        MenuEntryKind::Item { path, .. } => {
            let item_class = if selected {
                "c-menu__item c-menu__item--selected"
            } else {
                "c-menu__item"
            };
            let key = entry.key.clone();

            if entry.is_top_level() {
                // Level 1 items render as links
                rsx! {
                    li {
                        a {
                            class: "{item_class}",
                            href: "{path}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                shell.click(key.clone());
                            },
                            span { class: "c-menu__icon", "{icon}" }
                            span { class: "c-menu__label", "{label}" }
                        }
                    }
                }
            } else {
                rsx! {
                    li {
                        class: "{item_class}",
                        onclick: move |_| shell.click(key.clone()),
                        span { class: "c-menu__icon", "{icon}" }
                        span { class: "c-menu__label", "{label}" }
                    }
                }
            }
        }
        MenuEntryKind::SubMenu { children } => {
            let submenu_class = if open {
                "c-menu__submenu c-menu__submenu--open"
            } else {
                "c-menu__submenu"
            };
            let key = entry.key.clone();

            rsx! {
                li { class: "{submenu_class}",
                    div {
                        class: "c-menu__submenu-title",
                        onclick: move |_| shell.toggle_open(&key),
                        span { class: "c-menu__icon", "{icon}" }
                        span { class: "c-menu__label", "{label}" }
                        span { class: "c-menu__arrow", "›" }
                    }
                    if open {
                        ul { class: "c-menu",
                            for child in children.iter().cloned() {
                                MenuNode { key: "{child.key}", entry: child }
                            }
                        }
                    }
                }
            }
        }
    }
}
