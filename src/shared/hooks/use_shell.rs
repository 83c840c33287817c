use std::collections::BTreeSet;
use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use dioxus::router::Navigator;

use crate::app::pages::routes::Route;
use crate::config::LayoutSettings;
use crate::domain::services::{navigate, ControllerCell, NavigationController, NavigationHistory, RouteLoader};
use crate::shared::hooks::use_role::{save_role, use_role};
use crate::shared::services::ShellService;
use crate::shared::utils::UrlOverrides;

/// Cheap handle to the startup services, comparable by identity for props
#[derive(Clone)]
pub struct SharedShell(pub Rc<ShellService>);

impl PartialEq for SharedShell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedShell {
    type Target = ShellService;

    fn deref(&self) -> &ShellService {
        &self.0
    }
}

impl ControllerCell for Signal<NavigationController> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut NavigationController) -> R) -> R {
        let mut signal = *self;
        let mut controller = signal.write();
        f(&mut controller)
    }

    fn abandon(&self, attempt: u64) {
        let mut signal = *self;
        // Gone once the shell unmounts
        if let Ok(mut controller) = signal.try_write() {
            controller.abandon(attempt);
        }
    }
}

/// Pushes committed paths into the Dioxus router
#[derive(Clone, Copy)]
pub struct RouterHistory(Navigator);

impl NavigationHistory for RouterHistory {
    fn push(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.0.push(route);
            }
            Err(err) => tracing::warn!(path = path, error = ?err, "Committed path is not routable"),
        }
    }
}

/// Shell state shared by the layout, menu, navbar and pages
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub service: Signal<SharedShell>,
    pub role: Signal<String>,
    pub controller: Signal<NavigationController>,
    pub settings: Signal<LayoutSettings>,
    history: RouterHistory,
}

impl ShellContext {
    /// Menu click: load the page, then commit (last click wins).
    ///
    /// The task outlives the clicked menu item, which unmounts when its
    /// submenu folds.
    pub fn click(&self, key: String) {
        let controller = self.controller;
        let history = self.history;
        spawn_forever(async move {
            if let Err(err) = navigate(&controller, &history, &key).await {
                tracing::debug!(route_key = %key, error = %err, "Menu click ignored");
            }
        });
    }

    /// Expand or fold the submenu `key`
    pub fn toggle_open(&self, key: &str) {
        let mut controller = self.controller;
        let mut open_keys: BTreeSet<String> = controller.peek().state().open_keys.clone();
        if !open_keys.remove(key) {
            open_keys.insert(key.to_string());
        }
        controller
            .write()
            .on_sub_menu_toggle(key, open_keys.into_iter().collect());
    }

    pub fn toggle_collapsed(&self) {
        let mut controller = self.controller;
        controller.write().toggle_collapsed();
    }

    /// URL changed outside of a menu click
    pub fn sync_location(&self, path: &str) {
        let mut controller = self.controller;
        if controller.peek().state().current_path != path {
            controller.write().sync_location(path);
        }
    }

    pub fn dismiss_error(&self) {
        let mut controller = self.controller;
        controller.write().clear_error();
    }

    /// Cycle to the next configured role and rebuild the menu for it
    pub fn switch_role(&self) {
        let service = self.service.peek().clone();
        let mut role = self.role;
        let next = service.config().next_role(&role.peek()).to_string();
        tracing::info!(role = %next, "Switching role");

        save_role(&next);
        let table = service.table_for(&next);
        role.set(next);
        let mut controller = self.controller;
        controller.write().replace_table(table);
    }

    /// Loader for the route bound to `path`, without subscribing to the controller
    pub fn loader_for(&self, path: &str) -> Option<RouteLoader> {
        self.controller
            .peek()
            .table()
            .route_by_path(path)
            .map(|route| route.loader.clone())
    }

    /// Display text for a label key
    pub fn label(&self, name: &str) -> String {
        self.service.peek().config().label(name).to_string()
    }
}

/// Create the shell state for the current session and provide it to children
pub fn use_shell_provider(service: SharedShell, pathname: &str) -> ShellContext {
    let role = use_role(&service);
    let controller = use_signal(|| service.controller_for(&role.peek(), pathname));
    let settings = use_signal(|| {
        service
            .config()
            .settings
            .apply_overrides(&UrlOverrides::from_window())
    });
    let history = RouterHistory(navigator());
    let service = use_signal(|| service);

    use_context_provider(|| ShellContext {
        service,
        role,
        controller,
        settings,
        history,
    })
}

/// Shell state provided by the layout
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}
