//! Navigation state machine for menu clicks and URL changes.
//!
//! Each click starts an attempt numbered by a monotonic counter. Only the
//! newest attempt may touch the selection, the history or the progress
//! indicator when its page loader settles, so commits follow click order
//! rather than loader completion order.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::domain::models::{AttemptOutcome, NavigationPhase, NavigationState, PageModule};
use crate::domain::services::page_loader::RouteLoader;
use crate::domain::services::route_table::RouteTable;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{
    log_navigation_abandoned, log_navigation_committed, log_navigation_failed, log_navigation_start,
    log_navigation_superseded, log_unknown_route_key,
};

/// Receives resolved paths to push into the browser history
pub trait NavigationHistory {
    fn push(&self, path: &str);
}

/// Shared, single-threaded access to a controller across an await point
pub trait ControllerCell {
    fn with_mut<R>(&self, f: impl FnOnce(&mut NavigationController) -> R) -> R;

    /// Release the indicator of an attempt whose driver was dropped
    fn abandon(&self, attempt: u64) {
        self.with_mut(|c| c.abandon(attempt));
    }
}

impl ControllerCell for RefCell<NavigationController> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut NavigationController) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// A started navigation, handed back to [`NavigationController::complete`]
#[derive(Debug, Clone)]
pub struct NavigationAttempt {
    pub attempt: u64,
    pub key: String,
    pub path: String,
    pub loader: RouteLoader,
}

#[derive(Debug)]
pub struct NavigationController {
    table: Rc<RouteTable>,
    state: NavigationState,
    phase: NavigationPhase,
    latest_attempt: u64,
}

impl NavigationController {
    /// Initialise from the URL the session started on
    pub fn new(table: Rc<RouteTable>, pathname: &str) -> Self {
        let mut controller = Self {
            table,
            state: NavigationState::default(),
            phase: NavigationPhase::Idle,
            latest_attempt: 0,
        };
        controller.sync_location(pathname);
        controller
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn phase(&self) -> &NavigationPhase {
        &self.phase
    }

    pub fn table(&self) -> &Rc<RouteTable> {
        &self.table
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Menu click: start loading the route bound to `key`.
    ///
    /// Unknown keys leave the state untouched.
    pub fn begin(&mut self, key: &str) -> Result<NavigationAttempt> {
        let Some(route) = self.table.route_by_key(key) else {
            log_unknown_route_key(key);
            return Err(AppError::UnknownRouteKey(key.to_string()));
        };

        self.latest_attempt += 1;
        let attempt = NavigationAttempt {
            attempt: self.latest_attempt,
            key: route.key.clone(),
            path: route.path.clone(),
            loader: route.loader.clone(),
        };

        self.state.loading = true;
        self.phase = NavigationPhase::Loading {
            attempt: attempt.attempt,
            key: attempt.key.clone(),
        };
        log_navigation_start(&attempt.key, attempt.attempt);
        Ok(attempt)
    }

    /// Apply the settled loader result of `attempt`.
    ///
    /// Results of superseded attempts are dropped without touching any state.
    pub fn complete(
        &mut self,
        attempt: &NavigationAttempt,
        result: Result<Rc<PageModule>>,
    ) -> AttemptOutcome {
        if attempt.attempt != self.latest_attempt {
            log_navigation_superseded(&attempt.key, attempt.attempt, self.latest_attempt);
            return AttemptOutcome::Superseded;
        }

        self.state.loading = false;
        match result {
            Ok(_) => {
                self.state.selected_keys = BTreeSet::from([attempt.key.clone()]);
                self.state.current_path = attempt.path.clone();
                self.state.current_breadcrumb = self.table.breadcrumbs().resolve(&attempt.path);
                self.state.last_error = None;
                self.phase = NavigationPhase::Committed {
                    key: attempt.key.clone(),
                };
                log_navigation_committed(&attempt.key, &attempt.path, attempt.attempt);
                AttemptOutcome::Committed {
                    key: attempt.key.clone(),
                    path: attempt.path.clone(),
                }
            }
            Err(error) => {
                log_navigation_failed(&attempt.key, attempt.attempt, &error.to_string());
                self.state.last_error = Some(error.clone());
                self.phase = NavigationPhase::Failed {
                    key: attempt.key.clone(),
                    error: error.clone(),
                };
                AttemptOutcome::Failed(error)
            }
        }
    }

    /// URL change (initial load, back/forward, direct link).
    ///
    /// Moving to another path outranks any click still loading.
    pub fn sync_location(&mut self, pathname: &str) {
        if self.state.loading && self.state.current_path != pathname {
            self.latest_attempt += 1;
            self.state.loading = false;
            self.phase = NavigationPhase::Idle;
        }

        let trail = self.table.trail(pathname).cloned();
        self.state.current_path = pathname.to_string();
        match trail {
            Some(trail) => {
                self.state.selected_keys = BTreeSet::from([trail.key]);
                self.state.open_keys.extend(trail.ancestors);
                self.state.current_breadcrumb = trail.labels;
            }
            None => {
                self.state.selected_keys.clear();
                self.state.current_breadcrumb.clear();
            }
        }
    }

    /// The driver of `attempt` stopped before its loader settled.
    ///
    /// Only the newest attempt owns the indicator, so older ones are ignored.
    pub fn abandon(&mut self, attempt: u64) {
        if attempt != self.latest_attempt || !self.state.loading {
            return;
        }
        self.state.loading = false;
        self.phase = NavigationPhase::Idle;
        log_navigation_abandoned(attempt);
    }

    /// Submenu expand/collapse: replace the open keys, dropping unknown branches
    pub fn on_sub_menu_toggle(&mut self, _key: &str, open_keys: Vec<String>) {
        let table = &self.table;
        self.state.open_keys = open_keys
            .into_iter()
            .filter(|key| table.is_branch(key))
            .collect();
    }

    pub fn toggle_collapsed(&mut self) {
        self.state.collapsed = !self.state.collapsed;
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.state.collapsed = collapsed;
    }

    /// Install the table for a new permission set.
    ///
    /// In-flight attempts are invalidated; keys that no longer exist are dropped.
    pub fn replace_table(&mut self, table: Rc<RouteTable>) {
        if Rc::ptr_eq(&self.table, &table) {
            return;
        }
        self.table = table;
        self.latest_attempt += 1;
        self.state.loading = false;
        self.phase = NavigationPhase::Idle;

        let table = &self.table;
        self.state.open_keys.retain(|key| table.is_branch(key));
        let path = self.state.current_path.clone();
        self.sync_location(&path);
    }

    /// Dismiss a surfaced load failure
    pub fn clear_error(&mut self) {
        self.state.last_error = None;
    }
}

/// Run one click-driven navigation to completion.
///
/// Returns `Err` only for an unknown key; load failures and superseded
/// attempts come back as an [`AttemptOutcome`].
pub async fn navigate<C>(controller: &C, history: &dyn NavigationHistory, key: &str) -> Result<AttemptOutcome>
where
    C: ControllerCell + ?Sized,
{
    let attempt = controller.with_mut(|c| c.begin(key))?;
    let mut guard = AttemptGuard {
        controller,
        attempt: attempt.attempt,
        settled: false,
    };
    let result = attempt.loader.load().await;
    guard.settled = true;
    let outcome = controller.with_mut(|c| c.complete(&attempt, result));
    if let AttemptOutcome::Committed { path, .. } = &outcome {
        history.push(path);
    }
    Ok(outcome)
}

/// Abandons its attempt if dropped before the loader settles
struct AttemptGuard<'a, C: ControllerCell + ?Sized> {
    controller: &'a C,
    attempt: u64,
    settled: bool,
}

impl<C: ControllerCell + ?Sized> Drop for AttemptGuard<'_, C> {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.abandon(self.attempt);
        }
    }
}
