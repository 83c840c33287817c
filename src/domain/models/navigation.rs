use std::collections::BTreeSet;

use crate::shared::errors::AppError;

/// Session-wide navigation state read by the renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_keys: BTreeSet<String>,
    pub open_keys: BTreeSet<String>,
    pub collapsed: bool,
    pub current_breadcrumb: Vec<String>,
    pub current_path: String,
    /// Progress indicator
    pub loading: bool,
    /// Last load failure, cleared by the next commit
    pub last_error: Option<AppError>,
}

impl NavigationState {
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_keys.contains(key)
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open_keys.contains(key)
    }
}

/// Phase of the most recent navigation attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationPhase {
    #[default]
    Idle,
    Loading { attempt: u64, key: String },
    Committed { key: String },
    Failed { key: String, error: AppError },
}

/// What happened to one attempt once its loader settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Committed { key: String, path: String },
    Failed(AppError),
    /// A newer attempt started; the result was discarded
    Superseded,
}
