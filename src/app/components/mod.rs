// Reusable UI components
pub mod breadcrumb_bar;
pub mod common;
pub mod markdown;
pub mod progress_bar;

pub use breadcrumb_bar::BreadcrumbBar;
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use markdown::render_markdown;
pub use progress_bar::ProgressBar;
