// Custom Dioxus hooks
pub mod use_role;
pub mod use_shell;

pub use use_role::{save_role, use_role};
pub use use_shell::{use_shell, use_shell_provider, RouterHistory, ShellContext, SharedShell};
