pub mod errors;
pub mod logging;
pub mod services;
pub mod utils;

// Dioxus hooks (fullstack: both client and server)
pub mod hooks;
