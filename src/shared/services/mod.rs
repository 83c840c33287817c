// Application services
// Startup wiring shared by the server and the browser

pub mod shell_service;

pub use shell_service::ShellService;
