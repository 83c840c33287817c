// Routing core: models and services, no UI framework types
pub mod models;
pub mod services;
