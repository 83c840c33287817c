pub mod exception;
pub mod page_view;
pub mod routes;

pub use exception::Forbidden;
pub use page_view::{Home, Page};
