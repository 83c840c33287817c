// Utility functions
// URL parsing helpers

pub mod url_params;

pub use url_params::{parse_query, UrlOverrides};
