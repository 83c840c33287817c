/// Page manifests served to the browser's page loader
pub mod pages;

pub use pages::page_manifest_handler;
