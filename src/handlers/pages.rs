use axum::{extract::Path, http::StatusCode, Json};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::domain::services::EmbeddedPageSource;
use crate::shared::errors::Result;

static PAGES: Lazy<Result<EmbeddedPageSource>> = Lazy::new(EmbeddedPageSource::embedded);

/// GET /pages/{file}
/// Serve the page manifest for one route key (`{key}.json`, key URL-encoded)
pub async fn page_manifest_handler(Path(file): Path<String>) -> std::result::Result<Json<Value>, StatusCode> {
    let key = file.strip_suffix(".json").unwrap_or(&file);

    let pages = PAGES.as_ref().map_err(|e| {
        tracing::error!("Failed to load page manifests: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match pages.manifest(key) {
        Some(manifest) => Ok(Json(manifest.clone())),
        None => {
            tracing::warn!(route_key = %key, "No page manifest for route");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_known_manifest() {
        let Json(manifest) = page_manifest_handler(Path("dashboard/workplace.json".to_string()))
            .await
            .unwrap();
        assert!(manifest.get("title").is_some());
    }

    #[tokio::test]
    async fn test_unknown_manifest_is_not_found() {
        let status = page_manifest_handler(Path("nowhere.json".to_string())).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
