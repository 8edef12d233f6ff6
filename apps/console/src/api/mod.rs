use std::sync::Arc;

use gloo_storage::{LocalStorage, Storage};
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::AppConfig;

/// Backend coordinates for the console. Requests are not issued yet, but the
/// headers a real call would carry are assembled here.
#[derive(Clone, Debug)]
pub struct ApiContext {
    config: Arc<AppConfig>,
    base_url: String,
}

impl ApiContext {
    pub fn new(config: AppConfig) -> Self {
        let base_url = crate::config::normalize_base_url(&config.api_base_url);
        Self {
            config: Arc::new(config),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the bearer token from browser local storage. Only callable in the browser.
    pub fn stored_token(&self) -> Option<String> {
        // The token is written as a bare string, not JSON, so bypass gloo's serde layer.
        LocalStorage::raw()
            .get_item(&self.config.token_storage_key)
            .ok()
            .flatten()
    }

    pub fn authorized_headers(&self) -> HeaderMap {
        build_headers(self.stored_token().as_deref())
    }
}

pub(crate) fn bearer_value(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

pub(crate) fn build_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(value) = token.and_then(bearer_value) {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                headers.insert(header::AUTHORIZATION, value);
            }
            Err(err) => tracing::warn!("stored token is not a valid header value: {err}"),
        }
    }

    headers
}
