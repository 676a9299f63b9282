// Common test utilities and helpers

use std::sync::Arc;

use axum::{middleware, response::Response, routing::get, Extension, Router};

use crate::middleware::{locale_middleware, CurrentLocale, LocaleState, SessionLocale};
use crate::resolver::{LocaleResolver, LocaleSettings};

/// Settings used across the suite: en, fr, de plus the grouped Spanish
/// locale, defaulting to en.
pub fn test_settings() -> Arc<LocaleSettings> {
    Arc::new(
        LocaleSettings::new(
            ["en", "fr", "de", "es-CL"].iter().map(|l| l.to_string()),
            "en",
        )
        .expect("Failed to build test settings"),
    )
}

pub fn test_resolver() -> LocaleResolver {
    LocaleResolver::new(test_settings())
}

/// Router running the locale middleware, with a handler that echoes the
/// resolved locale in the response body.
pub fn test_app() -> Router {
    let state = LocaleState { resolver: Arc::new(test_resolver()) };
    Router::new()
        .route(
            "/",
            get(|Extension(locale): Extension<CurrentLocale>| async move { locale.0 }),
        )
        .layer(middleware::from_fn_with_state(state, locale_middleware))
}

/// Same router with a fixed session locale injected ahead of the locale
/// middleware, standing in for an upstream session layer.
pub fn test_app_with_session(session_locale: &str) -> Router {
    test_app().layer(Extension(SessionLocale(session_locale.to_string())))
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
