//! Locale resolution middleware
//!
//! Gathers the locale signals from the incoming request (session, cookie,
//! query parameter, Accept-Language header, request host), resolves the
//! locale that governs the response, and persists the decision as a cookie
//! on the paths that ask for it.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Host, Query, Request, State},
    http::header::ACCEPT_LANGUAGE,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::resolver::{LocaleResolver, RequestSignals};
use crate::utils::set_locale;

/// Cookie and query-parameter key carrying the locale.
pub const LOCALE_KEY: &str = "locale";

/// Locale stored in the session by an upstream session layer.
///
/// The middleware only reads this extension; whatever session store the
/// application runs is responsible for inserting it.
#[derive(Debug, Clone)]
pub struct SessionLocale(pub String);

/// Locale resolved for the current request, available to handlers through
/// request extensions.
#[derive(Debug, Clone)]
pub struct CurrentLocale(pub String);

#[derive(Clone)]
pub struct LocaleState {
    pub resolver: Arc<LocaleResolver>,
}

/// Middleware resolving the request locale.
///
/// Precedence: session > cookie > query parameter > Accept-Language header
/// > host TLD. The resolved locale is stored in request extensions (and the
/// thread-local slot) before the inner service runs; a `locale` cookie is
/// attached to the response when the resolution requests persistence.
pub async fn locale_middleware(
    State(state): State<LocaleState>,
    jar: CookieJar,
    host: Option<Host>,
    params: Option<Query<HashMap<String, String>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let session_locale = req.extensions().get::<SessionLocale>().map(|s| s.0.clone());
    let cookie_locale = jar.get(LOCALE_KEY).map(|c| c.value().to_string());
    let param_locale = params.as_ref().and_then(|Query(p)| p.get(LOCALE_KEY).cloned());
    let accept_language = req
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    // Only the domain matters for TLD lookup, drop any port suffix
    let host = host.map(|Host(h)| h).unwrap_or_default();
    let host = host.split(':').next().unwrap_or("");

    let signals = RequestSignals {
        session_locale: session_locale.as_deref(),
        cookie_locale: cookie_locale.as_deref(),
        param_locale: param_locale.as_deref(),
        accept_language: accept_language.as_deref(),
        host,
    };

    let resolution = state.resolver.resolve(&signals);
    tracing::info!("Locale set to {}", resolution.locale);

    // Expose the decision to handlers and to the thread-local slot
    set_locale(&resolution.locale);
    req.extensions_mut().insert(CurrentLocale(resolution.locale.clone()));

    let response = next.run(req).await;

    match resolution.persist_cookie {
        Some(locale) => {
            tracing::debug!("Cookie set to {}", locale);
            (jar.add(Cookie::new(LOCALE_KEY, locale)), response).into_response()
        }
        None => response,
    }
}
