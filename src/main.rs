use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use locale_detector::config::Config;
use locale_detector::middleware::{locale_middleware, CurrentLocale, LocaleState};
use locale_detector::resolver::{LocaleResolver, LocaleSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    let _guard = init_tracing(&config);

    let settings = LocaleSettings::from_config(&config.locale)?;
    let state = LocaleState { resolver: Arc::new(LocaleResolver::new(Arc::new(settings))) };

    let app = Router::new()
        .route("/", get(current_locale))
        .layer(middleware::from_fn_with_state(state, locale_middleware))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Demo handler echoing the locale the middleware resolved.
async fn current_locale(Extension(locale): Extension<CurrentLocale>) -> Json<serde_json::Value> {
    Json(json!({ "locale": locale.0 }))
}

/// Initialize tracing with the configured level, logging to a rolling file
/// when one is configured and to stdout otherwise.
///
/// The returned guard must stay alive for the life of the process so the
/// non-blocking writer keeps flushing.
fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.logging.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let prefix = path.file_name().unwrap_or_else(|| OsStr::new("locale-detector.log"));
            let appender = tracing_appender::rolling::daily(dir, prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
