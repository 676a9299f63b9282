//! Per-request locale detection for axum applications.
//!
//! Resolves which locale governs a response from the competing signals a
//! request carries — session state, an existing `locale` cookie, a `locale`
//! query parameter, the `Accept-Language` header, and the host's TLD — and
//! persists the decision as a cookie where appropriate. The resolution core
//! is a pure function over the per-request signals plus immutable startup
//! configuration; the middleware owns the side effects.

pub mod config;
pub mod middleware;
pub mod resolver;
pub mod utils;

#[cfg(test)]
mod tests;

pub use middleware::{locale_middleware, CurrentLocale, LocaleState, SessionLocale, LOCALE_KEY};
pub use resolver::{LocaleResolver, LocaleSettings, RequestSignals, Resolution};
