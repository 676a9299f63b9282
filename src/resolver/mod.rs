//! Locale resolution core.
//!
//! Decides which locale governs a response from the competing signals a
//! request carries: session state, an existing cookie, an explicit query
//! parameter, the `Accept-Language` header, and finally the host's TLD.
//! The resolver is pure: it returns the decision plus the cookie write it
//! wants, and the middleware performs the actual side effects.

pub mod accept_language;
pub mod country;

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::LocaleConfig;
use crate::utils::SettingsError;

/// Process-wide locale configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct LocaleSettings {
    available: HashSet<String>,
    default_locale: String,
}

impl LocaleSettings {
    pub fn new(
        available: impl IntoIterator<Item = String>,
        default_locale: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let available: HashSet<String> = available.into_iter().collect();
        let default_locale = default_locale.into();

        if available.is_empty() {
            return Err(SettingsError::NoAvailableLocales);
        }
        if !available.contains(&default_locale) {
            return Err(SettingsError::DefaultNotAvailable { locale: default_locale });
        }

        Ok(Self { available, default_locale })
    }

    pub fn from_config(config: &LocaleConfig) -> Result<Self, SettingsError> {
        Self::new(config.available.iter().cloned(), config.default.clone())
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn is_available(&self, locale: &str) -> bool {
        self.available.contains(locale)
    }
}

/// Read-only bundle of the locale signals carried by one request.
///
/// Empty strings count as absent, matching how frameworks hand over unset
/// session and cookie values.
#[derive(Debug, Default)]
pub struct RequestSignals<'a> {
    pub session_locale: Option<&'a str>,
    pub cookie_locale: Option<&'a str>,
    pub param_locale: Option<&'a str>,
    pub accept_language: Option<&'a str>,
    pub host: &'a str,
}

/// The resolved locale plus the cookie write the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locale: String,
    /// Set on the param and successful-header paths only.
    pub persist_cookie: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LocaleResolver {
    settings: Arc<LocaleSettings>,
}

impl LocaleResolver {
    pub fn new(settings: Arc<LocaleSettings>) -> Self {
        Self { settings }
    }

    /// Resolve the locale for one request.
    ///
    /// Total: every signal bundle maps to a member of the available set,
    /// malformed input degrades to a fallback instead of erroring. First
    /// matching branch wins: session > cookie > param > header > host.
    pub fn resolve(&self, signals: &RequestSignals<'_>) -> Resolution {
        if let Some(candidate) = present(signals.session_locale) {
            tracing::debug!("Session locale present: {}", candidate);
            return Resolution { locale: self.locale_if_available(candidate), persist_cookie: None };
        }

        if let Some(candidate) = present(signals.cookie_locale) {
            tracing::debug!("Cookie locale present: {}", candidate);
            return Resolution { locale: self.locale_if_available(candidate), persist_cookie: None };
        }

        if let Some(candidate) = present(signals.param_locale) {
            tracing::debug!("Param locale present: {}", candidate);
            let locale = self.locale_if_available(candidate);
            return Resolution { persist_cookie: Some(locale.clone()), locale };
        }

        match accept_language::parse(signals.accept_language) {
            Some(candidate) => {
                tracing::debug!("Accept-Language candidate: {}", candidate);
                let locale = self.locale_if_available(&candidate);
                Resolution { persist_cookie: Some(locale.clone()), locale }
            }
            None => {
                // Malformed or missing header: derive from the host TLD.
                // This path never persists a cookie.
                let locale = self.host_fallback(signals.host);
                tracing::debug!("Host fallback locale: {}", locale);
                Resolution { locale, persist_cookie: None }
            }
        }
    }

    /// The candidate if the application supports it, the default locale
    /// otherwise. Never fails.
    fn locale_if_available(&self, candidate: &str) -> String {
        if self.settings.is_available(candidate) {
            candidate.to_string()
        } else {
            tracing::debug!("Locale {} not available, using default", candidate);
            self.settings.default_locale().to_string()
        }
    }

    /// Map the host's last dot-delimited label to a language. Unknown or
    /// unsupported suffixes fall back to the default locale.
    fn host_fallback(&self, host: &str) -> String {
        let tld = host.rsplit('.').next().unwrap_or(host).to_ascii_lowercase();
        match country::country_to_language(&tld) {
            Some(language) => self.locale_if_available(language),
            None => self.settings.default_locale().to_string(),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
