use thiserror::Error;

/// Startup-time locale configuration errors.
///
/// The request path is total by design: resolution never fails and all
/// malformed input degrades to a fallback locale. The only failure surface
/// is the configuration the process boots with.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no available locales configured")]
    NoAvailableLocales,

    #[error("default locale {locale:?} is not in the available set")]
    DefaultNotAvailable { locale: String },
}
