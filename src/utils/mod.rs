pub mod error;
pub mod i18n;

pub use error::SettingsError;
pub use i18n::{get_locale, set_locale, DEFAULT_LOCALE};
