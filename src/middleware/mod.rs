pub mod locale;

pub use locale::{locale_middleware, CurrentLocale, LocaleState, SessionLocale, LOCALE_KEY};
