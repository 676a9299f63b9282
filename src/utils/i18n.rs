//! Request-scoped locale storage.
//!
//! Thread-local slot holding the locale resolved for the request currently
//! being served. The locale middleware writes it; application code that has
//! no access to request extensions reads it.

use std::cell::RefCell;

/// Locale in effect before any resolution has run.
pub const DEFAULT_LOCALE: &str = "en";

thread_local! {
    static CURRENT_LOCALE: RefCell<String> = RefCell::new(DEFAULT_LOCALE.to_string());
}

/// Set the current locale for the current thread
pub fn set_locale(locale: &str) {
    CURRENT_LOCALE.with(|l| {
        *l.borrow_mut() = locale.to_string();
    });
}

/// Get the current locale for the current thread
pub fn get_locale() -> String {
    CURRENT_LOCALE.with(|l| l.borrow().clone())
}
