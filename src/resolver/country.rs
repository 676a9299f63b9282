//! Country-code to language fallback table.
//!
//! Maps a two-letter country/TLD code to the locale most commonly spoken
//! there. Used as the last resort when a request carries no usable locale
//! signal besides the host it was addressed to.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static MAPPINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // English
        ("au", "en"),
        ("ca", "en"),
        ("eu", "en"),
        ("ie", "en"),
        ("nz", "en"),
        ("sg", "en"),
        ("uk", "en"),
        ("us", "en"),
        // French
        ("cd", "fr"),
        ("cg", "fr"),
        ("cm", "fr"),
        ("fr", "fr"),
        ("mg", "fr"),
        // German
        ("at", "de"),
        ("ch", "de"),
        ("de", "de"),
        ("li", "de"),
        ("lu", "de"),
        // Portuguese
        ("ao", "pt"),
        ("br", "pt"),
        ("mz", "pt"),
        ("pt", "pt"),
        // Spanish
        ("ar", "es-CL"),
        ("cl", "es-CL"),
        ("co", "es-CL"),
        ("cu", "es-CL"),
        ("es", "es-CL"),
        ("mx", "es-CL"),
        // All other languages
        ("bg", "bg"),
        ("by", "be"),
        ("cn", "zh"),
        ("cz", "cs"),
        ("dk", "da"),
        ("ee", "et"),
        ("fi", "fi"),
        ("gr", "el"),
        ("hr", "hr"),
        ("hu", "hu"),
        ("il", "he"),
        ("in", "hi"),
        ("is", "is"),
        ("it", "it"),
        ("jp", "ja"),
        ("kr", "ko"),
        ("lt", "lt"),
        ("lv", "lv"),
        ("mn", "mn"),
        ("nl", "nl"),
        ("no", "no"),
        ("pl", "pl"),
        ("ro", "ro"),
        ("rs", "sr"),
        ("ru", "ru"),
        ("se", "sv"),
        ("si", "sl"),
        ("sk", "sk"),
        ("th", "th"),
        ("tr", "tr"),
        ("ua", "uk"),
        ("vn", "vi"),
    ])
});

/// Look up the language mapped to a lowercase country/TLD code.
pub fn country_to_language(code: &str) -> Option<&'static str> {
    MAPPINGS.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_families() {
        assert_eq!(country_to_language("uk"), Some("en"));
        assert_eq!(country_to_language("cm"), Some("fr"));
        assert_eq!(country_to_language("at"), Some("de"));
        assert_eq!(country_to_language("br"), Some("pt"));
        assert_eq!(country_to_language("mx"), Some("es-CL"));
    }

    #[test]
    fn test_singleton_mappings() {
        assert_eq!(country_to_language("jp"), Some("ja"));
        assert_eq!(country_to_language("ua"), Some("uk"));
        assert_eq!(country_to_language("se"), Some("sv"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(country_to_language("zz"), None);
        assert_eq!(country_to_language(""), None);
        assert_eq!(country_to_language("localhost"), None);
    }
}
