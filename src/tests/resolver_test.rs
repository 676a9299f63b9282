use crate::resolver::RequestSignals;
use crate::tests::common::test_resolver;

#[test]
fn test_totality_on_empty_signals() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals::default());
    assert_eq!(resolution.locale, "en", "Empty signals should yield the default locale");
    assert_eq!(resolution.persist_cookie, None);
}

#[test]
fn test_session_wins_over_everything() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        session_locale: Some("de"),
        cookie_locale: Some("fr"),
        param_locale: Some("es-CL"),
        accept_language: Some("fr;q=0.9"),
        host: "example.it",
    });
    assert_eq!(resolution.locale, "de");
    assert_eq!(resolution.persist_cookie, None, "Session path must not persist a cookie");
}

#[test]
fn test_cookie_wins_over_param_and_header() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        cookie_locale: Some("fr"),
        param_locale: Some("de"),
        accept_language: Some("de"),
        host: "example.com",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "fr");
    assert_eq!(resolution.persist_cookie, None, "Cookie path must not persist a cookie");
}

#[test]
fn test_param_path_persists_cookie() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        param_locale: Some("fr"),
        accept_language: Some("de"),
        host: "example.com",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "fr");
    assert_eq!(resolution.persist_cookie, Some("fr".to_string()));
}

#[test]
fn test_unknown_param_degrades_to_default_and_persists_it() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        param_locale: Some("xx"),
        ..Default::default()
    });
    assert_eq!(resolution.locale, "en");
    assert_eq!(
        resolution.persist_cookie,
        Some("en".to_string()),
        "The validated locale is persisted, not the raw candidate"
    );
}

#[test]
fn test_header_path_picks_highest_weight_and_persists() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        accept_language: Some("fr;q=0.8,en-US;q=0.9,de"),
        host: "example.com",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "de", "Implicit 1.0 weight should win");
    assert_eq!(resolution.persist_cookie, Some("de".to_string()));
}

#[test]
fn test_header_candidate_is_stripped_and_lowercased() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        accept_language: Some("en-US;q=0.9,fr;q=0.8"),
        host: "example.com",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "en");
    assert_eq!(resolution.persist_cookie, Some("en".to_string()));
}

#[test]
fn test_malformed_header_falls_back_to_host() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        accept_language: Some(""),
        host: "example.de",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "de");
    assert_eq!(resolution.persist_cookie, None, "Host fallback must not persist a cookie");
}

#[test]
fn test_bad_language_tag_falls_back_to_host() {
    let resolver = test_resolver();

    // An underscore fails the tag shape check and poisons the whole header
    let resolution = resolver.resolve(&RequestSignals {
        accept_language: Some("de,en_US;q=0.9"),
        host: "example.fr",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "fr");
    assert_eq!(resolution.persist_cookie, None);
}

#[test]
fn test_unknown_host_suffix_yields_default() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        host: "example.zz",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "en");
    assert_eq!(resolution.persist_cookie, None);
}

#[test]
fn test_host_fallback_is_validated_against_available() {
    let resolver = test_resolver();

    // The table maps .jp to ja, which this deployment does not serve
    let resolution = resolver.resolve(&RequestSignals {
        host: "example.jp",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "en");
}

#[test]
fn test_host_tld_lookup_is_case_insensitive() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        host: "EXAMPLE.DE",
        ..Default::default()
    });
    assert_eq!(resolution.locale, "de");
}

#[test]
fn test_empty_session_falls_through_to_cookie() {
    let resolver = test_resolver();

    let resolution = resolver.resolve(&RequestSignals {
        session_locale: Some(""),
        cookie_locale: Some("fr"),
        ..Default::default()
    });
    assert_eq!(resolution.locale, "fr");
    assert_eq!(resolution.persist_cookie, None);
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = test_resolver();
    let signals = RequestSignals {
        param_locale: Some("de"),
        accept_language: Some("fr;q=0.8"),
        host: "example.it",
        ..Default::default()
    };

    let first = resolver.resolve(&signals);
    let second = resolver.resolve(&signals);
    assert_eq!(first, second);
}
