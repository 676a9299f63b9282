//! Accept-Language header parsing.
//!
//! Picks the highest-weighted language range out of a header value and
//! reduces it to a primary language tag. Malformed input is reported as
//! `None` so the caller can fall back to host-based resolution instead of
//! failing the request.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static LANGUAGE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z-]+$").expect("invalid language tag pattern"));
static WEIGHT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";q=\d+\.\d+$").expect("invalid weight suffix pattern"));
static REGION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-[a-zA-Z]+$").expect("invalid region suffix pattern"));

/// Parse an `Accept-Language` value into the preferred primary language tag,
/// lowercased and stripped of its region subtag (`en-US` -> `en`).
///
/// Returns `None` when the header is absent, empty, or any entry's language
/// tag fails the shape check; one bad entry poisons the whole header.
pub fn parse(header: Option<&str>) -> Option<String> {
    let header = header?;

    let mut ranges = Vec::new();
    for raw in header.split(',') {
        let mut entry = raw.trim().to_string();
        // Ranges without an explicit well-formed weight default to 1.0
        if !WEIGHT_SUFFIX.is_match(&entry) {
            entry.push_str(";q=1.0");
        }

        let tag = entry.split(";q=").next().unwrap_or("").to_string();
        if !LANGUAGE_TAG.is_match(&tag) {
            return None;
        }
        let weight: f32 = entry.rsplit(";q=").next().unwrap_or("").parse().unwrap_or(0.0);
        ranges.push((tag, weight));
    }

    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let best = &ranges.first()?.0;
    Some(REGION_SUFFIX.replace(best, "").to_lowercase())
}
