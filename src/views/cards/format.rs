// Pure text helpers used while building a card.

use rand::Rng;

use crate::parser::GalleryEntry;
use crate::ui_constants::assets::PLACEHOLDER_IMAGE;

/// Shown when a record has neither city nor country.
pub const DEFAULT_CITY: &str = "Cancun";

/// Spellings (already lower-cased and trimmed) that all mean Cancun.
const CITY_ALIASES: [&str; 4] = ["cancun", "cancún", "mexico - cancun", "cancun, qroo"];

/// Discount for records without an integer id, and for a zero divisor draw.
pub const DISCOUNT_FALLBACK: u32 = 15;
const DISCOUNT_MIN: u64 = 10;
const DISCOUNT_CAP: u64 = 60;

/// First gallery image with a non-blank uri, else the placeholder.
pub fn pick_primary_image(entries: &[GalleryEntry]) -> &str {
    entries
        .iter()
        .find(|e| !e.uri.trim().is_empty())
        .map(|e| e.uri.as_str())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Display name of the hotel's location.
pub fn format_city(city: Option<&str>, country: Option<&str>) -> String {
    let Some(city) = city.filter(|c| !c.is_empty()) else {
        return country
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CITY)
            .to_string();
    };

    let normalized = city.trim().to_lowercase();
    if CITY_ALIASES.contains(&normalized.as_str()) {
        return DEFAULT_CITY.to_string();
    }
    title_case(city)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `text` to `limit` characters and mark the cut with "...".
pub fn truncate(text: &str, limit: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit).collect();
    format!("{}...", head.trim_end())
}

/// Badge percentage for a hotel id.
///
/// `(round(|id / 10|) mod round(r * 100)) + 10`, capped at 60, where `r` is drawn
/// from `rng`. A draw that rounds to zero has no defined result and yields
/// [`DISCOUNT_FALLBACK`].
pub fn compute_discount(id: Option<i64>, rng: &mut impl Rng) -> u32 {
    let Some(id) = id else {
        return DISCOUNT_FALLBACK;
    };
    let divisor = (rng.gen::<f64>() * 100.0).round() as u64;
    if divisor == 0 {
        return DISCOUNT_FALLBACK;
    }
    let bucket = (id as f64 / 10.0).abs().round() as u64;
    ((bucket % divisor) + DISCOUNT_MIN).min(DISCOUNT_CAP) as u32
}
