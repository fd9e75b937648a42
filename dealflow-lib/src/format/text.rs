//! Small text formatters: years, initials, locations, masked contacts

use super::Placeholder;
use crate::model::RawValue;

const MASK: &str = "•••";

/// Formats a founding year as `"<year> y."`, or an empty string when absent.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::format_year;
/// use dealflow_lib::model::RawValue;
///
/// assert_eq!(format_year(Some(&RawValue::from(1998))), "1998 y.");
/// assert_eq!(format_year(None), "");
/// ```
pub fn format_year(value: Option<&RawValue>) -> String {
    match value {
        Some(v) if !v.is_blank() && !matches!(v, RawValue::Json(_)) => {
            format!("{} y.", v.to_string().trim())
        }
        _ => String::new(),
    }
}

/// Builds up to two uppercase initials from a display name.
///
/// Takes the first character of every whitespace separated token, in order,
/// then uppercases and keeps the first two characters.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::initials;
///
/// assert_eq!(initials("Jane Doe"), "JD");
/// assert_eq!(initials("jean claude van damme"), "JC");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(name: &str) -> String {
    let firsts: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect();
    firsts.to_uppercase().chars().take(2).collect()
}

/// Joins city and country as `"City, Country"`.
///
/// Either part alone is shown as is; `"--"` when both are missing.
pub fn format_location(city: Option<&str>, country: Option<&str>) -> String {
    let parts: Vec<&str> = [city, country]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        Placeholder::Dash.to_string()
    } else {
        parts.join(", ")
    }
}

/// Masks a contact value until it is revealed.
///
/// Emails keep the first character of the local part and the whole domain;
/// anything else (phone numbers, handles) keeps its last two characters.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::mask_contact;
///
/// assert_eq!(mask_contact("jane@example.com"), "j•••@example.com");
/// assert_eq!(mask_contact("+41 79 123 45 67"), "•••67");
/// ```
pub fn mask_contact(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Some((local, domain)) = value.split_once('@') {
        let first: String = local.chars().take(1).collect();
        return format!("{}{}@{}", first, MASK, domain);
    }

    let count = value.chars().count();
    let tail: String = value.chars().skip(count.saturating_sub(2)).collect();
    format!("{}{}", MASK, tail)
}
