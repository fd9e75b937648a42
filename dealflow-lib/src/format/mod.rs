//! Field formatters
//!
//! Pure conversions from raw field values to display strings. None of them
//! fail: absent or unparseable input produces a [`Placeholder`] (or an empty
//! string where a column shows nothing for missing data).

mod aum;
mod date;
mod list;
mod text;

pub use aum::format_aum;
pub use date::format_date;
pub use list::split_list;
pub use text::format_location;
pub use text::format_year;
pub use text::initials;
pub use text::mask_contact;

/// Fallback text shown when a value is absent or invalid.
///
/// Each column picks one and uses it consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placeholder {
    /// `"N/A"`
    #[default]
    NotAvailable,
    /// `"--"`
    Dash,
}

impl Placeholder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::NotAvailable => "N/A",
            Placeholder::Dash => "--",
        }
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
