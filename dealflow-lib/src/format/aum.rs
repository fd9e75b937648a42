//! Assets under management

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::Placeholder;
use crate::model::RawValue;

/// Threshold, in millions, from which values are shown in billions.
const BILLION: i64 = 1000;

/// Formats an amount expressed in millions as `"<x.y>M"` or `"<x.y>B"`.
///
/// The input is assumed to already be in millions; no unit detection is
/// attempted. Numbers and numeric strings are accepted, anything else is
/// shown as `"N/A"`.
///
/// # Example
///
/// ```
/// use dealflow_lib::format::format_aum;
/// use dealflow_lib::model::RawValue;
///
/// assert_eq!(format_aum(Some(&RawValue::from(750))), "750.0M");
/// assert_eq!(format_aum(Some(&RawValue::from("1500"))), "1.5B");
/// assert_eq!(format_aum(None), "N/A");
/// ```
pub fn format_aum(value: Option<&RawValue>) -> String {
    let Some(value) = value else {
        return Placeholder::NotAvailable.to_string();
    };

    match to_decimal(value) {
        Some(millions) => format_decimal(millions),
        // Beyond the range of Decimal (about 7.9e28).
        None => match value.as_f64() {
            Some(millions) => format_float(millions),
            None => Placeholder::NotAvailable.to_string(),
        },
    }
}

fn format_decimal(millions: Decimal) -> String {
    let (scaled, suffix) = if millions.abs() >= Decimal::from(BILLION) {
        (millions / Decimal::from(BILLION), 'B')
    } else {
        (millions, 'M')
    };

    let rounded = scaled.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}{}", rounded, suffix)
}

fn format_float(millions: f64) -> String {
    if millions.abs() >= BILLION as f64 {
        format!("{:.1}B", millions / BILLION as f64)
    } else {
        format!("{:.1}M", millions)
    }
}

fn to_decimal(value: &RawValue) -> Option<Decimal> {
    match value {
        RawValue::Number(n) if n.is_finite() => Decimal::try_from(*n).ok(),
        RawValue::Text(s) => {
            let s = s.trim();
            s.parse::<Decimal>()
                .ok()
                .or_else(|| Decimal::from_scientific(s).ok())
        }
        _ => None,
    }
}
