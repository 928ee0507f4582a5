//! Price formatting using decimal arithmetic.
//!
//! All amounts are [`rust_decimal::Decimal`] values in the currency's
//! standard unit (rupees, not paise). The storefront sells in a single
//! currency, so formatting uses a fixed symbol prefix.

use rust_decimal::Decimal;

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount for display, e.g. `₹25.50`.
///
/// Always renders two decimal places.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tiffin_core::format_price;
///
/// assert_eq!(format_price(Decimal::new(2550, 2)), "₹25.50");
/// assert_eq!(format_price(Decimal::ZERO), "₹0.00");
/// ```
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}
