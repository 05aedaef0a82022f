//! Display formatting shared by the views.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// `M/D/YYYY` without zero padding, e.g. `1/15/2023`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Amount with trailing zeros stripped, followed by the currency code.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    format!("{} {}", amount.normalize(), currency)
}

/// Secondary line of a movements-page row: `€-50 - 2023-01-01`.
pub fn format_movement_line(amount: Decimal, date: NaiveDate) -> String {
    format!("€{} - {}", amount.normalize(), date.format("%Y-%m-%d"))
}

/// Headline of a transfer row, always with two decimals.
pub fn format_transfer_amount(amount: Decimal) -> String {
    format!("Transfer {:.2} €", amount)
}
