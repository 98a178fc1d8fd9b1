//! Printable report generation.
//!
//! The renderer is a pure transform: ledger in, document bytes out. Layout
//! mechanics live in [`pdf`]; this module owns the structural contract of the
//! document (what appears, in which order, and how values are formatted).

pub mod pdf;

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::ledger::{Ledger, MonthKey};

/// Character budget for entry descriptions inside detail tables.
pub const DESCRIPTION_LIMIT: usize = 40;

/// Selects the months a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Month(MonthKey),
    Year(i32),
}

impl ReportScope {
    pub(crate) fn months(&self) -> Vec<MonthKey> {
        match self {
            ReportScope::Month(key) => vec![*key],
            ReportScope::Year(year) => MonthKey::months_of(*year).collect(),
        }
    }
}

/// Renders the PDF document for the requested scope.
pub fn render_pdf(ledger: &Ledger, scope: ReportScope) -> Result<Vec<u8>> {
    pdf::render(ledger, scope)
}

/// Two decimals with a trailing dollar sign, as printed in report tables.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{} $", sign, int_part(rounded), frac_part(rounded))
}

/// Same as [`format_amount`] with thousands grouping, for on-screen metrics.
pub fn format_amount_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = int_part(rounded);
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{} $", sign, grouped, frac_part(rounded))
}

/// Caps `text` at `limit` characters, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}

fn int_part(rounded: Decimal) -> String {
    rounded.abs().trunc().to_string()
}

fn frac_part(rounded: Decimal) -> String {
    let raw = rounded.abs().to_string();
    match raw.split_once('.') {
        Some((_, frac)) => format!("{:0<2}", frac),
        None => "00".into(),
    }
}
