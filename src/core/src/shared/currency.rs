use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

// Decimal exponents outside this range are printed in E notation
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 14;

/// Amount expressed in millions of `currency`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyValue {
    pub amount: f64,
    pub currency: Currency,
}

impl CurrencyValue {
    pub fn new(amount: f64, currency: Currency) -> Self {
        CurrencyValue { amount, currency }
    }

    pub fn eur(amount: f64) -> Self {
        CurrencyValue::new(amount, Currency::Eur)
    }

    /// Total order: NaN sorts below every other amount and equal to itself.
    pub fn compare_amount(&self, other: &CurrencyValue) -> Ordering {
        match self.amount.partial_cmp(&other.amount) {
            Some(ordering) => ordering,
            None => other.amount.is_nan().cmp(&self.amount.is_nan()),
        }
    }
}

fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }

    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // shortest round-trip digits, e.g. "1.5e-5"
    let scientific = format!("{:e}", amount);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return amount.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
        amount.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, sign, exponent.abs())
    }
}

impl Display for CurrencyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}{}M", self.currency.symbol(), format_amount(self.amount))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
        }
    }
}
