//! Money value object and currency rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A currency amount in display units (e.g. dollars).
///
/// `Display` renders `$` followed by a thousands-separated integer part and
/// exactly two decimal places (`$1,234.56`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Money {}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", self.0.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let digits = int_part.len();
        let mut grouped = String::with_capacity(digits + digits / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{frac_part}")
    }
}
