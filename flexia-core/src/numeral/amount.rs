//! Decimal amounts
//!
//! Amounts are kept as digit strings so the integer part is not limited by
//! a machine integer. The fraction is normalized to exactly two digits.

use crate::error::{FlexiaError, Result};
use std::fmt;
use std::str::FromStr;

/// A non-negative decimal amount
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    /// Integer digits without leading zeros; `"0"` for zero
    integer: String,
    /// Exactly two fraction digits
    fraction: String,
}

impl Amount {
    /// Parse an amount using `.` or `,` as the decimal separator
    ///
    /// Fraction digits beyond the second are dropped, missing ones are
    /// filled with zeros: `"12,5"` has fraction `"50"`, `"1.999"` has `"99"`.
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.starts_with('-') {
            return Err(FlexiaError::invalid(format!(
                "negative amount '{input}' is not supported"
            )));
        }

        let mut parts = text.splitn(2, &['.', ','][..]);
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let no_digits = integer.is_empty() && fraction.is_empty();
        if no_digits || !all_digits(integer) || !all_digits(fraction) {
            return Err(FlexiaError::invalid(format!(
                "amount '{input}' is not a decimal number"
            )));
        }

        let integer = integer.trim_start_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };

        let mut fraction: String = fraction.chars().take(2).collect();
        while fraction.len() < 2 {
            fraction.push('0');
        }

        Ok(Self {
            integer: integer.to_string(),
            fraction,
        })
    }

    /// Integer digits, without leading zeros
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// The two fraction digits as written (`"05"`)
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Numeric value of the fraction (0-99)
    pub fn fraction_value(&self) -> u64 {
        self.fraction.parse().unwrap_or(0)
    }

    /// Whether the integer part is zero
    pub fn is_whole_zero(&self) -> bool {
        self.integer == "0"
    }

    /// Three-digit groups of the integer part, most significant first
    pub fn groups(&self) -> Vec<u64> {
        let pad = (3 - self.integer.len() % 3) % 3;
        let padded = format!("{}{}", "0".repeat(pad), self.integer);
        padded
            .as_bytes()
            .chunks(3)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'))
            })
            .collect()
    }
}

impl FromStr for Amount {
    type Err = FlexiaError;

    fn from_str(s: &str) -> Result<Self> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.fraction)
    }
}

/// Values that can be rendered as an amount
pub trait ToAmount {
    fn to_amount(&self) -> Result<Amount>;
}

impl ToAmount for Amount {
    fn to_amount(&self) -> Result<Amount> {
        Ok(self.clone())
    }
}

impl ToAmount for str {
    fn to_amount(&self) -> Result<Amount> {
        Amount::parse(self)
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> Result<Amount> {
        Amount::parse(self)
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> Result<Amount> {
        (**self).to_amount()
    }
}

macro_rules! unsigned_amount {
    ($($ty:ty),*) => {
        $(
            impl ToAmount for $ty {
                fn to_amount(&self) -> Result<Amount> {
                    Amount::parse(&self.to_string())
                }
            }
        )*
    };
}

macro_rules! signed_amount {
    ($($ty:ty),*) => {
        $(
            impl ToAmount for $ty {
                fn to_amount(&self) -> Result<Amount> {
                    if *self < 0 {
                        return Err(FlexiaError::invalid(format!(
                            "negative amount '{self}' is not supported"
                        )));
                    }
                    Amount::parse(&self.to_string())
                }
            }
        )*
    };
}

unsigned_amount!(u8, u16, u32, u64, u128, usize);
signed_amount!(i8, i16, i32, i64, i128, isize);

impl ToAmount for f64 {
    fn to_amount(&self) -> Result<Amount> {
        if !self.is_finite() {
            return Err(FlexiaError::invalid(format!(
                "amount '{self}' is not a finite number"
            )));
        }
        if *self < 0.0 {
            return Err(FlexiaError::invalid(format!(
                "negative amount '{self}' is not supported"
            )));
        }
        // abs() folds -0.0 into 0.0
        Amount::parse(&self.abs().to_string())
    }
}

impl ToAmount for f32 {
    fn to_amount(&self) -> Result<Amount> {
        f64::from(*self).to_amount()
    }
}
