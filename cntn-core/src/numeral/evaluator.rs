//! Corrected symbol sequence to numeric value

use std::fmt;

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::numeral::system::{Digit, Symbol};

/// Value of a Chinese numeral
///
/// Integers are unbounded so every large unit (up to 载 under `high`) evaluates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Numeral without a fractional part
    Integer(#[serde(serialize_with = "serialize_integer")] BigInt),
    /// Numeral with digits after the point
    Float(f64),
}

impl Number {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Number::Integer(value.into())
    }

    /// Negation transform of the negative sign
    pub fn negate(self) -> Self {
        match self {
            Number::Integer(value) => Number::Integer(-value),
            Number::Float(value) => Number::Float(-value),
        }
    }

    /// Lossy conversion to `f64`
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
            Number::Float(value) => *value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

/// JSON number when the value fits in `i128`, decimal string otherwise
fn serialize_integer<S>(value: &BigInt, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.to_i128() {
        Some(small) => serializer.serialize_i128(small),
        None => serializer.collect_str(value),
    }
}

/// Reduce a corrected integer sequence to its value
///
/// A unit larger than every unit seen so far scales all accumulated terms
/// (两千万 is 2000 × 10000, not 2000 + 10000).
pub fn evaluate_integer(symbols: &[Symbol]) -> BigInt {
    let mut terms: Vec<BigInt> = vec![BigInt::zero()];
    let mut last_power = 0u32;
    for symbol in symbols {
        match symbol {
            Symbol::Digit(digit) => {
                if let Some(current) = terms.last_mut() {
                    *current = BigInt::from(digit.value);
                }
            }
            Symbol::Unit(unit) => {
                let scale = BigInt::from(10u8).pow(unit.power);
                let split = terms.len() - 1;
                let (previous, current) = terms.split_at_mut(split);
                current[0] *= &scale;
                if unit.power > last_power {
                    for term in previous.iter_mut() {
                        *term *= &scale;
                    }
                    last_power = unit.power;
                }
                terms.push(BigInt::zero());
            }
            Symbol::Math(_) => {}
        }
    }

    terms.into_iter().sum()
}

/// Point transform: join the integer value with the fraction digits
///
/// Fails with `Overflow` when the joined value is beyond `f64`.
pub fn join_fraction(integer: BigInt, fraction: &[Digit], input: &str) -> Result<Number> {
    if fraction.is_empty() {
        return Ok(Number::Integer(integer));
    }
    let digits: String = fraction
        .iter()
        .map(|d| char::from(b'0' + d.value))
        .collect();
    let value = format!("{integer}.{digits}")
        .parse::<f64>()
        .map_err(|e| Error::malformed(input, e.to_string()))?;
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(Error::Overflow(input.to_string()))
    }
}
