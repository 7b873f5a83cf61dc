//! Exact fixed-point arithmetic on seconds, at microsecond precision.
//!
//! Binary floating-point can’t represent most fractions of a second
//! exactly, so adding up a few thousand 0.1s durations as `f64` values
//! drifts away from the right answer. Durations therefore do all their
//! arithmetic and comparisons through `Decimal`, a signed number of
//! *millionths* held in an `i128`.

use std::fmt;
use std::ops::{Add, Sub, Neg};
use std::str::FromStr;

use crate::error::Error;


/// Number of digits kept after the decimal point.
pub const PRECISION: u32 = 6;

/// Number of millionths in one.
const SCALE: i128 = 1_000_000;

/// Most fraction digits kept when a float scalar gets turned into an exact
/// decimal for multiplication or division.
const MAX_SCALAR_DIGITS: usize = 18;


/// A signed fixed-point number with exactly six decimal places.
///
/// ### Examples
///
/// ```
/// use calendar_units::Decimal;
///
/// let a: Decimal = "12.5".parse().unwrap();
/// let b: Decimal = "-0.000001".parse().unwrap();
/// assert_eq!((a + b).to_string(), "12.499999");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Decimal {
    units: i128,
}

impl Decimal {

    /// Returns zero.
    pub fn zero() -> Self {
        Self { units: 0 }
    }

    /// Creates a decimal from a signed number of millionths.
    pub fn from_units(units: i128) -> Self {
        Self { units }
    }

    /// Returns this number as a signed count of millionths.
    pub fn units(self) -> i128 {
        self.units
    }

    /// Converts a float into a decimal, rounding half-up to six places.
    ///
    /// The rounding works on the shortest decimal string that reads back
    /// as the same float, so `2.5088255` rounds up to `2.508826` even
    /// though its nearest binary value sits just below the tie.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NotFinite { value });
        }

        value.to_string().parse()
    }

    pub fn is_negative(self) -> bool {
        self.units < 0
    }

    pub fn abs(self) -> Self {
        Self { units: self.units.abs() }
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.units.checked_add(other.units).map(Self::from_units)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.units.checked_sub(other.units).map(Self::from_units)
    }

    /// Multiplies this number by a float scalar.
    ///
    /// The scalar is read as its exact decimal form, and the product is
    /// truncated towards zero at six decimal places.
    pub fn multiply(self, factor: f64) -> Result<Self, Error> {
        let scalar = Scalar::from_f64(factor)?;
        let product = self.units.checked_mul(scalar.mantissa).ok_or(Error::Overflow)?;
        Ok(Self { units: product / pow10(scalar.digits) })
    }

    /// Divides this number by a float scalar, truncating the quotient
    /// towards zero at six decimal places.
    pub fn divide(self, divisor: f64) -> Result<Self, Error> {
        let scalar = Scalar::from_f64(divisor)?;
        if scalar.mantissa == 0 {
            return Err(Error::DivisionByZero);
        }

        let dividend = self.units.checked_mul(pow10(scalar.digits)).ok_or(Error::Overflow)?;
        Ok(Self { units: dividend / scalar.mantissa })
    }
}

impl From<i64> for Decimal {
    fn from(whole: i64) -> Self {
        Self { units: i128::from(whole) * SCALE }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Reads a string such as `-12.508825`. Any digits past the sixth
    /// decimal place get rounded half-up, away from zero.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, whole, fraction) = split_number(input)
            .ok_or_else(|| Error::Malformed { input: input.to_owned() })?;

        let whole: i128 = whole.parse().map_err(|_| Error::Overflow)?;
        let mut units = whole.checked_mul(SCALE).ok_or(Error::Overflow)?;

        let kept = &fraction[.. fraction.len().min(PRECISION as usize)];
        if !kept.is_empty() {
            let digits: i128 = kept.parse().map_err(|_| Error::Overflow)?;
            units += digits * pow10(PRECISION - kept.len() as u32);
        }

        if fraction.as_bytes().get(PRECISION as usize).map_or(false, |d| *d >= b'5') {
            units = units.checked_add(1).ok_or(Error::Overflow)?;
        }

        Ok(Self { units: if negative { -units } else { units } })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.units.unsigned_abs();
        let scale = SCALE as u128;
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:06}", sign, magnitude / scale, magnitude % scale)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

impl Add<Decimal> for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { units: self.units + rhs.units }
    }
}

impl Sub<Decimal> for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { units: self.units - rhs.units }
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self { units: -self.units }
    }
}


/// A float scalar read as an exact decimal: `mantissa / 10^digits`.
#[derive(PartialEq, Debug, Copy, Clone)]
struct Scalar {
    mantissa: i128,
    digits: u32,
}

impl Scalar {
    fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NotFinite { value });
        }

        // Float formatting never uses an exponent, so this is always
        // plain digits with an optional point.
        let text = value.to_string();
        let (negative, whole, fraction) = split_number(&text)
            .ok_or_else(|| Error::Malformed { input: text.clone() })?;

        let fraction = fraction[.. fraction.len().min(MAX_SCALAR_DIGITS)].trim_end_matches('0');
        let digits = fraction.len() as u32;

        let whole: i128 = whole.parse().map_err(|_| Error::Overflow)?;
        let mut mantissa = whole.checked_mul(pow10(digits)).ok_or(Error::Overflow)?;
        if !fraction.is_empty() {
            let part: i128 = fraction.parse().map_err(|_| Error::Overflow)?;
            mantissa = mantissa.checked_add(part).ok_or(Error::Overflow)?;
        }

        Ok(Self { mantissa: if negative { -mantissa } else { mantissa }, digits })
    }
}


/// Splits a plain decimal number into its sign, its whole digits, and its
/// fraction digits. Returns `None` unless the input is an optional sign,
/// at least one digit, and optionally a point followed by more digits.
fn split_number(input: &str) -> Option<(bool, &str, &str)> {
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-')  => (true, &input[1..]),
        Some(b'+')  => (false, &input[1..]),
        _           => (false, input),
    };

    let (whole, fraction) = match unsigned.find('.') {
        Some(point) => (&unsigned[.. point], &unsigned[point + 1 ..]),
        None        => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction)
    || (fraction.is_empty() && unsigned.ends_with('.')) {
        return None;
    }

    Some((negative, whole, fraction))
}

fn pow10(exponent: u32) -> i128 {
    10_i128.pow(exponent)
}
