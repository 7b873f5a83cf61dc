//! Signed lengths of time, with microsecond precision.

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub, Mul, Neg};

use pad::{PadStr, Alignment};

use crate::decimal::{Decimal, PRECISION};
use crate::error::Error;
use crate::interval::CalendarInterval;
use crate::util::RangeExt;


const MICROSECONDS_IN_SECOND: i64 = 1_000_000;
const MICROSECONDS_IN_MILLISECOND: i64 = 1_000;
const MILLISECONDS_IN_SECOND: i64 = 1_000;
const SECONDS_IN_MINUTE: i64 = 60;
const SECONDS_IN_HOUR: i64 = 60 * SECONDS_IN_MINUTE;
const SECONDS_IN_DAY: i64 = 24 * SECONDS_IN_HOUR;


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with microsecond precision.
///
/// The sign is kept apart from the magnitude, which is split into whole
/// seconds and the microsecond of the last second. This way half a second
/// *backwards* is a different value from half a second forwards, even
/// though both have zero whole seconds.
///
/// Every operation returns a new value. Addition, subtraction, scaling, and
/// comparison all go through `Decimal`, so adding up sub-second durations
/// never picks up floating-point error.
#[derive(Clone, Copy)]
pub struct Duration {
    negative: bool,
    seconds: i64,
    microsecond: u32,
}

impl Duration {

    /// Creates a duration from its sign and magnitude, checking that the
    /// magnitude is in range.
    fn new(negative: bool, seconds: i64, microsecond: i64) -> Result<Self, Error> {
        if seconds < 0 {
            return Err(Error::InvalidSeconds { seconds });
        }

        if !microsecond.is_within(0 .. MICROSECONDS_IN_SECOND) {
            return Err(Error::InvalidMicrosecond { microsecond });
        }

        Ok(Self { negative, seconds, microsecond: microsecond as u32 })
    }

    /// Creates a duration of the given length going forwards in time.
    ///
    /// Passing a negative number of seconds, or a microsecond outside of
    /// `0 .. 1_000_000`, returns an error.
    pub fn positive(seconds: i64, microsecond: i64) -> Result<Self, Error> {
        Self::new(false, seconds, microsecond)
    }

    /// Creates a duration of the given length going backwards in time.
    ///
    /// Passing a negative number of seconds, or a microsecond outside of
    /// `0 .. 1_000_000`, returns an error.
    pub fn negative(seconds: i64, microsecond: i64) -> Result<Self, Error> {
        Self::new(true, seconds, microsecond)
    }

    /// Creates a new zero-length duration.
    pub fn zero() -> Self {
        Self { negative: false, seconds: 0, microsecond: 0 }
    }

    /// Creates a duration from a number of seconds, rounded half-up to six
    /// decimal places: `0.5` is half a second, or 500000 microseconds.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Duration;
    ///
    /// let d = Duration::precise(-2.508825).unwrap();
    /// assert_eq!(d.in_seconds_precise_string(), "-2.508825");
    /// assert_eq!(d.microsecond(), 508825);
    /// ```
    pub fn precise(seconds: f64) -> Result<Self, Error> {
        Decimal::from_f64(seconds).and_then(Self::from_decimal)
    }

    /// Splits an exact decimal number of seconds into a duration.
    pub fn from_decimal(seconds: Decimal) -> Result<Self, Error> {
        let magnitude = seconds.units().unsigned_abs();
        let scale = MICROSECONDS_IN_SECOND as u128;
        let whole = i64::try_from(magnitude / scale).map_err(|_| Error::Overflow)?;

        Ok(Self {
            negative: seconds.is_negative(),
            seconds: whole,
            microsecond: (magnitude % scale) as u32,
        })
    }

    /// Converts a calendar interval into a fixed-length duration.
    ///
    /// Years and months have no fixed length, so an interval with a year or
    /// month component can only be converted if it also knows its total
    /// number of days. Otherwise this returns an error.
    pub fn from_calendar_interval(interval: &CalendarInterval) -> Result<Self, Error> {
        if interval.years != 0 && interval.total_days.is_none() {
            return Err(Error::ImpreciseInterval { interval: interval.to_string(), unit: "year" });
        }

        if interval.months != 0 && interval.total_days.is_none() {
            return Err(Error::ImpreciseInterval { interval: interval.to_string(), unit: "month" });
        }

        let parts = [
            Self::checked_whole(interval.total_days.unwrap_or(interval.days), SECONDS_IN_DAY)?,
            Self::checked_whole(interval.hours, SECONDS_IN_HOUR)?,
            Self::checked_whole(interval.minutes, SECONDS_IN_MINUTE)?,
            Self::checked_whole(interval.seconds, 1)?,
            Self::microseconds(interval.microseconds),
        ];

        let duration = parts.iter()
            .try_fold(Self::zero(), |sum, part| sum.checked_add(*part))
            .ok_or(Error::Overflow)?;

        Ok(if interval.invert { duration.invert() } else { duration })
    }

    /// Converts this duration back into a calendar interval, made up only
    /// of seconds and microseconds.
    pub fn to_calendar_interval(self) -> CalendarInterval {
        CalendarInterval {
            seconds: self.seconds,
            microseconds: i64::from(self.microsecond),
            invert: self.negative,
            .. CalendarInterval::default()
        }
    }

    /// Multiplies out a count of whole units, failing if the number of
    /// seconds doesn’t fit in an `i64`.
    fn checked_whole(count: i64, seconds_per_unit: i64) -> Result<Self, Error> {
        let seconds = count.unsigned_abs()
            .checked_mul(seconds_per_unit as u64)
            .and_then(|seconds| i64::try_from(seconds).ok())
            .ok_or(Error::Overflow)?;

        Ok(Self { negative: count < 0, seconds, microsecond: 0 })
    }

    /// Multiplies out a count of whole units, stopping at `i64::MAX`
    /// seconds in either direction.
    fn whole(count: i64, seconds_per_unit: i64) -> Self {
        Self::checked_whole(count, seconds_per_unit)
            .unwrap_or(Self { negative: count < 0, seconds: i64::MAX, microsecond: 0 })
    }

    /// Splits a signed count of sub-second units into seconds and the
    /// microsecond of the last second.
    fn fraction(count: i64, units_per_second: u64, microseconds_per_unit: u64) -> Self {
        let magnitude = count.unsigned_abs();

        Self {
            negative: count < 0,
            seconds: (magnitude / units_per_second) as i64,
            microsecond: ((magnitude % units_per_second) * microseconds_per_unit) as u32,
        }
    }

    pub fn microseconds(microseconds: i64) -> Self {
        Self::fraction(microseconds, MICROSECONDS_IN_SECOND as u64, 1)
    }

    pub fn milliseconds(milliseconds: i64) -> Self {
        Self::fraction(milliseconds, MILLISECONDS_IN_SECOND as u64, MICROSECONDS_IN_MILLISECOND as u64)
    }

    pub fn millisecond() -> Self {
        Self::milliseconds(1)
    }

    pub fn seconds(seconds: i64) -> Self {
        Self::whole(seconds, 1)
    }

    pub fn second() -> Self {
        Self::seconds(1)
    }

    pub fn minutes(minutes: i64) -> Self {
        Self::whole(minutes, SECONDS_IN_MINUTE)
    }

    pub fn minute() -> Self {
        Self::minutes(1)
    }

    pub fn hours(hours: i64) -> Self {
        Self::whole(hours, SECONDS_IN_HOUR)
    }

    pub fn hour() -> Self {
        Self::hours(1)
    }

    /// Creates a duration of whole days, of exactly 86400 seconds each.
    ///
    /// Like the other whole-unit constructors, a length past `i64::MAX`
    /// seconds is clamped to that many seconds, keeping its sign.
    /// `from_calendar_interval` reports the same case as `Error::Overflow`.
    pub fn days(days: i64) -> Self {
        Self::whole(days, SECONDS_IN_DAY)
    }

    pub fn day() -> Self {
        Self::days(1)
    }

    pub fn is_negative(self) -> bool {
        self.negative
    }

    pub fn is_positive(self) -> bool {
        !self.negative
    }

    /// Whether this duration has no length at all, in either direction.
    pub fn is_zero(self) -> bool {
        self.seconds == 0 && self.microsecond == 0
    }

    /// Adds another duration to this one, returning `None` if the result
    /// is too long to represent.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.in_seconds_precise()
            .checked_add(other.in_seconds_precise())
            .and_then(|sum| Self::from_decimal(sum).ok())
    }

    /// Subtracts another duration from this one, returning `None` if the
    /// result is too long to represent.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.in_seconds_precise()
            .checked_sub(other.in_seconds_precise())
            .and_then(|difference| Self::from_decimal(difference).ok())
    }

    /// Scales this duration by a factor, truncating to the microsecond.
    pub fn multiply(self, factor: f64) -> Result<Self, Error> {
        self.in_seconds_precise().multiply(factor).and_then(Self::from_decimal)
    }

    /// Divides this duration by a divisor, truncating to the microsecond.
    /// Dividing by zero returns an error.
    pub fn divide(self, divisor: f64) -> Result<Self, Error> {
        self.in_seconds_precise().divide(divisor).and_then(Self::from_decimal)
    }

    pub fn is_greater_than(self, other: Self) -> bool {
        self.in_seconds_precise() > other.in_seconds_precise()
    }

    pub fn is_greater_than_or_equal(self, other: Self) -> bool {
        self.in_seconds_precise() >= other.in_seconds_precise()
    }

    pub fn is_less_than(self, other: Self) -> bool {
        self.in_seconds_precise() < other.in_seconds_precise()
    }

    pub fn is_less_than_or_equal(self, other: Self) -> bool {
        self.in_seconds_precise() <= other.in_seconds_precise()
    }

    pub fn is_equal(self, other: Self) -> bool {
        self.in_seconds_precise() == other.in_seconds_precise()
    }

    /// Returns the signed number of whole seconds, truncated towards zero.
    pub fn in_seconds(self) -> i64 {
        self.signed(self.seconds)
    }

    pub fn in_seconds_abs(self) -> i64 {
        self.seconds
    }

    /// Returns the exact signed number of seconds.
    pub fn in_seconds_precise(self) -> Decimal {
        let units = i128::from(self.seconds) * i128::from(MICROSECONDS_IN_SECOND) + i128::from(self.microsecond);
        Decimal::from_units(if self.negative { -units } else { units })
    }

    /// Returns the exact signed number of seconds as a string with six
    /// decimal places, such as `-2.508825`.
    pub fn in_seconds_precise_string(self) -> String {
        format!("{}{}.{}", if self.negative { "-" } else { "" }, self.seconds, self.microsecond_string())
    }

    /// Returns the seconds past the last whole minute, from 0 to 59.
    pub fn in_time_seconds(self) -> i64 {
        self.seconds % SECONDS_IN_MINUTE
    }

    pub fn in_minutes(self) -> i64 {
        self.signed(self.seconds / SECONDS_IN_MINUTE)
    }

    pub fn in_minutes_abs(self) -> i64 {
        self.seconds / SECONDS_IN_MINUTE
    }

    /// Returns the minutes past the last whole hour, from 0 to 59.
    pub fn in_time_minutes(self) -> i64 {
        self.in_minutes_abs() % 60
    }

    pub fn in_hours(self) -> i64 {
        self.signed(self.seconds / SECONDS_IN_HOUR)
    }

    pub fn in_hours_abs(self) -> i64 {
        self.seconds / SECONDS_IN_HOUR
    }

    pub fn in_days(self) -> i64 {
        self.signed(self.seconds / SECONDS_IN_DAY)
    }

    pub fn in_days_abs(self) -> i64 {
        self.seconds / SECONDS_IN_DAY
    }

    pub fn in_milliseconds(self) -> i64 {
        self.signed(self.in_milliseconds_abs())
    }

    pub fn in_milliseconds_abs(self) -> i64 {
        self.seconds * MILLISECONDS_IN_SECOND + i64::from(self.microsecond) / MICROSECONDS_IN_MILLISECOND
    }

    /// Returns the number of microseconds since the last whole second, as
    /// a number: 50000 for a twentieth of a second.
    pub fn microsecond(self) -> u32 {
        self.microsecond
    }

    /// Returns the number of microseconds since the last whole second, as
    /// six zero-padded digits: `"050000"` for a twentieth of a second.
    pub fn microsecond_string(self) -> String {
        self.microsecond.to_string().pad(PRECISION as usize, '0', Alignment::Right, false)
    }

    /// Returns this duration pointing the other way in time.
    pub fn invert(self) -> Self {
        Self { negative: !self.negative, .. self }
    }

    pub fn absolute(self) -> Self {
        if self.negative { self.invert() } else { self }
    }

    fn signed(self, magnitude: i64) -> i64 {
        if self.negative { -magnitude } else { magnitude }
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(*other)
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.in_seconds_precise().hash(state)
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.in_seconds_precise().cmp(&other.in_seconds_precise())
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Duration({}s)", self.in_seconds_precise_string())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.in_seconds_precise_string())
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("overflow when adding durations")
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).expect("overflow when subtracting durations")
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        self.in_seconds_precise().units()
            .checked_mul(i128::from(amount))
            .and_then(|units| Self::from_decimal(Decimal::from_units(units)).ok())
            .expect("overflow when multiplying duration")
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}
