//! Exact points on a timeline.

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Sub};

use crate::decimal::Decimal;
use crate::duration::Duration;
use crate::error::Error;
use crate::system::sys_time;


const MICROSECONDS_IN_SECOND: i128 = 1_000_000;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with microsecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds, and a
/// 32-bit integer of microseconds that is always below one million. Adding
/// and subtracting durations works on the combined count of microseconds,
/// so an instant just before the epoch has a negative number of seconds
/// and a positive microsecond.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    microsecond: u32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero microseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_us(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of microseconds so far this
    /// second. Microseconds past one million carry into the seconds.
    pub fn at_us(seconds: i64, microsecond: u32) -> Self {
        let carry = i64::from(microsecond / 1_000_000);
        Self { seconds: seconds + carry, microsecond: microsecond % 1_000_000 }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, microsecond) = unsafe { sys_time() };
        Self::at_us(seconds, microsecond)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of microseconds at this instant
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns the signed number of microseconds since the Unix epoch.
    pub(crate) fn units(self) -> i128 {
        i128::from(self.seconds) * MICROSECONDS_IN_SECOND + i128::from(self.microsecond)
    }

    /// Builds an instant back out of a signed number of microseconds since
    /// the Unix epoch, returning `None` if the seconds overflow.
    pub(crate) fn from_units(units: i128) -> Option<Self> {
        let seconds = units.div_euclid(MICROSECONDS_IN_SECOND);
        let microsecond = units.rem_euclid(MICROSECONDS_IN_SECOND);
        let seconds = i64::try_from(seconds).ok()?;
        Some(Self { seconds, microsecond: microsecond as u32 })
    }

    /// Moves this instant by a duration, returning `None` if the result
    /// falls outside the representable range.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.units()
            .checked_add(duration.in_seconds_precise().units())
            .and_then(Self::from_units)
    }

    /// Moves this instant back by a duration, returning `None` if the
    /// result falls outside the representable range.
    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.checked_add(duration.invert())
    }

    /// Returns the exact signed duration from `earlier` to this instant.
    /// It’s negative when `earlier` is actually later.
    ///
    /// Two instants can be up to twice as far apart as a duration can
    /// reach, so this returns `Error::Overflow` when they are.
    pub fn duration_since(self, earlier: Self) -> Result<Duration, Error> {
        let difference = Decimal::from_units(self.units() - earlier.units());
        Duration::from_decimal(difference)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}us)", self.seconds, self.microsecond)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        self.checked_add(duration).expect("overflow when adding duration to instant")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self.checked_sub(duration).expect("overflow when subtracting duration from instant")
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, earlier: Self) -> Duration {
        self.duration_since(earlier).expect("overflow when subtracting instants")
    }
}
