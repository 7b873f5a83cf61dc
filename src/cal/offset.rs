//! Datetimes with a fixed UTC offset.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDateTime, Month, Weekday};
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;
use crate::util::RangeExt;


/// A fixed distance from UTC, in seconds. An offset of `None` is UTC
/// itself, which prints as `Z` rather than `+00:00`.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// Turns an instant into the wall-clock date-time of this offset.
    fn adjust(self, instant: Instant) -> LocalDateTime {
        LocalDateTime::from_instant(instant + Duration::seconds(self.total_seconds()))
    }

    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400..86401) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates an offset from hours and minutes, which must have the same
    /// sign: `-3, -45` is three and three-quarter hours behind UTC.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::OutOfRange)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = hours as i32;
            let minutes = minutes as i32;
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    /// Reads a local date-time as a wall-clock time at this offset,
    /// producing the point in time it names. Fails with `Error::Overflow`
    /// when that point is out of the range of an `Instant`.
    pub fn transform_date(self, local: LocalDateTime) -> Result<OffsetDateTime, Error> {
        let instant = local.to_instant()?
            .checked_sub(Duration::seconds(self.total_seconds()))
            .ok_or(Error::Overflow)?;

        Ok(OffsetDateTime { instant, offset: self })
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds() < 0
    }

    pub fn total_seconds(self) -> i64 {
        self.offset_seconds.map_or(0, i64::from)
    }

    pub fn hours(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 / 60) as i8,
            None => 0,
        }
    }

    pub fn minutes(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 % 60) as i8,
            None => 0,
        }
    }

    pub fn seconds(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s % 60) as i8,
            None => 0,
        }
    }
}


/// An **offset date-time** is an exact point on the timeline seen from a
/// fixed UTC offset. This is the calendar point that periods span and
/// years are read from.
///
/// Two offset date-times are equal, and ordered, by the instant they name:
/// noon in London and one o’clock in Paris on the same winter day are the
/// same point.
#[derive(Copy, Clone)]
pub struct OffsetDateTime {
    instant: Instant,
    offset: Offset,
}

impl OffsetDateTime {

    /// Creates a point in time from an instant and the offset to read its
    /// fields in.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        Self { instant, offset }
    }

    /// Creates a point in time read in UTC.
    pub fn utc(instant: Instant) -> Self {
        Self::from_instant(instant, Offset::utc())
    }

    /// Creates a point in time set to the current time, in UTC.
    pub fn now() -> Self {
        Self::utc(Instant::now())
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Returns the wall-clock date-time at this point, in its own offset.
    pub fn local(&self) -> LocalDateTime {
        self.offset.adjust(self.instant)
    }

    /// Returns the same point in time, read in a different offset.
    pub fn to_offset(&self, offset: Offset) -> Self {
        Self { instant: self.instant, offset }
    }

    /// Moves this point by a duration, returning `None` on overflow.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.instant.checked_add(duration).map(|instant| Self { instant, offset: self.offset })
    }
}

impl DatePiece for OffsetDateTime {
    fn year(&self) -> i64 { self.local().year() }
    fn month(&self) -> Month { self.local().month() }
    fn day(&self) -> i8 { self.local().day() }
    fn yearday(&self) -> i16 { self.local().yearday() }
    fn weekday(&self) -> Weekday { self.local().weekday() }
}

impl TimePiece for OffsetDateTime {
    fn hour(&self) -> i8 { self.local().hour() }
    fn minute(&self) -> i8 { self.local().minute() }
    fn second(&self) -> i8 { self.local().second() }
    fn microsecond(&self) -> u32 { self.local().microsecond() }
}

impl PartialEq for OffsetDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for OffsetDateTime {}

impl Hash for OffsetDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state)
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OffsetDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Add<Duration> for OffsetDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        Self { instant: self.instant + duration, offset: self.offset }
    }
}

impl Sub<Duration> for OffsetDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self { instant: self.instant - duration, offset: self.offset }
    }
}

impl Sub<OffsetDateTime> for OffsetDateTime {
    type Output = Duration;

    fn sub(self, earlier: Self) -> Duration {
        self.instant - earlier.instant
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::{LocalDate, LocalTime};

    fn noon_on_friday_13th() -> LocalDateTime {
        LocalDateTime::new(
            LocalDate::ymd(2009, Month::February, 13).unwrap(),
            LocalTime::hms(12, 0, 0).unwrap())
    }

    #[test]
    fn fixed_seconds() {
        assert!(Offset::of_seconds(1234).is_ok());
    }

    #[test]
    fn fixed_seconds_out_of_range() {
        assert_eq!(Offset::of_seconds(100_000), Err(Error::OutOfRange));
    }

    #[test]
    fn fixed_hm() {
        assert_eq!(Offset::of_hours_and_minutes(5, 30).unwrap().total_seconds(), 19_800);
    }

    #[test]
    fn fixed_hm_negative() {
        assert!(Offset::of_hours_and_minutes(-3, -45).unwrap().is_negative());
    }

    #[test]
    fn fixed_hm_err() {
        assert!(Offset::of_hours_and_minutes(8, 60).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert!(Offset::of_hours_and_minutes(-4, 30).is_err());
    }

    #[test]
    fn wall_clock_survives() {
        let offset = Offset::of_hours_and_minutes(1, 0).unwrap();
        let point = offset.transform_date(noon_on_friday_13th()).unwrap();
        assert_eq!(point.local(), noon_on_friday_13th());
        assert_eq!(point.hour(), 12);
        assert_eq!(point.to_offset(Offset::utc()).hour(), 11);
    }

    #[test]
    fn equal_across_offsets() {
        let paris = Offset::of_hours_and_minutes(1, 0).unwrap().transform_date(noon_on_friday_13th()).unwrap();
        let london = paris.to_offset(Offset::utc());
        assert_eq!(paris, london);
    }

    #[test]
    fn day_boundary() {
        let offset = Offset::of_hours_and_minutes(-5, 0).unwrap();
        let point = OffsetDateTime::from_instant(Instant::at(1_234_569_600), offset);
        assert_eq!(point.day(), 13);
        assert_eq!(point.hour(), 19);
    }
}
