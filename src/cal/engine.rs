//! The calendar engine that years step through and periods get cut up by.

use log::{debug, trace};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{self, LocalDate, LocalDateTime, LocalTime};
use crate::cal::offset::OffsetDateTime;
use crate::duration::Duration;
use crate::error::Error;


/// A **calendar** knows how long its years are, and how to move a point in
/// time by calendar years or by a fixed duration.
///
/// Calendar years have no fixed length, so moving by a year has to go
/// through the calendar’s own fields rather than adding seconds. Anything
/// that steps through time takes a calendar, so a different rule set can
/// be dropped in without touching the units themselves.
pub trait Calendar {

    /// Returns whether the given year has an extra day.
    fn is_leap_year(&self, year: i64) -> bool;

    /// Moves a point by a number of calendar years, keeping its month,
    /// day, and wall-clock time.
    fn add_years(&self, point: OffsetDateTime, years: i64) -> Result<OffsetDateTime, Error>;

    /// Moves a point by an exact duration.
    fn add_duration(&self, point: OffsetDateTime, duration: Duration) -> Result<OffsetDateTime, Error> {
        point.checked_add(duration).ok_or(Error::Overflow)
    }

    /// Returns the points `start`, `start + step`, `start + 2 × step`, and
    /// so on, for as long as they stay before `end`. With a negative step
    /// the points walk backwards, for as long as they stay after `end`.
    ///
    /// A zero step would never get anywhere, so it’s rejected.
    fn enumerate(&self, start: OffsetDateTime, step: Duration, end: OffsetDateTime) -> Result<Vec<OffsetDateTime>, Error> {
        if step.is_zero() {
            debug!("Refusing to enumerate from {:?} with a zero step", start);
            return Err(Error::ZeroStep);
        }

        let forwards = step.is_positive();
        let mut points = Vec::new();
        let mut current = start;

        while (forwards && current < end) || (!forwards && current > end) {
            trace!("Enumerated point {:?}", current);
            points.push(current);
            current = self.add_duration(current, step)?;
        }

        debug!("Enumerated {} points from {:?} to {:?} by {:?}", points.len(), start, end, step);
        Ok(points)
    }
}


/// The proleptic **Gregorian** calendar: the leap-year rule of 1582 carried
/// backwards and forwards forever.
#[derive(PartialEq, Eq, Debug, Default, Copy, Clone)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn is_leap_year(&self, year: i64) -> bool {
        datetime::is_leap_year(year)
    }

    /// Adding a year to the 29th of February lands on the 1st of March when
    /// the new year has no leap day.
    fn add_years(&self, point: OffsetDateTime, years: i64) -> Result<OffsetDateTime, Error> {
        let year = point.year().checked_add(years).ok_or(Error::Overflow)?;
        let days = datetime::checked_days_from_civil(year, point.month(), 1)
            .and_then(|first| first.checked_add(point.day() as i64 - 1))
            .ok_or(Error::Overflow)?;

        let date = LocalDate::from_days_since_epoch(days);
        let time = LocalTime::hms_us(point.hour(), point.minute(), point.second(), point.microsecond())?;

        trace!("Moved {:?} by {} years to {:?}", point, years, date);
        point.offset().transform_date(LocalDateTime::new(date, time))
    }
}
