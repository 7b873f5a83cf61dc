//! Calendar intervals: differences measured in calendar fields.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::is_leap_year;
use crate::cal::offset::OffsetDateTime;


const MICROSECONDS_IN_DAY: i128 = 86_400 * 1_000_000;

/// A **calendar interval** is a difference between two points measured in
/// years, months, days, hours, minutes, seconds, and microseconds, rather
/// than as one exact length of time.
///
/// Years and months have no fixed length, so an interval only turns into
/// a `Duration` when it has no year or month part, or when it knows the
/// total number of days it covers.
#[derive(PartialEq, Eq, Hash, Debug, Default, Copy, Clone)]
pub struct CalendarInterval {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,

    /// The exact number of whole days covered, when known.
    pub total_days: Option<i64>,

    /// Whether the interval points backwards in time.
    pub invert: bool,
}

impl CalendarInterval {

    /// Measures the calendar difference from `start` to `end`, reading both
    /// points in the start’s offset. The fields are never negative, and
    /// `invert` is set when `end` comes before `start`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::{CalendarInterval, Instant, OffsetDateTime};
    ///
    /// let start = OffsetDateTime::utc(Instant::at(1_577_836_800));
    /// let end = OffsetDateTime::utc(Instant::at(1_612_224_000));
    /// let interval = CalendarInterval::between(start, end);
    ///
    /// assert_eq!(interval.to_string(), "P1Y1M1DT0H0M0S");
    /// assert_eq!(interval.total_days, Some(398));
    /// ```
    pub fn between(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        let invert = end < start;
        let (earlier, later) = if invert { (end, start) } else { (start, end) };
        let later = later.to_offset(earlier.offset());

        let mut microseconds = i64::from(later.microsecond()) - i64::from(earlier.microsecond());
        let mut seconds = i64::from(later.second()) - i64::from(earlier.second());
        let mut minutes = i64::from(later.minute()) - i64::from(earlier.minute());
        let mut hours = i64::from(later.hour()) - i64::from(earlier.hour());
        let mut days = i64::from(later.day()) - i64::from(earlier.day());
        let mut months = later.month() as i64 - earlier.month() as i64;
        let mut years = later.year() - earlier.year();

        if microseconds < 0 { microseconds += 1_000_000; seconds -= 1; }
        if seconds < 0 { seconds += 60; minutes -= 1; }
        if minutes < 0 { minutes += 60; hours -= 1; }
        if hours < 0 { hours += 24; days -= 1; }

        // Borrowed days come from the earlier point’s month, so the 31st of
        // January to the 1st of March is one month and one day.
        if days < 0 {
            days += i64::from(earlier.month().days_in_month(is_leap_year(earlier.year())));
            months -= 1;
        }

        if months < 0 { months += 12; years -= 1; }

        // Whole days always fit, even when the exact difference is too long
        // for a `Duration`.
        let elapsed = later.instant().units() - earlier.instant().units();
        let total_days = (elapsed / MICROSECONDS_IN_DAY) as i64;

        Self {
            years, months, days, hours, minutes, seconds, microseconds,
            total_days: Some(total_days),
            invert,
        }
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}Y{}M{}DT{}H{}M{}S", self.years, self.months, self.days, self.hours, self.minutes, self.seconds)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::duration::Duration;
    use crate::error::Error;
    use crate::instant::Instant;

    fn at(seconds: i64, microsecond: u32) -> OffsetDateTime {
        OffsetDateTime::utc(Instant::at_us(seconds, microsecond))
    }

    #[test]
    fn display() {
        let interval = CalendarInterval { years: 1, months: 2, days: 3, hours: 4, minutes: 5, seconds: 6, .. CalendarInterval::default() };
        assert_eq!(interval.to_string(), "P1Y2M3DT4H5M6S");
    }

    #[test]
    fn borrows_from_earlier_month() {
        // 2021-01-31 to 2021-03-01
        let interval = CalendarInterval::between(at(1_612_051_200, 0), at(1_614_556_800, 0));
        assert_eq!((interval.months, interval.days), (1, 1));
        assert_eq!(interval.total_days, Some(29));
    }

    #[test]
    fn inverted() {
        let interval = CalendarInterval::between(at(100, 500_000), at(40, 0));
        assert!(interval.invert);
        assert_eq!((interval.minutes, interval.seconds, interval.microseconds), (1, 0, 500_000));
    }

    #[test]
    fn converts_to_exact_duration() {
        let start = at(1_577_881_530, 79_635);
        let end = at(1_609_503_932, 588_460);
        let interval = CalendarInterval::between(start, end);

        assert_eq!(Duration::from_calendar_interval(&interval), Ok(end - start));
    }

    #[test]
    fn inverted_converts_to_negative_duration() {
        let start = at(1_577_881_532, 588_460);
        let end = at(1_577_881_530, 79_635);
        let interval = CalendarInterval::between(start, end);

        assert_eq!(Duration::from_calendar_interval(&interval), Ok(Duration::precise(-2.508825).unwrap()));
    }

    #[test]
    fn years_need_total_days() {
        let interval = CalendarInterval { years: 1, .. CalendarInterval::default() };
        assert_eq!(Duration::from_calendar_interval(&interval), Err(Error::ImpreciseInterval {
            interval: "P1Y0M0DT0H0M0S".into(),
            unit: "year",
        }));
    }

    #[test]
    fn months_need_total_days() {
        let interval = CalendarInterval { months: -1, .. CalendarInterval::default() };
        assert!(Duration::from_calendar_interval(&interval).unwrap_err().is_conversion());
    }

    #[test]
    fn too_many_days() {
        let interval = CalendarInterval { total_days: Some(i64::MAX / 1000), years: 1, .. CalendarInterval::default() };
        assert_eq!(Duration::from_calendar_interval(&interval), Err(Error::Overflow));
    }

    #[test]
    fn parts_overflow_together() {
        let interval = CalendarInterval { days: i64::MAX / 86400, hours: 24, .. CalendarInterval::default() };
        assert_eq!(Duration::from_calendar_interval(&interval), Err(Error::Overflow));
    }

    #[test]
    fn too_many_seconds_backwards() {
        let interval = CalendarInterval { seconds: i64::MIN, .. CalendarInterval::default() };
        assert_eq!(Duration::from_calendar_interval(&interval), Err(Error::Overflow));
    }

    #[test]
    fn days_between_distant_points() {
        let interval = CalendarInterval::between(at(i64::MIN / 2, 0), at(i64::MAX / 2, 0));
        assert_eq!(interval.total_days, Some(106_751_991_167_300));
        assert_eq!(Duration::from_calendar_interval(&interval).map(Duration::in_seconds), Ok(i64::MAX));
    }

    #[test]
    fn round_trip_through_duration() {
        let duration = Duration::positive(90, 250).unwrap().invert();
        assert_eq!(Duration::from_calendar_interval(&duration.to_calendar_interval()), Ok(duration));
    }
}
