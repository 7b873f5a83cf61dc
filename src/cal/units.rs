//! Whole calendar units: years, and the months and days inside them.

use std::fmt;
use std::ops::{Deref, Range, RangeFrom, RangeTo, RangeFull};

use log::{debug, trace};

use crate::cal::DatePiece;
use crate::cal::datetime::{days_from_civil, LocalDate, Month, MONTHS};
use crate::cal::engine::{Calendar, Gregorian};
use crate::cal::offset::{Offset, OffsetDateTime};
use crate::error::Error;
use crate::sequence::{Days, Months, Years};


/// A **year** is a whole year of the proleptic Gregorian calendar,
/// identified by its number. Year 0 and negative years are allowed.
///
/// ### Examples
///
/// ```
/// use calendar_units::Year;
///
/// assert_eq!(Year(2000).is_leap(), true);
/// assert_eq!(Year(1900).number_of_days(), 365);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns the year that the given point falls in, read in the point’s
    /// own offset.
    pub fn from_instant(point: OffsetDateTime) -> Self {
        Year(point.year())
    }

    /// Parses an ISO-8601 date-time, or failing that a plain date, and
    /// returns the year it falls in.
    #[cfg(feature="parse")]
    pub fn from_string(input: &str) -> Result<Self, Error> {
        match input.parse::<OffsetDateTime>() {
            Ok(point)  => Ok(Self::from_instant(point)),
            Err(_)     => input.parse::<LocalDate>().map(|date| Year(date.year())),
        }
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Returns midnight UTC at the start of this year. A year too far from
    /// the epoch to have an `Instant` returns `Error::Overflow`.
    pub fn start(self) -> Result<OffsetDateTime, Error> {
        let january_1st = LocalDate::ymd(self.0, Month::January, 1)?;
        Offset::utc().transform_date(january_1st.midnight())
    }

    /// Returns the 1st of January of this year.
    pub fn to_date(self) -> LocalDate {
        LocalDate::from_days_since_epoch(days_from_civil(self.0, Month::January, 1))
    }

    pub fn next(self) -> Result<Self, Error> {
        self.plus(1)
    }

    pub fn previous(self) -> Result<Self, Error> {
        self.minus(1)
    }

    /// Returns the year a number of calendar years after this one.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Year;
    ///
    /// assert_eq!(Year(2020).plus(6), Ok(Year(2026)));
    /// assert!(Year(i64::MAX).next().is_err());
    /// ```
    pub fn plus(self, years: i64) -> Result<Self, Error> {
        self.plus_with(&Gregorian, years)
    }

    pub fn minus(self, years: i64) -> Result<Self, Error> {
        self.minus_with(&Gregorian, years)
    }

    /// Moves the start of this year through the given calendar, and
    /// returns the year it lands in.
    pub fn plus_with<C: Calendar>(self, calendar: &C, years: i64) -> Result<Self, Error> {
        let moved = calendar.add_years(self.start()?, years)?;
        Ok(Self::from_instant(moved))
    }

    pub fn minus_with<C: Calendar>(self, calendar: &C, years: i64) -> Result<Self, Error> {
        let years = years.checked_neg().ok_or(Error::Overflow)?;
        self.plus_with(calendar, years)
    }

    /// Returns whether this year is a leap year.
    pub fn is_leap(self) -> bool {
        Gregorian.is_leap_year(self.0)
    }

    pub fn number_of_days(self) -> i16 {
        if self.is_leap() { 366 } else { 365 }
    }

    pub fn number_of_months(self) -> i8 {
        12
    }

    /// Returns the twelve months of this year, in order.
    pub fn months(self) -> Months {
        self.months_in(..)
    }

    /// Returns a continuous span of months in this year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Year;
    /// use calendar_units::Month::{April, June};
    ///
    /// let year = Year(1999);
    /// assert_eq!(year.months_in(..).len(), 12);
    /// assert_eq!(year.months_in(April ..).len(), 9);
    /// assert_eq!(year.months_in(April .. June).len(), 2);
    /// assert_eq!(year.months_in(.. June).len(), 5);
    /// ```
    pub fn months_in<S: MonthSpan>(self, span: S) -> Months {
        span.get_slice().iter().map(|month| self.month(*month)).collect()
    }

    /// Returns a year-month, pairing this year with the given month.
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth { year: self.0, month }
    }

    pub fn january(self)   -> YearMonth { self.month(Month::January) }
    pub fn february(self)  -> YearMonth { self.month(Month::February) }
    pub fn march(self)     -> YearMonth { self.month(Month::March) }
    pub fn april(self)     -> YearMonth { self.month(Month::April) }
    pub fn may(self)       -> YearMonth { self.month(Month::May) }
    pub fn june(self)      -> YearMonth { self.month(Month::June) }
    pub fn july(self)      -> YearMonth { self.month(Month::July) }
    pub fn august(self)    -> YearMonth { self.month(Month::August) }
    pub fn september(self) -> YearMonth { self.month(Month::September) }
    pub fn october(self)   -> YearMonth { self.month(Month::October) }
    pub fn november(self)  -> YearMonth { self.month(Month::November) }
    pub fn december(self)  -> YearMonth { self.month(Month::December) }

    /// Returns every day of this year, in order.
    pub fn days(self) -> Days {
        self.months().into_iter().flat_map(YearMonth::days).collect()
    }

    /// Applies a function to every day of this year, in order.
    pub fn map_days<T, F>(self, f: F) -> Vec<T>
    where F: FnMut(LocalDate) -> T {
        self.days().into_iter().map(f).collect()
    }

    /// Returns the days of this year that match a predicate, in order.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Year;
    ///
    /// assert_eq!(Year(2020).filter_days(|day| day.is_weekend()).len(), 104);
    /// ```
    pub fn filter_days<F>(self, mut predicate: F) -> Days
    where F: FnMut(&LocalDate) -> bool {
        self.days().into_iter().filter(|day| predicate(day)).collect()
    }

    /// Returns the years from this one up to, but not including, the
    /// destination, in chronological order.
    ///
    /// Fails if this year comes after the destination.
    pub fn until(self, destination: Self) -> Result<Years, Error> {
        self.until_with(&Gregorian, destination)
    }

    /// Returns the years from this one up to, but not including, the
    /// destination, stepping through the given calendar.
    pub fn until_with<C: Calendar>(self, calendar: &C, destination: Self) -> Result<Years, Error> {
        if self.is_after(destination) {
            debug!("Refusing to count years from {} until {}", self.0, destination.0);
            return Err(Error::YearAfter { year: self.0, destination: destination.0 });
        }

        let end = destination.start()?;
        let mut years = Vec::new();
        let mut current = self.start()?;

        while current < end {
            trace!("Counted year {}", current.year());
            years.push(Self::from_instant(current));
            current = calendar.add_years(current, 1)?;
        }

        Ok(Years::new(years))
    }

    /// Returns the years from the one before this back to the destination,
    /// most recent first.
    ///
    /// Fails if this year comes before the destination.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Year;
    ///
    /// let years = Year(2025).since(Year(2020)).unwrap();
    /// assert_eq!(years[0], Year(2024));
    /// assert_eq!(years[4], Year(2020));
    /// ```
    pub fn since(self, destination: Self) -> Result<Years, Error> {
        self.since_with(&Gregorian, destination)
    }

    /// Returns the years from the one before this back to the destination,
    /// stepping through the given calendar.
    pub fn since_with<C: Calendar>(self, calendar: &C, destination: Self) -> Result<Years, Error> {
        if self.is_before(destination) {
            debug!("Refusing to count years from {} since {}", self.0, destination.0);
            return Err(Error::YearBefore { year: self.0, destination: destination.0 });
        }

        destination.until_with(calendar, self).map(Years::reversed)
    }

    /// Returns the years between this one and the destination, in whichever
    /// direction gets there: `since` if this year is later, `until` if not.
    ///
    /// The direction never causes an error, but running past the range of
    /// an `Instant` or failing inside the calendar still does.
    pub fn iterate(self, destination: Self) -> Result<Years, Error> {
        self.iterate_with(&Gregorian, destination)
    }

    /// Returns the years between this one and the destination, stepping
    /// through the given calendar.
    pub fn iterate_with<C: Calendar>(self, calendar: &C, destination: Self) -> Result<Years, Error> {
        if self.is_after(destination) {
            self.since_with(calendar, destination)
        }
        else {
            self.until_with(calendar, destination)
        }
    }

    pub fn is_equal(self, other: Self) -> bool {
        self.0 == other.0
    }

    pub fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }

    pub fn is_before_or_equal(self, other: Self) -> bool {
        self.0 <= other.0
    }

    pub fn is_after(self, other: Self) -> bool {
        self.0 > other.0
    }

    pub fn is_after_or_equal(self, other: Self) -> bool {
        self.0 >= other.0
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// A span of months, which gets used to pick out some of a year’s months.
pub trait MonthSpan {

    /// Returns a static slice of `Month` values contained by this span.
    fn get_slice(&self) -> &'static [Month];
}

fn months_from_january(month: Month) -> usize {
    month as usize - 1
}

impl MonthSpan for RangeFull {
    fn get_slice(&self) -> &'static [Month] {
        MONTHS
    }
}

impl MonthSpan for RangeFrom<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[months_from_january(self.start) ..]
    }
}

impl MonthSpan for RangeTo<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[.. months_from_january(self.end)]
    }
}

impl MonthSpan for Range<Month> {
    fn get_slice(&self) -> &'static [Month] {
        let start = months_from_january(self.start);
        let end = months_from_january(self.end).max(start);
        &MONTHS[start .. end]
    }
}


/// A **year-month** is one month of one particular year.
///
/// It holds the number of its year rather than the `Year` itself, and
/// builds the year back up when asked.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct YearMonth {
    year: i64,
    month: Month,
}

impl YearMonth {

    /// Returns the year this month belongs to.
    pub fn year(self) -> Year {
        Year(self.year)
    }

    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the number of this month, with January as 1.
    pub fn number(self) -> i8 {
        self.month as i8
    }

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::Year;
    ///
    /// assert_eq!(Year(2000).february().number_of_days(), 29);
    /// assert_eq!(Year(1900).february().number_of_days(), 28);
    /// ```
    pub fn number_of_days(self) -> i8 {
        self.month.days_in_month(self.year().is_leap())
    }

    /// Returns every day of this month, in order.
    pub fn days(self) -> Days {
        self.days_in(..)
    }

    /// Returns a continuous span of days in this month. Day numbers that
    /// don’t exist in this month are left out.
    pub fn days_in<S: DaySpan>(self, span: S) -> Days {
        span.get_range(&self)
            .filter_map(|day| self.day(day).ok())
            .collect()
    }

    /// Returns a `LocalDate` based on the day of this month.
    pub fn day(self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::ymd(self.year, self.month, day)
    }
}


/// A span of days, which gets used to pick out some of a month’s days.
pub trait DaySpan {

    /// Returns a `Range` of the day numbers specified for the given year-month pair.
    fn get_range(&self, ym: &YearMonth) -> Range<i8>;
}

impl DaySpan for RangeFull {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        1 .. ym.number_of_days() + 1
    }
}

impl DaySpan for RangeFrom<i8> {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        self.start .. ym.number_of_days() + 1
    }
}

impl DaySpan for RangeTo<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        1 .. self.end
    }
}

impl DaySpan for Range<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        self.clone()
    }
}


impl Months {

    /// Picks out a month by its number, with January as 1. Fails outside
    /// of `1 ..= 12`, or if this run doesn’t contain that month.
    pub fn by_number(&self, number: i8) -> Result<YearMonth, Error> {
        let month = Month::from_one(number)?;
        self.iter()
            .find(|ym| ym.month == month)
            .copied()
            .ok_or(Error::OutOfRange)
    }
}
