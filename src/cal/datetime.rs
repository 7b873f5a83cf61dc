//! Dates, times, datetimes, months, and weekdays.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{RangeExt, split_cycles};

use self::Month::*;
use self::Weekday::*;


/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st March, year 0** and **1st January, 1970**.
///
/// The day calculations below count years as starting in March rather than
/// January. This puts the leap day at the very *end* of each year, so the
/// length of every month before it is fixed, and the whole problem reduces
/// to a few divisions. Year 0 is a multiple of 400, which lines these
/// March-based years up with the Gregorian 400-year cycle.
const DAYS_FROM_MARCH_0000: i64 = 719_468;


/// Whether the given year is a leap year in the proleptic Gregorian
/// calendar.
pub(crate) fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days between **1st January, 1970** and the given
/// year, month, and day. The day isn’t checked against the month, so the
/// 30th of February is just the 1st or 2nd of March.
pub(crate) fn days_from_civil(year: i64, month: Month, day: i64) -> i64 {
    let (cycles, day_of_cycle) = civil_cycles(year, month, day);
    cycles * DAYS_IN_400Y + day_of_cycle - DAYS_FROM_MARCH_0000
}

/// Returns the same number of days as `days_from_civil`, or `None` if it
/// doesn’t fit in an `i64`.
pub(crate) fn checked_days_from_civil(year: i64, month: Month, day: i64) -> Option<i64> {
    let (cycles, day_of_cycle) = civil_cycles(year, month, day);
    cycles.checked_mul(DAYS_IN_400Y)?.checked_add(day_of_cycle - DAYS_FROM_MARCH_0000)
}

/// Splits a date into whole 400-year cycles since **1st March, year 0**, and
/// the day within its cycle.
fn civil_cycles(year: i64, month: Month, day: i64) -> (i64, i64) {
    let month = month as i64;
    let (mut cycles, mut year_of_cycle) = split_cycles(year, 400);

    // January and February count as the last months of the previous year.
    if month <= 2 {
        if year_of_cycle == 0 {
            cycles -= 1;
            year_of_cycle = 399;
        }
        else {
            year_of_cycle -= 1;
        }
    }

    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;

    (cycles, day_of_cycle)
}

/// Returns the year, month, and day that fall the given number of days
/// after **1st January, 1970**. This is the reverse of `days_from_civil`.
pub(crate) fn civil_from_days(days: i64) -> (i64, Month, i8) {
    let (cycles, day_of_cycle) = split_cycles(days + DAYS_FROM_MARCH_0000, DAYS_IN_400Y);

    // The leap days at the end of each 4-, 100-, and 400-year span get in
    // the way of dividing by 365, so take them back out first.
    let year_of_cycle = (day_of_cycle - day_of_cycle / 1460 + day_of_cycle / 36_524 - day_of_cycle / (DAYS_IN_400Y - 1)) / 365;
    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);

    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };
    let year = year_of_cycle + cycles * 400 + if month <= 2 { 1 } else { 0 };

    // `month` is always in 1 ..= 12 here.
    let month_variant = MONTHS[(month - 1) as usize];
    (year, month_variant, day as i8)
}


pub(crate) static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*. It is also the day unit that years and months break down into.
#[derive(Eq, Clone, Copy, Hash)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    microsecond: u32,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        let ymd = YMD { year, month, day };
        if ymd.is_valid() {
            let days = checked_days_from_civil(year, month, day as i64).ok_or(Error::Overflow)?;
            Ok(Self::from_days_since_epoch(days))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values, where the 1st of January is day 1.
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };

        if yearday.is_within(1 .. days_in_year + 1) {
            let january_1st = checked_days_from_civil(year, January, 1).ok_or(Error::Overflow)?;
            Ok(Self::from_days_since_epoch(january_1st + yearday - 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given year, ISO week
    /// number, and weekday.
    ///
    /// Week 1 is the week containing the 4th of January, and weeks start on
    /// Mondays, so the year can change for dates early in week 1 or late in
    /// week 53.
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        if !week.is_within(1 .. 54) {
            return Err(Error::OutOfRange);
        }

        let jan_4 = checked_days_from_civil(year, January, 4).ok_or(Error::Overflow)?;
        let first_monday = jan_4 - (days_to_weekday(jan_4).days_from_monday_as_one() as i64 - 1);
        let days = first_monday + (week - 1) * 7 + (weekday.days_from_monday_as_one() as i64 - 1);
        Ok(Self::from_days_since_epoch(days))
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since **1st January, 1970**.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);

        Self {
            ymd:     YMD { year, month, day },
            yearday: (days - days_from_civil(year, January, 1) + 1) as i16,
            weekday: days_to_weekday(days),
        }
    }

    /// Whether this date falls on a Saturday or a Sunday.
    pub fn is_weekend(self) -> bool {
        self.weekday == Saturday || self.weekday == Sunday
    }

    /// Returns a date-time at midnight at the start of this date.
    pub fn midnight(self) -> LocalDateTime {
        LocalDateTime::new(self, LocalTime::midnight())
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Computes the hour, minute, second, and microsecond, based on the
    /// number of microseconds that have elapsed since midnight.
    pub(crate) fn from_microseconds_since_midnight(microseconds: i64) -> Self {
        let seconds = microseconds / 1_000_000;

        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            microsecond: (microseconds % 1_000_000) as u32,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The microsecond field is set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_us(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and microsecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_us(hour: i8, minute: i8, second: i8, microsecond: u32) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && microsecond.is_within(0..1_000_000)
        {
            Ok(Self { hour, minute, second, microsecond })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Calculate the number of whole seconds since midnight this time is at.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// Whether this time falls before noon.
    pub fn is_am(self) -> bool {
        self.hour < 12
    }

    /// Whether this time falls at or after noon.
    pub fn is_pm(self) -> bool {
        !self.is_am()
    }

    /// Returns the exact length of time since midnight.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::LocalTime;
    ///
    /// let ten = LocalTime::hms(10, 0, 0).unwrap();
    /// assert_eq!(ten.to_duration().in_seconds_precise_string(), "36000.000000");
    /// ```
    pub fn to_duration(self) -> Duration {
        Duration::seconds(self.to_seconds()) + Duration::microseconds(i64::from(self.microsecond))
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn microsecond(&self) -> u32 { self.microsecond }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at_us(instant.seconds(), instant.microsecond())
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// microsecond to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_us(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// microsecond of that second.
    pub fn at_us(seconds_since_1970_epoch: i64, microsecond_of_second: u32) -> Self {
        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days),
            time: LocalTime::from_microseconds_since_midnight(secs * 1_000_000 + microsecond_of_second as i64),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Returns the instant this date-time names when read as UTC, or
    /// `Error::Overflow` when its seconds don’t fit in an `i64`.
    pub fn to_instant(&self) -> Result<Instant, Error> {
        let ymd = self.date.ymd;
        let seconds = checked_days_from_civil(ymd.year, ymd.month, ymd.day as i64)
            .and_then(|days| days.checked_mul(SECONDS_IN_DAY))
            .and_then(|seconds| seconds.checked_add(self.time.to_seconds()))
            .ok_or(Error::Overflow)?;

        Ok(Instant::at_us(seconds, self.time.microsecond))
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn microsecond(&self) -> u32 { self.time.microsecond }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let instant = self.to_instant().ok().and_then(|i| i.checked_add(duration));
        Self::from_instant(instant.expect("overflow when adding duration to date-time"))
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        let instant = self.to_instant().ok().and_then(|i| i.checked_sub(duration));
        Self::from_instant(instant.expect("overflow when subtracting duration from date-time"))
    }
}


/// A **YMD** is an implementation detail of `LocalDate`: the three fields
/// without any guarantee that they form a real date. It is never exposed
/// to users of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    fn is_valid(&self) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year(self.year))
    }
}

/// Computes the weekday, given the number of days that have passed
/// since **1st January, 1970**.
fn days_to_weekday(days: i64) -> Weekday {
    // The 1st of January 1970 was a Thursday, and Sunday is Day 0.
    WEEKDAYS[(days + 4).rem_euclid(7) as usize]
}

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendar_units::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1 .. 13) {
            Ok(MONTHS[(month - 1) as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Weekdays don’t get an Ord instance, because there’s no real standard as
// to whether Sunday should come before Monday, or the other way around.

impl Weekday {
    fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Monday as Day 1, and
    /// Sunday as Day 7, as ISO-8601 numbers them.
    ///
    /// ```rust
    /// use calendar_units::Weekday;
    /// assert_eq!(Weekday::from_one(7), Ok(Weekday::Sunday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(1 .. 8) {
            Ok(WEEKDAYS[(weekday % 7) as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }
}
