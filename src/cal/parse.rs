//! Reading dates and times out of ISO-8601 strings.

use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::offset::{Offset, OffsetDateTime};
use crate::error::Error;


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::date(input).map_err(Error::Parse)?;
        fields_to_date(fields)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::time(input).map_err(Error::Parse)?;
        fields_to_time(fields)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    /// Reads a date-time with its offset. A string with no offset at all
    /// is read as UTC.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date   = fields_to_date(fields.date)?;
        let time   = fields_to_time(fields.time)?;
        let offset = fields_to_offset(fields.time)?;
        offset.transform_date(LocalDateTime::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(month as i8)?;
            LocalDate::ymd(year as i64, month_variant, day as i8)
        }
        iso8601::Date::Week { year, ww, d } => {
            let weekday_variant = Weekday::from_one(d as i8)?;
            LocalDate::ywd(year as i64, ww as i64, weekday_variant)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        }
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    let h  = fields.hour as i8;
    let m  = fields.minute as i8;
    let s  = fields.second as i8;
    let us = fields.millisecond * 1000;

    LocalTime::hms_us(h, m, s, us)
}

fn fields_to_offset(fields: iso8601::Time) -> Result<Offset, Error> {
    if fields.tz_offset_hours == 0 && fields.tz_offset_minutes == 0 {
        Ok(Offset::utc())
    }
    else {
        Offset::of_hours_and_minutes(fields.tz_offset_hours as i8, fields.tz_offset_minutes as i8)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn date() {
        let date: LocalDate = "2015-06-26".parse().unwrap();
        assert_eq!(date, LocalDate::ymd(2015, Month::June, 26).unwrap());
    }

    #[test]
    fn week_date() {
        let date: LocalDate = "2015-W37-5".parse().unwrap();
        assert_eq!(date, LocalDate::ymd(2015, Month::September, 11).unwrap());
    }

    #[test]
    fn ordinal_date() {
        let date: LocalDate = "2015-268".parse().unwrap();
        assert_eq!(date, LocalDate::ymd(2015, Month::September, 25).unwrap());
    }

    #[test]
    fn invalid_date() {
        assert_eq!("2015-02-30".parse::<LocalDate>(), Err(Error::OutOfRange));
        assert!(matches!("not a date".parse::<LocalDate>(), Err(Error::Parse(_))));
    }

    #[test]
    fn milliseconds() {
        let time: LocalTime = "12:25:30.079".parse().unwrap();
        assert_eq!(time.microsecond(), 79_000);
    }

    #[test]
    fn with_offset() {
        let point: OffsetDateTime = "2001-02-03T04:05:06+07:00".parse().unwrap();
        assert_eq!(point.year(), 2001);
        assert_eq!(point.hour(), 4);
        assert_eq!(point.offset(), Offset::of_hours_and_minutes(7, 0).unwrap());
        assert_eq!(point.to_offset(Offset::utc()).hour(), 21);
    }

    #[test]
    fn zulu() {
        let point: OffsetDateTime = "2020-01-01T00:00:00Z".parse().unwrap();
        assert!(point.offset().is_utc());
        assert_eq!(point.instant().seconds(), 1_577_836_800);
    }
}
