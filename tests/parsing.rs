#![cfg(feature = "parse")]

extern crate calendar_units;
use calendar_units::{Error, LocalDate, LocalDateTime, LocalTime, Month, Offset, OffsetDateTime, DatePiece, TimePiece};


#[test]
fn date() {
    let date = "1985-04-12".parse::<LocalDate>().unwrap();
    assert_eq!(date, LocalDate::ymd(1985, Month::April, 12).unwrap());
}

#[test]
fn time() {
    let time = "23:20:50.520".parse::<LocalTime>().unwrap();
    assert_eq!(time, LocalTime::hms_us(23, 20, 50, 520_000).unwrap());
}

#[test]
fn local_date_time() {
    let then = "2001-02-03T04:05:06".parse::<LocalDateTime>().unwrap();
    assert_eq!(then.year(), 2001);
    assert_eq!(then.month(), Month::February);
    assert_eq!(then.second(), 6);
}

#[test]
fn offset_date_time() {
    let then = "2001-02-03T04:05:06+07:00".parse::<OffsetDateTime>().unwrap();
    assert_eq!(then.offset(), Offset::of_hours_and_minutes(7, 0).unwrap());
    assert_eq!(then.to_string(), "2001-02-03T04:05:06.000000+07:00");
}

#[test]
fn out_of_range() {
    assert_eq!("2001-02-29".parse::<LocalDate>(), Err(Error::OutOfRange));
}

#[test]
fn nonsense() {
    let error = "tomorrow".parse::<LocalDate>().unwrap_err();
    assert!(error.to_string().starts_with("parse error"));
}
