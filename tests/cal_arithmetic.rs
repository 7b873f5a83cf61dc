extern crate calendar_units;
use calendar_units::{Duration, Instant, LocalDate, LocalDateTime, LocalTime, Month, DatePiece, TimePiece};


#[test]
fn addition() {
    let date = LocalDateTime::at(10000);
    assert_eq!(LocalDateTime::at(10001), date + Duration::second())
}

#[test]
fn subtraction() {
    let date = LocalDateTime::at(100000000);
    assert_eq!(LocalDateTime::at(99999999), date - Duration::second())
}

#[test]
fn microseconds() {
    let date = LocalDateTime::at_us(0, 999_999);
    let later = date + Duration::positive(0, 1).unwrap();
    assert_eq!(later.second(), 1);
    assert_eq!(later.microsecond(), 0);
}

#[test]
fn before_the_epoch() {
    let date = LocalDateTime::at(0) - Duration::days(1);
    assert_eq!(date.date(), LocalDate::ymd(1969, Month::December, 31).unwrap());
}

#[test]
fn instants_round_trip() {
    let then = LocalDateTime::new(
        LocalDate::ymd(2020, Month::February, 29).unwrap(),
        LocalTime::hms_us(12, 25, 30, 79_635).unwrap());

    assert_eq!(then.to_instant(), Ok(Instant::at_us(1_582_979_130, 79_635)));
    assert_eq!(LocalDateTime::from_instant(then.to_instant().unwrap()), then);
}

#[test]
fn yearday() {
    let date = LocalDateTime::at(1_582_979_130);
    assert_eq!(date.yearday(), 60);
    assert_eq!(date.year_of_century(), 20);
}
