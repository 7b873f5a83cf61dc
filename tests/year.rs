extern crate calendar_units;

pub use calendar_units::{Error, LocalDate, Month, Year, DatePiece};


mod navigation {
    use super::*;

    #[test]
    fn next_and_previous() {
        assert_eq!(Year(2020).next(), Ok(Year(2021)));
        assert_eq!(Year(2020).previous(), Ok(Year(2019)));
    }

    #[test]
    fn plus_and_minus() {
        assert_eq!(Year(2020).plus(6), Ok(Year(2026)));
        assert_eq!(Year(2020).minus(5).unwrap().to_date(), LocalDate::ymd(2015, Month::January, 1).unwrap());
    }

    #[test]
    fn leap_year_to_leap_year() {
        assert_eq!(Year(2000).plus(4), Ok(Year(2004)));
        assert_eq!(Year(2004).minus(4), Ok(Year(2000)));
    }

    #[test]
    fn end_of_time() {
        assert_eq!(Year(i64::MAX).next(), Err(Error::Overflow));
        assert_eq!(Year(i64::MIN).previous(), Err(Error::Overflow));
    }

    #[test]
    fn comparisons() {
        assert!(Year(2020).is_equal(Year(2020)));
        assert!(Year(2019).is_before(Year(2020)));
        assert!(Year(2020).is_before_or_equal(Year(2020)));
        assert!(Year(2021).is_after(Year(2020)));
        assert!(Year(2020).is_after_or_equal(Year(2020)));
        assert!(!Year(2020).is_after(Year(2020)));
    }

    #[test]
    fn number() {
        assert_eq!(Year(-44).number(), -44);
        assert_eq!(*Year(1066), 1066);
    }
}


mod months {
    use super::*;

    #[test]
    fn by_number() {
        let months = Year(2020).months();
        assert_eq!(months.len(), 12);
        assert_eq!(Year(2020).number_of_months(), 12);

        for number in 1 ..= 12 {
            let month = months.by_number(number).unwrap();
            assert_eq!(month.number(), number);
            assert_eq!(month.year(), Year(2020));
        }
    }

    #[test]
    fn by_bad_number() {
        assert_eq!(Year(2020).months().by_number(0), Err(Error::OutOfRange));
    }

    #[test]
    fn named() {
        let year = Year(2020);
        let named = vec![
            year.january(), year.february(), year.march(), year.april(),
            year.may(), year.june(), year.july(), year.august(),
            year.september(), year.october(), year.november(), year.december(),
        ];

        assert_eq!(year.months().into_vec(), named);
    }

    #[test]
    fn day_counts() {
        let counts: Vec<i8> = Year(2020).months().iter().map(|m| m.number_of_days()).collect();
        assert_eq!(counts, vec![ 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31 ]);
        assert_eq!(Year(2021).february().number_of_days(), 28);
    }
}


mod days {
    use super::*;

    #[test]
    fn map_days() {
        let yeardays = Year(2020).map_days(|day| day.yearday());
        assert_eq!(yeardays.len(), 366);
        assert_eq!(yeardays[0], 1);
        assert_eq!(yeardays[365], 366);
    }

    #[test]
    fn weekends() {
        let weekends = Year(2020).filter_days(|day| day.is_weekend());
        assert_eq!(weekends.len(), 104);
        assert_eq!(weekends[0], LocalDate::ymd(2020, Month::January, 4).unwrap());
    }

    #[test]
    fn in_order() {
        let days = Year(2019).days();
        assert!(days.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(days.last(), Some(&LocalDate::ymd(2019, Month::December, 31).unwrap()));
    }
}


mod ranges {
    use super::*;

    #[test]
    fn until() {
        let years = Year(2020).until(Year(2025)).unwrap();
        assert_eq!(years.len(), 5);
        assert_eq!(years[0], Year(2020));
        assert_eq!(years[4], Year(2024));
    }

    #[test]
    fn until_wrong_way() {
        let error = Year(2020).until(Year(2019)).unwrap_err();
        assert_eq!(error.to_string(), "2020 is after 2019");
        assert!(error.is_range());
    }

    #[test]
    fn since() {
        let years = Year(2025).since(Year(2020)).unwrap();
        assert_eq!(years.len(), 5);
        assert_eq!(years[0], Year(2024));
        assert_eq!(years[4], Year(2020));
    }

    #[test]
    fn since_wrong_way() {
        let error = Year(2019).since(Year(2020)).unwrap_err();
        assert_eq!(error.to_string(), "2019 is before 2020");
    }

    #[test]
    fn iterate_picks_a_direction() {
        assert_eq!(Year(2020).iterate(Year(2025)), Year(2020).until(Year(2025)));
        assert_eq!(Year(2025).iterate(Year(2020)), Year(2025).since(Year(2020)));
    }

    #[test]
    fn iterate_same_years() {
        let mut forwards = Year(2020).iterate(Year(2025)).unwrap().into_vec();
        let backwards = Year(2025).iterate(Year(2020)).unwrap().into_vec();
        forwards.reverse();
        assert_eq!(forwards, backwards);
    }

    #[test]
    fn iterate_past_the_end_of_time() {
        let error = Year(300_000_000_000).iterate(Year(300_000_000_003)).unwrap_err();
        assert_eq!(error, Error::Overflow);
        assert!(error.is_conversion());
    }
}


#[cfg(feature = "parse")]
mod strings {
    use super::*;

    #[test]
    fn from_date_time() {
        assert_eq!(Year::from_string("2020-06-15T10:00:00Z"), Ok(Year(2020)));
    }

    #[test]
    fn from_date() {
        assert_eq!(Year::from_string("1999-12-31"), Ok(Year(1999)));
    }

    #[test]
    fn in_its_own_offset() {
        assert_eq!(Year::from_string("2021-01-01T00:30:00+01:00"), Ok(Year(2021)));
    }

    #[test]
    fn from_nonsense() {
        assert!(Year::from_string("next year").is_err());
    }
}
