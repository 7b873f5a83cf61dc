extern crate calendar_units;

pub use calendar_units::{Duration, Error, Instant, Offset, OffsetDateTime, TimePeriod, TimePiece};


fn at(seconds: i64, microsecond: u32) -> OffsetDateTime {
    OffsetDateTime::utc(Instant::at_us(seconds, microsecond))
}

/// 2020-01-01T00:00:00 to 2020-01-02T00:00:00.
fn first_day_of_2020() -> TimePeriod {
    TimePeriod::new(at(1_577_836_800, 0), at(1_577_923_200, 0))
}


mod distance {
    use super::*;

    #[test]
    fn whole_day() {
        let period = first_day_of_2020();
        let distance = period.distance().unwrap();
        assert_eq!(distance.in_seconds(), 86400);
        assert_eq!(distance.is_negative(), false);

        let backward = period.distance_backward().unwrap();
        assert_eq!(backward.in_seconds(), -86400);
        assert_eq!(backward.in_seconds_abs(), 86400);
        assert_eq!(backward.is_negative(), true);
    }

    #[test]
    fn fractional() {
        // 2020-01-01T12:25:30.079635 to 2020-01-01T12:25:32.588460
        let period = TimePeriod::new(at(1_577_881_530, 79_635), at(1_577_881_532, 588_460));
        assert_eq!(period.distance().unwrap().in_seconds_precise_string(), "2.508825");
        assert_eq!(period.distance_backward().unwrap().in_seconds_precise_string(), "-2.508825");
    }

    #[test]
    fn across_offsets() {
        let tokyo = Offset::of_hours_and_minutes(9, 0).unwrap();
        let period = TimePeriod::new(at(0, 0), at(3600, 0).to_offset(tokyo));
        assert_eq!(period.distance(), Ok(Duration::hour()));
    }

    #[test]
    fn ends_of_the_timeline() {
        let period = TimePeriod::new(at(i64::MIN, 0), at(i64::MAX, 999_999));
        let error = period.distance().unwrap_err();
        assert_eq!(error, Error::Overflow);
        assert!(error.is_conversion());
        assert_eq!(period.distance_backward(), Err(Error::Overflow));
    }

    #[test]
    fn half_the_timeline() {
        let period = TimePeriod::new(at(0, 0), at(i64::MAX, 0));
        assert_eq!(period.distance().map(Duration::in_seconds), Ok(i64::MAX));
        assert_eq!(period.distance_backward().map(Duration::in_seconds), Ok(-i64::MAX));
    }

    #[test]
    fn directions() {
        let period = first_day_of_2020();
        assert!(period.is_forward());
        assert!(TimePeriod::new(period.end, period.start).is_backward());
    }
}


mod iterate {
    use super::*;

    #[test]
    fn hours() {
        let hours = first_day_of_2020().iterate(Duration::hour()).unwrap();
        assert_eq!(hours.len(), 24);

        assert_eq!(hours[0].start.hour(), 0);
        assert_eq!(hours[0].end.hour(), 1);
        assert_eq!(hours[1].start.hour(), 1);
        assert_eq!(hours[1].end.hour(), 2);
        assert_eq!(hours[23].start.hour(), 23);
        assert_eq!(hours[23].end.hour(), 0);
    }

    #[test]
    fn contiguous() {
        let pieces = first_day_of_2020().iterate(Duration::minutes(7)).unwrap();
        assert!(pieces.as_slice().windows(2).all(|pair| pair[0].end == pair[1].start));
        assert_eq!(pieces.first().unwrap().start, first_day_of_2020().start);
        assert_eq!(pieces.last().unwrap().end, first_day_of_2020().end);
    }

    #[test]
    fn oversized_step() {
        assert_eq!(first_day_of_2020().iterate(Duration::days(2)).unwrap().len(), 1);
    }

    #[test]
    fn fractional_step() {
        let period = TimePeriod::new(at(0, 0), at(1, 0));
        let pieces = period.iterate(Duration::precise(0.3).unwrap()).unwrap();
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[3].distance(), Ok(Duration::precise(0.1).unwrap()));
    }

    #[test]
    fn zero_step() {
        let error = first_day_of_2020().iterate(Duration::zero()).unwrap_err();
        assert_eq!(error, Error::ZeroStep);
        assert!(error.is_validation());
    }
}


mod iterate_backward {
    use super::*;

    #[test]
    fn hours() {
        let hours = first_day_of_2020().iterate_backward(Duration::hour()).unwrap();
        assert_eq!(hours.len(), 24);

        assert_eq!(hours[0].start.hour(), 0);
        assert_eq!(hours[0].end.hour(), 23);
        assert_eq!(hours[1].start.hour(), 23);
        assert_eq!(hours[1].end.hour(), 22);
        assert_eq!(hours[23].start.hour(), 1);
        assert_eq!(hours[23].end.hour(), 0);
    }

    #[test]
    fn oversized_step() {
        assert_eq!(first_day_of_2020().iterate_backward(Duration::days(2)).unwrap().len(), 1);
    }

    #[test]
    fn leftover_at_the_start() {
        let pieces = first_day_of_2020().iterate_backward(Duration::hours(5)).unwrap();
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces[4].distance_backward(), Ok(Duration::hours(4)));
        assert_eq!(pieces[4].end, first_day_of_2020().start);
    }

    #[test]
    fn mirrors_forwards() {
        let forwards = first_day_of_2020().iterate(Duration::hours(6)).unwrap();
        let backwards = first_day_of_2020().iterate_backward(Duration::hours(6)).unwrap();

        let flipped: Vec<_> = backwards.into_iter().rev().map(|p| TimePeriod::new(p.end, p.start)).collect();
        assert_eq!(forwards.into_vec(), flipped);
    }
}
