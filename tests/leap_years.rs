extern crate calendar_units;
extern crate rand;

use calendar_units::Year;
use rand::Rng;


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap());
}

#[test]
fn year_2020() {
    assert!(Year(2020).is_leap());
    assert_eq!(Year(2020).number_of_days(), 366);
}

#[test]
fn year_2021() {
    assert!(Year(2021).is_leap() == false);
    assert_eq!(Year(2021).number_of_days(), 365);
}

#[test]
fn days_match_the_rule() {
    for year in 0 .. 10_000 {
        assert_eq!(Year(year).days().len(), Year(year).number_of_days() as usize);
    }
}

#[test]
fn random_years() {
    let mut rng = rand::thread_rng();

    for _ in 0 .. 10_000 {
        let year: i64 = rng.gen_range(-1_000_000 .. 1_000_000);
        let rule = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(Year(year).is_leap(), rule, "year {}", year);
    }
}
