//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given half-open range.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Splits a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is a division that returns both the quotient and the remainder,
/// except that a negative remainder gets wrapped around to be positive,
/// so the quotient is always rounded towards negative infinity.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    (number_of_periods.div_euclid(cycle_length), number_of_periods.rem_euclid(cycle_length))
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn within() {
        assert!(5.is_within(0 .. 10));
        assert!(!10.is_within(0 .. 10));
    }

    #[test]
    fn cycles_positive() {
        assert_eq!(split_cycles(86_401, 86_400), (1, 1));
    }

    #[test]
    fn cycles_negative() {
        assert_eq!(split_cycles(-1, 86_400), (-1, 86_399));
    }
}
