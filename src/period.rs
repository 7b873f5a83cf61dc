//! Spans of time between two calendar points.

use std::fmt;

use log::{debug, trace};

use crate::cal::engine::{Calendar, Gregorian};
use crate::cal::offset::OffsetDateTime;
use crate::duration::Duration;
use crate::error::Error;
use crate::sequence::TimePeriods;


/// A **time period** is the span between two points in time.
///
/// There’s no rule that the start has to come before the end. Periods get
/// used both ways round, and each operation says which way round it reads
/// them: `iterate` walks from `start` towards `end`, and `iterate_backward`
/// walks from `end` back towards `start`.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct TimePeriod {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl TimePeriod {

    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self { start, end }
    }

    /// Whether the start comes strictly before the end.
    pub fn is_forward(&self) -> bool {
        self.start < self.end
    }

    /// Whether the start comes strictly after the end.
    pub fn is_backward(&self) -> bool {
        self.start > self.end
    }

    /// Returns the exact time from the start to the end. This is negative
    /// when the end comes first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendar_units::{Instant, OffsetDateTime, TimePeriod};
    ///
    /// let start = OffsetDateTime::utc(Instant::at_us(1_577_881_530, 79_635));
    /// let end = OffsetDateTime::utc(Instant::at_us(1_577_881_532, 588_460));
    /// let period = TimePeriod::new(start, end);
    ///
    /// assert_eq!(period.distance().unwrap().in_seconds_precise_string(), "2.508825");
    /// assert_eq!(period.distance_backward().unwrap().in_seconds_precise_string(), "-2.508825");
    /// ```
    ///
    /// Points more than `i64::MAX` seconds apart have no duration between
    /// them, and return `Error::Overflow`.
    pub fn distance(&self) -> Result<Duration, Error> {
        self.end.instant().duration_since(self.start.instant())
    }

    /// Returns the exact time from the end back to the start. This is
    /// negative when the start comes first.
    pub fn distance_backward(&self) -> Result<Duration, Error> {
        self.start.instant().duration_since(self.end.instant())
    }

    /// Cuts this period into consecutive pieces of the given length, from
    /// the start onwards. A last piece shorter than the step covers whatever
    /// is left over.
    ///
    /// Only the size of the step matters, not its sign. A zero step is an
    /// error, and a period whose end doesn’t come after its start has
    /// nothing to cut up.
    pub fn iterate(&self, step: Duration) -> Result<TimePeriods, Error> {
        self.iterate_with(&Gregorian, step)
    }

    /// Cuts this period into pieces with the given calendar.
    pub fn iterate_with<C: Calendar>(&self, calendar: &C, step: Duration) -> Result<TimePeriods, Error> {
        let step = step.absolute();
        let points = calendar.enumerate(self.start, step, self.end)?;

        let mut periods = Vec::with_capacity(points.len());
        for point in points {
            let next = calendar.add_duration(point, step)?;
            let piece = Self::new(point, next.min(self.end));
            trace!("Partitioned {:?}", piece);
            periods.push(piece);
        }

        debug!("Partitioned {:?} into {} periods of {:?}", self, periods.len(), step);
        Ok(TimePeriods::new(periods))
    }

    /// Cuts this period into consecutive pieces of the given length, from
    /// the end backwards. Each piece starts at its later point and ends at
    /// its earlier one, and a last piece shorter than the step covers
    /// whatever is left over.
    ///
    /// Only the size of the step matters, not its sign. A zero step is an
    /// error, and a period whose end doesn’t come after its start has
    /// nothing to cut up.
    pub fn iterate_backward(&self, step: Duration) -> Result<TimePeriods, Error> {
        self.iterate_backward_with(&Gregorian, step)
    }

    /// Cuts this period into pieces backwards with the given calendar.
    pub fn iterate_backward_with<C: Calendar>(&self, calendar: &C, step: Duration) -> Result<TimePeriods, Error> {
        let step = step.absolute().invert();
        let points = calendar.enumerate(self.end, step, self.start)?;

        let mut periods = Vec::with_capacity(points.len());
        for point in points {
            let next = calendar.add_duration(point, step)?;
            let piece = Self::new(point, next.max(self.start));
            trace!("Partitioned {:?}", piece);
            periods.push(piece);
        }

        debug!("Partitioned {:?} backwards into {} periods of {:?}", self, periods.len(), step);
        Ok(TimePeriods::new(periods))
    }
}

impl fmt::Debug for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimePeriod({}/{})", self.start, self.end)
    }
}
