#![crate_name = "calendar_units"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Immutable calendar units, exact durations, and the periods between
//! points in time.
//!
//! # Examples
//!
//! ```
//! use calendar_units::{Duration, Instant, OffsetDateTime, TimePeriod, Year};
//!
//! let day = TimePeriod::new(
//!     OffsetDateTime::utc(Instant::at(1_577_836_800)),
//!     OffsetDateTime::utc(Instant::at(1_577_923_200)));
//!
//! assert_eq!(day.distance(), Ok(Duration::days(1)));
//! assert_eq!(day.iterate(Duration::hour()).unwrap().len(), 24);
//!
//! assert_eq!(Year(2020).until(Year(2025)).unwrap().len(), 5);
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
pub use crate::cal::engine::{Calendar, Gregorian};
pub use crate::cal::offset::{Offset, OffsetDateTime};
pub use crate::cal::units::{Year, YearMonth, MonthSpan, DaySpan};

mod decimal;
pub use crate::decimal::{Decimal, PRECISION};

mod duration;
pub use crate::duration::Duration;

mod error;
pub use crate::error::Error;

mod instant;
pub use crate::instant::Instant;

mod interval;
pub use crate::interval::CalendarInterval;

mod period;
pub use crate::period::TimePeriod;

mod sequence;
pub use crate::sequence::{Sequence, Years, Months, Days, TimePeriods};

mod system;
mod util;
