//! The error type shared by every fallible operation in this crate.


/// Everything that can go wrong when building or combining calendar values.
///
/// The variants fall into three families: *validation* errors, where a value
/// was constructed with fields outside their allowed range; *conversion*
/// errors, where a value can’t be represented exactly as a fixed-length
/// duration; and *range* errors, where two calendar units were given in the
/// wrong order for a directional operation.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum Error {

    // Validation

    /// A duration was built with a negative number of whole seconds.
    #[error("seconds must be greater or equal 0, got {seconds}")]
    InvalidSeconds { seconds: i64 },

    /// A duration was built with a microsecond outside `0 .. 1_000_000`.
    #[error("microsecond must be greater or equal 0 and less than 1000000, got {microsecond}")]
    InvalidMicrosecond { microsecond: i64 },

    /// A period was asked to iterate with a zero-length step.
    #[error("iteration step must not be zero")]
    ZeroStep,

    /// A calendar field (month, day, hour, offset…) was out of range.
    #[error("calendar field out of range")]
    OutOfRange,

    // Conversion

    /// A calendar interval has a year or month component, and no total day
    /// count to pin it down to an exact number of seconds.
    #[error("can't convert {interval} precisely to a duration because {unit} can't be directly converted to number of seconds")]
    ImpreciseInterval { interval: String, unit: &'static str },

    /// A floating-point number was NaN or infinite.
    #[error("{value} is not a finite number of seconds")]
    NotFinite { value: f64 },

    /// A decimal string could not be read as a fixed-point number.
    #[error("malformed decimal {input:?}, expected a number with up to 6 decimals")]
    Malformed { input: String },

    /// A duration was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An exact result was too large to represent.
    #[error("arithmetic overflow")]
    Overflow,

    // Range

    /// `until` was called on a year that comes after its destination.
    #[error("{year} is after {destination}")]
    YearAfter { year: i64, destination: i64 },

    /// `since` was called on a year that comes before its destination.
    #[error("{year} is before {destination}")]
    YearBefore { year: i64, destination: i64 },

    // Parsing

    /// An ISO-8601 string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {

    /// Whether this error means a value was constructed with invalid fields.
    pub fn is_validation(&self) -> bool {
        matches!(*self, Error::InvalidSeconds { .. } | Error::InvalidMicrosecond { .. } | Error::ZeroStep | Error::OutOfRange)
    }

    /// Whether this error means a value has no exact fixed-length
    /// representation.
    pub fn is_conversion(&self) -> bool {
        matches!(*self, Error::ImpreciseInterval { .. } | Error::NotFinite { .. } | Error::Malformed { .. }
                      | Error::DivisionByZero | Error::Overflow)
    }

    /// Whether this error means two calendar units were in the wrong order.
    pub fn is_range(&self) -> bool {
        matches!(*self, Error::YearAfter { .. } | Error::YearBefore { .. })
    }
}


#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn year_after_message() {
        let error = Error::YearAfter { year: 2020, destination: 2019 };
        assert_eq!(error.to_string(), "2020 is after 2019");
        assert!(error.is_range());
    }

    #[test]
    fn year_before_message() {
        let error = Error::YearBefore { year: 2019, destination: 2020 };
        assert_eq!(error.to_string(), "2019 is before 2020");
    }

    #[test]
    fn families() {
        assert!(Error::ZeroStep.is_validation());
        assert!(Error::DivisionByZero.is_conversion());
        assert!(!Error::Overflow.is_range());
    }
}
