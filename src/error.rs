use thiserror::Error;

/// Errors raised while turning a sensor package into a workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("invalid reading count for {code}: expected {expected}, got {got}")]
    InvalidReadingCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid reading {index} for {code}: expected a whole non-negative number, got {value}")]
    InvalidReading {
        code: String,
        index: usize,
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_error_display() {
        let err = TrackerError::UnknownWorkoutType("FOO".to_string());
        assert_eq!(err.to_string(), "unknown workout type: FOO");

        let err = TrackerError::InvalidReadingCount {
            code: "RUN".to_string(),
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "invalid reading count for RUN: expected 3, got 2"
        );

        let err = TrackerError::InvalidReading {
            code: "RUN".to_string(),
            index: 0,
            value: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid reading 0 for RUN: expected a whole non-negative number, got 1.5"
        );
    }
}
