//! Sensor package dispatch.
//!
//! A package is a short workout code plus readings in the order the matching
//! constructor declares them:
//!
//! - `SWM`: action, duration, weight, pool length, pool count
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height

use crate::dlog;
use crate::error::TrackerError;
use crate::training::{Running, SportsWalking, Swimming, Training};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Packages produced by the demo driver when no input is given.
pub const DEFAULT_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

type Build = fn(&str, &[f64]) -> Result<Box<dyn Training>, TrackerError>;

struct Constructor {
    arity: usize,
    build: Build,
}

static REGISTRY: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    HashMap::from([
        (
            "SWM",
            Constructor {
                arity: 5,
                build: build_swimming,
            },
        ),
        (
            "RUN",
            Constructor {
                arity: 3,
                build: build_running,
            },
        ),
        (
            "WLK",
            Constructor {
                arity: 4,
                build: build_walking,
            },
        ),
    ])
});

/// Build the workout matching `code` from its raw readings.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrackerError> {
    let Some(ctor) = REGISTRY.get(code) else {
        return Err(TrackerError::UnknownWorkoutType(code.to_string()));
    };

    if data.len() != ctor.arity {
        return Err(TrackerError::InvalidReadingCount {
            code: code.to_string(),
            expected: ctor.arity,
            got: data.len(),
        });
    }

    dlog!("read_package code={code} readings={data:?}");
    (ctor.build)(code, data)
}

/// Registered workout codes, sorted.
pub fn supported_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}

fn build_swimming(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrackerError> {
    Ok(Box::new(Swimming::new(
        whole(code, data, 0)?,
        data[1],
        data[2],
        whole(code, data, 3)?,
        whole(code, data, 4)?,
    )))
}

fn build_running(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrackerError> {
    Ok(Box::new(Running::new(whole(code, data, 0)?, data[1], data[2])))
}

fn build_walking(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrackerError> {
    Ok(Box::new(SportsWalking::new(
        whole(code, data, 0)?,
        data[1],
        data[2],
        whole(code, data, 3)?,
    )))
}

/// Reading at `index` as a count; rejects fractions, negatives and overflow.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(code: &str, data: &[f64], index: usize) -> Result<u32, TrackerError> {
    let value = data[index];
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidReading {
            code: code.to_string(),
            index,
            value,
        })
    }
}
