//! Workout model.
//!
//! Every workout kind shares the same raw readings (action count, duration,
//! athlete weight) and the same distance/speed defaults. Calorie formulas have
//! no default: each kind must supply its own, so a bare "training" cannot be
//! built or asked for calories.

use crate::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Step length in metres for running and walking.
pub const LEN_STEP_M: f64 = 0.65;

/// Readings common to every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// Steps for running and walking, strokes for swimming
    pub action: u32,
    /// Duration in hours, expected to be positive
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Readings {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

pub trait Training {
    /// Display name used in the summary line.
    fn training_type(&self) -> &'static str;

    fn readings(&self) -> &Readings;

    /// Length covered by one action, in metres.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.readings().action) * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_h
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.readings().duration_h,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub readings: Readings,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * r.weight_kg
            / M_IN_KM
            * r.duration_h
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub readings: Readings,
    pub height_cm: u32,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: u32) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        let height_m = f64::from(self.height_cm) / Self::CM_IN_M;
        (Self::CALORIES_WEIGHT_MULTIPLIER * r.weight_kg
            + speed_ms.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * r.weight_kg)
            * (r.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub readings: Readings,
    /// Pool length in metres
    pub length_pool: u32,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    /// Stroke length in metres.
    const LEN_STEP_M: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool: u32,
        count_pool: u32,
    ) -> Self {
        Self {
            readings: Readings::new(action, duration_h, weight_kg),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STEP_M
    }

    // Speed comes from pool geometry, not from the stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        f64::from(self.length_pool) * f64::from(self.count_pool)
            / M_IN_KM
            / self.readings.duration_h
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * r.weight_kg
            * r.duration_h
    }
}
