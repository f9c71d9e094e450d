use serde_json::{Value as JsonValue, json};
use std::fmt;

/// Computed metrics of one workout, ready to be shown to the athlete.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    /// Workout display name
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometres
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Spent kilocalories
    pub calories: f64,
}

impl InfoMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Unrounded metrics as a JSON object.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "training_type": self.training_type,
            "duration": self.duration,
            "distance": self.distance,
            "speed": self.speed,
            "calories": self.calories,
        })
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            sample().message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_message_rounds_to_three_places() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 0.5,
            distance: 1.23456,
            speed: 2.46912,
            calories: 3.7591,
        };
        assert_eq!(
            info.to_string(),
            "Тип тренировки: Running; Длительность: 0.500 ч.; Дистанция: 1.235 км; \
             Ср. скорость: 2.469 км/ч; Потрачено ккал: 3.759."
        );
    }

    #[test]
    fn test_to_json_keeps_raw_values() {
        let value = sample().to_json();

        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["distance"].as_f64(), Some(0.9936));
        assert_eq!(value["calories"].as_f64(), Some(336.0));
    }
}
