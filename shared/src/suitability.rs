//! Hiking suitability classification
//!
//! Maps a weather snapshot to a three-level safety verdict with
//! human-readable reasons. The classifier is a pure function: no I/O, no
//! shared state, and it never fails. Callers that lack alert data must pass
//! an empty list rather than omit the field.

use serde::{Deserialize, Serialize};

use crate::models::Weather;

/// Weather thresholds for the verdict rules
pub mod thresholds {
    /// Celsius, below this is unsafe
    pub const TEMP_UNSAFE_LOW: f64 = -10.0;
    /// Celsius, above this is unsafe
    pub const TEMP_UNSAFE_HIGH: f64 = 40.0;
    /// Celsius, below this warrants caution
    pub const TEMP_CAUTION_LOW: f64 = 0.0;
    /// Celsius, above this warrants caution
    pub const TEMP_CAUTION_HIGH: f64 = 35.0;
    /// km/h, above this is unsafe
    pub const WIND_UNSAFE: f64 = 60.0;
    /// km/h, above this warrants caution
    pub const WIND_CAUTION: f64 = 40.0;
    /// Percent chance of rain, above this is unsafe
    pub const RAIN_UNSAFE: i32 = 60;
    /// Percent chance of rain, above this warrants caution
    pub const RAIN_CAUTION: i32 = 30;
}

/// Shown when no rule fires
pub const FAVORABLE_MESSAGE: &str = "Weather conditions are favorable for hiking";

/// Verdict tiers, ordered by severity so upgrade-only logic is a plain max
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityStatus {
    Good,
    Caution,
    Unsafe,
}

/// The hiking suitability verdict for one weather snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HikingSuitability {
    pub status: SuitabilityStatus,
    /// Non-empty; messages accumulate in rule evaluation order
    pub reasons: Vec<String>,
}

/// One threshold rule: when the predicate holds, raise the running status
/// to at least `severity` and record the message.
struct ThresholdRule {
    severity: SuitabilityStatus,
    applies: fn(&Weather) -> bool,
    message: &'static str,
}

/// Rule groups evaluated in order: temperature, wind, rain. Within a group
/// at most one rule fires (the first whose predicate holds), so the unsafe
/// branch shadows the caution branch of the same quantity.
const RULE_GROUPS: &[&[ThresholdRule]] = &[
    &[
        ThresholdRule {
            severity: SuitabilityStatus::Unsafe,
            applies: |w| w.temperature < thresholds::TEMP_UNSAFE_LOW,
            message: "Dangerously cold temperatures",
        },
        ThresholdRule {
            severity: SuitabilityStatus::Unsafe,
            applies: |w| w.temperature > thresholds::TEMP_UNSAFE_HIGH,
            message: "Dangerously hot temperatures",
        },
        ThresholdRule {
            severity: SuitabilityStatus::Caution,
            applies: |w| w.temperature < thresholds::TEMP_CAUTION_LOW,
            message: "Cold temperatures - dress warmly",
        },
        ThresholdRule {
            severity: SuitabilityStatus::Caution,
            applies: |w| w.temperature > thresholds::TEMP_CAUTION_HIGH,
            message: "Hot temperatures - stay hydrated",
        },
    ],
    &[
        ThresholdRule {
            severity: SuitabilityStatus::Unsafe,
            applies: |w| w.wind_speed > thresholds::WIND_UNSAFE,
            message: "Dangerous wind conditions",
        },
        ThresholdRule {
            severity: SuitabilityStatus::Caution,
            applies: |w| w.wind_speed > thresholds::WIND_CAUTION,
            message: "Strong winds expected",
        },
    ],
    &[
        ThresholdRule {
            severity: SuitabilityStatus::Unsafe,
            applies: |w| w.rain_probability > thresholds::RAIN_UNSAFE,
            message: "High chance of heavy rain",
        },
        ThresholdRule {
            severity: SuitabilityStatus::Caution,
            applies: |w| w.rain_probability > thresholds::RAIN_CAUTION,
            message: "Chance of rain - bring rain gear",
        },
    ],
];

/// Classify a weather snapshot into a hiking suitability verdict.
///
/// The status is the maximum severity across all triggered rules; reasons
/// accumulate from every triggered rule in evaluation order (temperature,
/// wind, rain, alerts). Out-of-range inputs are not rejected; they flow
/// through the same comparisons.
pub fn classify_suitability(weather: &Weather) -> HikingSuitability {
    let mut status = SuitabilityStatus::Good;
    let mut reasons: Vec<String> = Vec::new();

    for group in RULE_GROUPS {
        if let Some(rule) = group.iter().find(|rule| (rule.applies)(weather)) {
            status = status.max(rule.severity);
            reasons.push(rule.message.to_string());
        }
    }

    let dangerous: Vec<_> = weather
        .alerts
        .iter()
        .filter(|alert| alert.severity.is_dangerous())
        .collect();

    if !dangerous.is_empty() {
        // Severe or extreme alerts override everything
        status = SuitabilityStatus::Unsafe;
        reasons.extend(dangerous.iter().map(|alert| alert.message.clone()));
    } else if !weather.alerts.is_empty() {
        status = status.max(SuitabilityStatus::Caution);
        reasons.extend(weather.alerts.iter().map(|alert| alert.message.clone()));
    }

    if reasons.is_empty() {
        reasons.push(FAVORABLE_MESSAGE.to_string());
    }

    HikingSuitability { status, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherAlert;
    use crate::types::AlertSeverity;

    fn clear_weather() -> Weather {
        Weather {
            temperature: 25.0,
            feels_like: 25.0,
            humidity: 50,
            wind_speed: 10.0,
            rain_probability: 5,
            condition: "clear".to_string(),
            icon: "01d".to_string(),
            alerts: vec![],
        }
    }

    fn alert(severity: AlertSeverity, message: &str) -> WeatherAlert {
        WeatherAlert {
            kind: "storm".to_string(),
            severity,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_favorable_conditions() {
        let verdict = classify_suitability(&clear_weather());
        assert_eq!(verdict.status, SuitabilityStatus::Good);
        assert_eq!(verdict.reasons, vec![FAVORABLE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_dangerously_cold() {
        let weather = Weather {
            temperature: -15.0,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["Dangerously cold temperatures"]);
    }

    #[test]
    fn test_dangerously_hot() {
        let weather = Weather {
            temperature: 41.0,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["Dangerously hot temperatures"]);
    }

    #[test]
    fn test_cold_caution() {
        let weather = Weather {
            temperature: -5.0,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(verdict.reasons, vec!["Cold temperatures - dress warmly"]);
    }

    #[test]
    fn test_hot_caution() {
        let weather = Weather {
            temperature: 37.0,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(verdict.reasons, vec!["Hot temperatures - stay hydrated"]);
    }

    #[test]
    fn test_strong_winds() {
        let weather = Weather {
            temperature: 22.0,
            wind_speed: 45.0,
            rain_probability: 10,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(verdict.reasons, vec!["Strong winds expected"]);
    }

    #[test]
    fn test_dangerous_winds() {
        let weather = Weather {
            wind_speed: 65.0,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["Dangerous wind conditions"]);
    }

    #[test]
    fn test_rain_caution() {
        let weather = Weather {
            rain_probability: 45,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(verdict.reasons, vec!["Chance of rain - bring rain gear"]);
    }

    #[test]
    fn test_heavy_rain_unsafe() {
        let weather = Weather {
            rain_probability: 70,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["High chance of heavy rain"]);
    }

    #[test]
    fn test_caution_thresholds_are_strict() {
        // Values exactly at a caution threshold do not trigger the rule
        for (temperature, wind_speed, rain_probability) in
            [(0.0, 40.0, 30), (35.0, 40.0, 30), (0.0, 0.0, 30)]
        {
            let weather = Weather {
                temperature,
                wind_speed,
                rain_probability,
                ..clear_weather()
            };
            let verdict = classify_suitability(&weather);
            assert_eq!(verdict.status, SuitabilityStatus::Good);
            assert_eq!(verdict.reasons, vec![FAVORABLE_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn test_unsafe_thresholds_are_strict() {
        // Exactly at the unsafe boundary only the caution rule fires
        for weather in [
            Weather {
                temperature: -10.0,
                ..clear_weather()
            },
            Weather {
                temperature: 40.0,
                ..clear_weather()
            },
            Weather {
                wind_speed: 60.0,
                ..clear_weather()
            },
            Weather {
                rain_probability: 60,
                ..clear_weather()
            },
        ] {
            let verdict = classify_suitability(&weather);
            assert_eq!(verdict.status, SuitabilityStatus::Caution);
        }
    }

    #[test]
    fn test_severe_alert_overrides_everything() {
        let weather = Weather {
            temperature: 22.0,
            wind_speed: 5.0,
            rain_probability: 0,
            alerts: vec![alert(AlertSeverity::Severe, "Flash flood warning")],
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["Flash flood warning"]);
    }

    #[test]
    fn test_extreme_alert_forces_unsafe() {
        let weather = Weather {
            alerts: vec![alert(AlertSeverity::Extreme, "Typhoon approaching")],
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(verdict.reasons, vec!["Typhoon approaching"]);
    }

    #[test]
    fn test_minor_alerts_raise_caution_and_keep_order() {
        let weather = Weather {
            alerts: vec![
                alert(AlertSeverity::Minor, "Haze advisory"),
                alert(AlertSeverity::Moderate, "Thunderstorm watch"),
            ],
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(verdict.reasons, vec!["Haze advisory", "Thunderstorm watch"]);
    }

    #[test]
    fn test_dangerous_alerts_only_include_dangerous_messages() {
        let weather = Weather {
            alerts: vec![
                alert(AlertSeverity::Minor, "Haze advisory"),
                alert(AlertSeverity::Severe, "Flash flood warning"),
                alert(AlertSeverity::Extreme, "Typhoon approaching"),
            ],
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(
            verdict.reasons,
            vec!["Flash flood warning", "Typhoon approaching"]
        );
    }

    #[test]
    fn test_reasons_accumulate_in_check_order() {
        let weather = Weather {
            temperature: 37.0,
            rain_probability: 45,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Caution);
        assert_eq!(
            verdict.reasons,
            vec![
                "Hot temperatures - stay hydrated",
                "Chance of rain - bring rain gear"
            ]
        );
    }

    #[test]
    fn test_unsafe_not_downgraded_by_later_caution() {
        // Dangerous wind must stay unsafe even though rain only warrants caution
        let weather = Weather {
            wind_speed: 65.0,
            rain_probability: 45,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(
            verdict.reasons,
            vec!["Dangerous wind conditions", "Chance of rain - bring rain gear"]
        );
    }

    #[test]
    fn test_every_check_triggered() {
        let weather = Weather {
            temperature: 42.0,
            wind_speed: 65.0,
            rain_probability: 70,
            ..clear_weather()
        };
        let verdict = classify_suitability(&weather);
        assert_eq!(verdict.status, SuitabilityStatus::Unsafe);
        assert_eq!(
            verdict.reasons,
            vec![
                "Dangerously hot temperatures",
                "Dangerous wind conditions",
                "High chance of heavy rain"
            ]
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SuitabilityStatus::Unsafe).unwrap(),
            "\"unsafe\""
        );
        assert_eq!(
            serde_json::to_string(&SuitabilityStatus::Good).unwrap(),
            "\"good\""
        );
    }

    #[test]
    fn test_severity_ordering() {
        assert!(SuitabilityStatus::Good < SuitabilityStatus::Caution);
        assert!(SuitabilityStatus::Caution < SuitabilityStatus::Unsafe);
    }
}
