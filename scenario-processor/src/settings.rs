use crate::weighting::LogNormal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Target-range lower bounds at or above this value are never plotted.
pub const DEFAULT_TARGET_MIN_CEILING: f64 = 180.0;

/// Numeric constants of the aggregation pipeline. Loaded from
/// `aggregation-settings.json` when present, otherwise [`Default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AggregationSettings {
    #[serde(rename = "startingGlucoseDistribution")]
    pub starting_glucose_distribution: LogNormal,
    /// Default preset fraction per activity (T1DEXI presets).
    #[serde(rename = "activityPresets")]
    pub activity_presets: HashMap<String, f64>,
    #[serde(rename = "targetMinCeiling", default = "default_target_min_ceiling")]
    pub target_min_ceiling: f64,
}

fn default_target_min_ceiling() -> f64 {
    DEFAULT_TARGET_MIN_CEILING
}

impl Default for AggregationSettings {
    fn default() -> Self {
        let activity_presets = [
            ("walking", 0.2),
            ("biking", 0.2),
            ("jogging", 0.2),
            ("strength training", 0.4),
        ]
        .into_iter()
        .map(|(activity, preset)| (activity.to_owned(), preset))
        .collect();

        Self {
            starting_glucose_distribution: LogNormal { mu: 4.93, sigma: 0.34 },
            activity_presets,
            target_min_ceiling: DEFAULT_TARGET_MIN_CEILING,
        }
    }
}

impl AggregationSettings {
    pub fn weight(&self, starting_glucose: f64) -> f64 {
        self.starting_glucose_distribution.pdf(starting_glucose)
    }

    pub fn activity_preset(&self, activity: &str) -> Option<f64> {
        self.activity_presets.get(activity).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presets() {
        let settings = AggregationSettings::default();
        assert_eq!(settings.activity_preset("walking"), Some(0.2));
        assert_eq!(settings.activity_preset("strength training"), Some(0.4));
        assert_eq!(settings.activity_preset("swimming"), None);
    }

    #[test]
    fn deserializes_without_ceiling() {
        let json = r#"{
            "startingGlucoseDistribution": {"mu": 5.0, "sigma": 0.3},
            "activityPresets": {"walking": 0.3}
        }"#;
        let settings: AggregationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.target_min_ceiling, 180.0);
        assert_eq!(settings.starting_glucose_distribution.mu, 5.0);
        assert_eq!(settings.activity_preset("walking"), Some(0.3));
    }
}
