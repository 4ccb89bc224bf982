use crate::options::{Metric, NoiseMode};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Activity name as it appears in some of the simulation result files.
const MISSPELLED_STRENGTH_TRAINING: &str = "rength training";
const STRENGTH_TRAINING: &str = "strength training";

pub const COLUMN_NAMES: [&str; 24] = [
    "sim_condition",
    "starting_glucose",
    "netIoB",
    "pa_duration",
    "activity",
    "preset",
    "target_min",
    "target_max",
    "vp_index",
    "noise_condition",
    "del_g",
    "LBGI",
    "HBGI",
    "BGRI",
    "%TBR (<54 mg/dl)",
    "%TBR (<54-<70 mg/dl)",
    "%TBR (<70 mg/dl)",
    "%TIR (70-180 mg/dl)",
    "%TAR (>180 mg/dl)",
    "%TAR (>180-<=250 mg/dl)",
    "%TAR (>=250 mg/dl)",
    "basal",
    "bolus",
    "Magni Risk",
];

/// One simulated run. The result files have no header row so fields are
/// deserialized by position, in the order of [`COLUMN_NAMES`].
#[derive(Default, Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioRecord {
    pub sim_condition: String,
    pub starting_glucose: f64,
    pub net_iob: f64,
    pub pa_duration: f64,
    pub activity: String,
    pub preset: f64,
    pub target_min: f64,
    pub target_max: f64,
    pub vp_index: String,
    pub noise_condition: String,
    pub del_g: f64,
    pub lbgi: f64,
    pub hbgi: f64,
    pub bgri: f64,
    pub tbr_below_54: f64,
    pub tbr_54_to_70: f64,
    pub tbr_below_70: f64,
    pub tir_70_to_180: f64,
    pub tar_above_180: f64,
    pub tar_180_to_250: f64,
    pub tar_above_250: f64,
    pub basal: f64,
    pub bolus: f64,
    pub magni_risk: f64,

    /// Noise sub-dataset the record was loaded from.
    #[serde(skip)]
    pub noise: Option<NoiseMode>,
}

impl Display for ScenarioRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScenarioRecord {{ sim_condition: {:?}, activity: {:?}, starting_glucose: {}, net_iob: {}, pa_duration: {}, preset: {}, target: {}-{}, noise: {:?} }}",
            self.sim_condition,
            self.activity,
            self.starting_glucose,
            self.net_iob,
            self.pa_duration,
            self.preset,
            self.target_min,
            self.target_max,
            self.noise
        )
    }
}

impl ScenarioRecord {
    pub fn post_deserialize(&mut self, noise: NoiseMode) {
        if self.activity == MISSPELLED_STRENGTH_TRAINING {
            self.activity = STRENGTH_TRAINING.to_owned();
        }
        self.noise = Some(noise);
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TimeInRange => self.tir_70_to_180,
            Metric::TimeBelow54 => self.tbr_below_54,
            Metric::TimeBelow70 => self.tbr_below_70,
            Metric::TimeAbove180 => self.tar_above_180,
            Metric::Lbgi => self.lbgi,
            Metric::Hbgi => self.hbgi,
            Metric::Bgri => self.bgri,
            Metric::MagniRisk => self.magni_risk,
        }
    }

    /// Display label of the scenario, e.g. `Target: 100-120\nPreset: 20%`.
    pub fn label(&self) -> String {
        format!(
            "Target: {}-{}\nPreset: {}%",
            format_bound(self.target_min),
            format_bound(self.target_max),
            preset_percent(self.preset)
        )
    }
}

/// Integral bounds print without a fractional part, the rest as-is.
pub fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Preset fraction as a whole percentage, truncated.
pub fn preset_percent(preset: f64) -> i64 {
    (preset * 100.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(activity: &str, target_min: f64, target_max: f64, preset: f64) -> ScenarioRecord {
        ScenarioRecord {
            activity: activity.to_owned(),
            target_min,
            target_max,
            preset,
            ..Default::default()
        }
    }

    #[test]
    fn fixes_misspelled_strength_training() {
        let mut row = record("rength training", 100.0, 120.0, 0.4);
        row.post_deserialize(NoiseMode::FullNoise);
        assert_eq!(row.activity, "strength training");
        assert_eq!(row.noise, Some(NoiseMode::FullNoise));
    }

    #[test]
    fn leaves_other_activities_alone() {
        let mut row = record("walking", 100.0, 120.0, 0.2);
        row.post_deserialize(NoiseMode::NoNoise);
        assert_eq!(row.activity, "walking");
    }

    #[test]
    fn label_uses_integral_bounds_and_truncated_percent() {
        assert_eq!(record("walking", 100.0, 120.0, 0.2).label(), "Target: 100-120\nPreset: 20%");
        assert_eq!(record("walking", 150.0, 170.0, 1.0).label(), "Target: 150-170\nPreset: 100%");
        assert_eq!(record("walking", 100.5, 120.0, 0.6).label(), "Target: 100.5-120\nPreset: 60%");
    }

    #[test]
    fn preset_percent_truncates() {
        assert_eq!(preset_percent(0.29), 28);
        assert_eq!(preset_percent(0.4), 40);
        assert_eq!(preset_percent(1.0), 100);
    }

    #[test]
    fn metric_lookup() {
        let row = ScenarioRecord { tir_70_to_180: 81.5, magni_risk: 3.2, ..Default::default() };
        assert_eq!(row.metric(Metric::TimeInRange), 81.5);
        assert_eq!(row.metric(Metric::MagniRisk), 3.2);
    }
}
