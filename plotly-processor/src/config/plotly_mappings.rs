use activity_metrics_scenario_processor::overlays::OverlayKind;
use activity_metrics_scenario_processor::settings::AggregationSettings;
use activity_metrics_utils::json::{load_optional_json, JsonFileError};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

const SCATTER_PLOT_SETTINGS_FILE: &str = "scatter-plot-settings.json";
const AGGREGATION_SETTINGS_FILE: &str = "aggregation-settings.json";

#[derive(Debug)]
pub enum ConfigError {
    Json { file: String, source: JsonFileError },
    Invalid { file: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json { file, source } => write!(f, "Could not load {}: {}", file, source),
            ConfigError::Invalid { file, reason } => write!(f, "Invalid settings in {}: {}", file, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub symbol: String,
    pub color: String,
    pub size: u8,
}

impl MarkerStyle {
    fn new(symbol: &str, color: &str, size: u8) -> Self {
        Self { symbol: symbol.to_owned(), color: color.to_owned(), size }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyles {
    pub baseline: MarkerStyle,
    pub raised_target: MarkerStyle,
    pub preset_only: MarkerStyle,
    pub preset_and_raised_target: MarkerStyle,
}

impl OverlayStyles {
    pub fn for_kind(&self, kind: OverlayKind) -> &MarkerStyle {
        match kind {
            OverlayKind::Baseline => &self.baseline,
            OverlayKind::RaisedTarget => &self.raised_target,
            OverlayKind::PresetOnly => &self.preset_only,
            OverlayKind::PresetAndRaisedTarget => &self.preset_and_raised_target,
        }
    }
}

impl Default for OverlayStyles {
    fn default() -> Self {
        Self {
            baseline: MarkerStyle::new("diamond", "#A1BB97", 14),
            raised_target: MarkerStyle::new("diamond", "#E5CFA4", 14),
            preset_only: MarkerStyle::new("star", "#D4938B", 18),
            preset_and_raised_target: MarkerStyle::new("star", "pink", 18),
        }
    }
}

/// Styling of the scenario scatter plot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScatterPlotSettings {
    /// Evenly spaced RGB stops of the sequential scale the target colours are sampled from.
    pub color_scale: Vec<[f64; 3]>,
    pub target_color_sample_points: Vec<f64>,
    /// Lower bounds of the target-range buckets; deduplicated and sorted on use.
    pub target_mins: Vec<u32>,
    pub size_max: f64,
    pub opacity: f64,
    pub paper_background: String,
    pub font_family: String,
    pub font_color: String,
    pub title_font_size: u8,
    pub legend_title: String,
    pub legend_font_size: u8,
    pub overlays: OverlayStyles,
}

impl Default for ScatterPlotSettings {
    fn default() -> Self {
        Self {
            // Plotly "Blues"
            color_scale: vec![
                [247.0, 251.0, 255.0],
                [222.0, 235.0, 247.0],
                [198.0, 219.0, 239.0],
                [158.0, 202.0, 225.0],
                [107.0, 174.0, 214.0],
                [66.0, 146.0, 198.0],
                [33.0, 113.0, 181.0],
                [8.0, 81.0, 156.0],
                [8.0, 48.0, 107.0],
            ],
            target_color_sample_points: vec![0.25, 0.4, 0.6, 0.8, 1.0],
            target_mins: vec![100, 120, 140, 160, 150],
            size_max: 18.0,
            opacity: 0.75,
            paper_background: "#0F203A".to_owned(),
            font_family: "Basis Grotesque Pro".to_owned(),
            font_color: "white".to_owned(),
            title_font_size: 20,
            legend_title: "Key [Target]".to_owned(),
            legend_font_size: 16,
            overlays: OverlayStyles::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PlotlyConfig {
    pub scatter: ScatterPlotSettings,
    pub aggregation: AggregationSettings,
}

impl PlotlyConfig {
    /// Reads the settings files of `config_dir`; an absent file keeps the defaults.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let scatter = load_settings(config_dir, SCATTER_PLOT_SETTINGS_FILE)?.unwrap_or_default();
        let aggregation: AggregationSettings = load_settings(config_dir, AGGREGATION_SETTINGS_FILE)?.unwrap_or_default();
        aggregation
            .starting_glucose_distribution
            .distribution()
            .map_err(|reason| ConfigError::Invalid { file: AGGREGATION_SETTINGS_FILE.to_owned(), reason })?;
        Ok(PlotlyConfig { scatter, aggregation })
    }
}

fn load_settings<T: for<'de> Deserialize<'de>>(config_dir: &Path, file: &str) -> Result<Option<T>, ConfigError> {
    load_optional_json(config_dir.join(file)).map_err(|source| ConfigError::Json { file: file.to_owned(), source })
}
