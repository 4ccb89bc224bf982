use crate::filter::ScenarioFilter;
use crate::options::{Averaging, DurationSelection, EvaluationWindow, Metric, NoiseSelection};
use crate::settings::AggregationSettings;

/// Every dropdown selection of one plot update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub activity: String,
    pub duration: DurationSelection,
    pub noise: NoiseSelection,
    pub max_net_iob: f64,
    pub min_glucose: f64,
    pub max_glucose: f64,
    pub window: EvaluationWindow,
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub averaging: Averaging,
}

impl Default for PlotRequest {
    fn default() -> Self {
        Self {
            activity: "walking".to_owned(),
            duration: DurationSelection::All,
            noise: NoiseSelection::All,
            max_net_iob: 3.0,
            min_glucose: 70.0,
            max_glucose: 250.0,
            window: EvaluationWindow::default(),
            x_metric: Metric::TimeInRange,
            y_metric: Metric::TimeBelow70,
            averaging: Averaging::Weighted,
        }
    }
}

impl PlotRequest {
    pub fn filter(&self, settings: &AggregationSettings) -> ScenarioFilter {
        ScenarioFilter {
            activity: self.activity.clone(),
            duration: self.duration,
            max_net_iob: self.max_net_iob,
            min_glucose: self.min_glucose,
            max_glucose: self.max_glucose,
            target_min_ceiling: settings.target_min_ceiling,
        }
    }

    pub fn title(&self) -> String {
        format!("{} vs {} for {}", self.y_metric, self.x_metric, self.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_title() {
        assert_eq!(
            PlotRequest::default().title(),
            "%TBR (<70 mg/dl) vs %TIR (70-180 mg/dl) for walking"
        );
    }

    #[test]
    fn filter_carries_settings_ceiling() {
        let settings = AggregationSettings { target_min_ceiling: 160.0, ..Default::default() };
        let filter = PlotRequest::default().filter(&settings);
        assert_eq!(filter.target_min_ceiling, 160.0);
        assert_eq!(filter.activity, "walking");
        assert_eq!(filter.max_glucose, 250.0);
    }
}
