use activity_metrics_scenario_processor::options::EvaluationWindow;
use activity_metrics_scenario_processor::request::PlotRequest;
use serde::Deserialize;
use std::str::FromStr;

/// Raw `/plot` query string. Absent parameters keep the dashboard defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PlotQuery {
    pub activity: Option<String>,
    pub duration: Option<String>,
    pub noise: Option<String>,
    pub max_netiob: Option<String>,
    pub min_glucose: Option<String>,
    pub max_glucose: Option<String>,
    pub eval_start: Option<String>,
    pub eval_end: Option<String>,
    pub x_metric: Option<String>,
    pub y_metric: Option<String>,
    pub averaging: Option<String>,
}

fn parse_or<T: FromStr>(value: &Option<String>, default: T, name: &str) -> Result<T, String> {
    match value {
        Some(raw) => raw.parse().map_err(|_| format!("Invalid value {:?} for parameter {}", raw, name)),
        None => Ok(default),
    }
}

fn parse_bound(value: &Option<String>, default: f64, name: &str) -> Result<f64, String> {
    let bound = parse_or(value, default, name)?;
    if bound.is_finite() {
        Ok(bound)
    } else {
        Err(format!("Parameter {} must be a finite number", name))
    }
}

impl PlotQuery {
    pub fn into_request(self) -> Result<PlotRequest, String> {
        let defaults = PlotRequest::default();
        let min_glucose = parse_bound(&self.min_glucose, defaults.min_glucose, "min_glucose")?;
        let max_glucose = parse_bound(&self.max_glucose, defaults.max_glucose, "max_glucose")?;

        Ok(PlotRequest {
            activity: self.activity.unwrap_or(defaults.activity),
            duration: parse_or(&self.duration, defaults.duration, "duration")?,
            noise: parse_or(&self.noise, defaults.noise, "noise")?,
            max_net_iob: parse_bound(&self.max_netiob, defaults.max_net_iob, "max_netiob")?,
            min_glucose,
            max_glucose,
            window: EvaluationWindow {
                start: parse_or(&self.eval_start, defaults.window.start, "eval_start")?,
                end: parse_or(&self.eval_end, defaults.window.end, "eval_end")?,
            },
            x_metric: parse_or(&self.x_metric, defaults.x_metric, "x_metric")?,
            y_metric: parse_or(&self.y_metric, defaults.y_metric, "y_metric")?,
            averaging: parse_or(&self.averaging, defaults.averaging, "averaging")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_metrics_scenario_processor::options::{
        Averaging, DurationSelection, EvaluationEnd, EvaluationStart, Metric, NoiseMode, NoiseSelection,
    };

    fn query(pairs: &[(&str, &str)]) -> PlotQuery {
        let object = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(object)).unwrap()
    }

    #[test]
    fn empty_query_gives_defaults() {
        assert_eq!(PlotQuery::default().into_request().unwrap(), PlotRequest::default());
    }

    #[test]
    fn parses_every_parameter() {
        let request = query(&[
            ("activity", "strength training"),
            ("duration", "60"),
            ("noise", "fullnoise"),
            ("max_netiob", "1"),
            ("min_glucose", "90"),
            ("max_glucose", "210"),
            ("eval_start", "1hr_before"),
            ("eval_end", "activity_end"),
            ("x_metric", "LBGI"),
            ("y_metric", "%TIR (70-180 mg/dl)"),
            ("averaging", "Unweighted"),
        ])
        .into_request()
        .unwrap();

        assert_eq!(request.activity, "strength training");
        assert_eq!(request.duration, DurationSelection::Minutes(60));
        assert_eq!(request.noise, NoiseSelection::Single(NoiseMode::FullNoise));
        assert_eq!(request.max_net_iob, 1.0);
        assert_eq!((request.min_glucose, request.max_glucose), (90.0, 210.0));
        assert_eq!(request.window.start, EvaluationStart::OneHourBefore);
        assert_eq!(request.window.end, EvaluationEnd::ActivityEnd);
        assert_eq!(request.x_metric, Metric::Lbgi);
        assert_eq!(request.y_metric, Metric::TimeInRange);
        assert_eq!(request.averaging, Averaging::Unweighted);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = query(&[("averaging", "median")]).into_request().unwrap_err();
        assert_eq!(err, "Invalid value \"median\" for parameter averaging");
        assert!(query(&[("min_glucose", "NaN")]).into_request().is_err());
        assert!(query(&[("duration", "45.5")]).into_request().is_err());
    }
}
