use crate::config::plotly_mappings::{MarkerStyle, ScatterPlotSettings};
use crate::line::Line;
use crate::scatter_plot_data::{Marker, MarkerSize, ScatterTrace};
use activity_metrics_scenario_processor::aggregation::AggregatedGroup;
use activity_metrics_scenario_processor::options::Metric;
use activity_metrics_scenario_processor::overlays::{Overlay, OverlayKind};
use activity_metrics_scenario_processor::scenario_csv_row::preset_percent;
use activity_metrics_utils::numbers::round_to;

const DISPLAY_DECIMALS: i32 = 2;

pub fn display_value(value: f64) -> f64 {
    round_to(value, DISPLAY_DECIMALS)
}

fn hover_label(group: &AggregatedGroup) -> Vec<String> {
    vec![group.label.replace('\n', "<br>")]
}

fn points(groups: &[&AggregatedGroup], x_metric: Metric, y_metric: Metric) -> (Vec<f64>, Vec<f64>, Vec<Vec<String>>) {
    let x = groups.iter().map(|g| display_value(g.metric(x_metric))).collect();
    let y = groups.iter().map(|g| display_value(g.metric(y_metric))).collect();
    let customdata = groups.iter().map(|g| hover_label(g)).collect();
    (x, y, customdata)
}

/// Marker area scale so that the largest preset renders at `size_max` pixels.
pub fn size_reference(max_size: f64, size_max: f64) -> f64 {
    if max_size > 0.0 && size_max > 0.0 {
        2.0 * max_size / (size_max * size_max)
    } else {
        1.0
    }
}

pub fn create_target_trace(
    target_label: &str,
    color: &str,
    groups: &[&AggregatedGroup],
    x_metric: Metric,
    y_metric: Metric,
    sizeref: f64,
    settings: &ScatterPlotSettings,
) -> ScatterTrace {
    let (x, y, customdata) = points(groups, x_metric, y_metric);
    ScatterTrace {
        x,
        y,
        name: target_label.to_owned(),
        legendgroup: Some(target_label.to_owned()),
        mode: "markers".to_owned(),
        series_type: "scatter".to_owned(),
        marker: Marker {
            color: color.to_owned(),
            size: MarkerSize::PerPoint(groups.iter().map(|g| display_value(g.size())).collect()),
            symbol: "circle".to_owned(),
            sizemode: Some("area".to_owned()),
            sizeref: Some(sizeref),
            opacity: Some(settings.opacity),
            line: None,
        },
        customdata,
        hovertemplate: format!(
            "{}=%{{x}}<br>{}=%{{y}}<br>label=%{{customdata[0]}}<extra></extra>",
            x_metric, y_metric
        ),
        showlegend: true,
    }
}

fn preset_description(preset: Option<f64>) -> String {
    match preset {
        Some(preset) => format!("{}%", preset_percent(preset)),
        None => "n/a".to_owned(),
    }
}

/// Legend entry of an overlay, with a `<sub>` description line.
pub fn overlay_name(kind: OverlayKind, preset: Option<f64>) -> String {
    match kind {
        OverlayKind::Baseline => "No Action<br><sub>Default target 100-120, Preset 100%</sub>".to_owned(),
        OverlayKind::RaisedTarget => "Raised Target<br><sub>Target 150-170, Preset 100%</sub>".to_owned(),
        OverlayKind::PresetOnly => format!(
            "Preset Only<br><sub>Default target 100-120, T1DEXI Preset {}</sub>",
            preset_description(preset)
        ),
        OverlayKind::PresetAndRaisedTarget => format!(
            "Preset + Raised Target<br><sub>Target 150-170, Preset {}</sub>",
            preset_description(preset)
        ),
    }
}

/// Highlight trace of a reference scenario. An empty overlay still gets its
/// legend entry.
pub fn create_overlay_trace(overlay: &Overlay, style: &MarkerStyle, x_metric: Metric, y_metric: Metric) -> ScatterTrace {
    let (x, y, customdata) = points(&overlay.groups, x_metric, y_metric);
    ScatterTrace {
        x,
        y,
        name: overlay_name(overlay.kind, overlay.preset),
        legendgroup: None,
        mode: "markers".to_owned(),
        series_type: "scatter".to_owned(),
        marker: Marker {
            color: style.color.clone(),
            size: MarkerSize::Fixed(style.size),
            symbol: style.symbol.clone(),
            sizemode: None,
            sizeref: None,
            opacity: None,
            line: Some(Line { width: Some(0), color: None }),
        },
        customdata,
        hovertemplate: format!(
            "{}: %{{x:.2f}}<br>{}: %{{y:.2f}}<br>%{{customdata[0]}}<extra></extra>",
            x_metric, y_metric
        ),
        showlegend: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_reference_matches_area_scaling() {
        assert_eq!(size_reference(100.0, 18.0), 200.0 / 324.0);
        assert_eq!(size_reference(0.0, 18.0), 1.0);
    }

    #[test]
    fn target_trace_hover_names_the_label() {
        let settings = ScatterPlotSettings::default();
        let trace = create_target_trace("100-120", "rgb(198, 219, 239)", &[], Metric::TimeInRange, Metric::Lbgi, 1.0, &settings);
        assert_eq!(
            trace.hovertemplate,
            "%TIR (70-180 mg/dl)=%{x}<br>LBGI=%{y}<br>label=%{customdata[0]}<extra></extra>"
        );
        assert_eq!(trace.legendgroup.as_deref(), Some("100-120"));
    }

    #[test]
    fn overlay_names() {
        assert_eq!(
            overlay_name(OverlayKind::PresetOnly, Some(0.4)),
            "Preset Only<br><sub>Default target 100-120, T1DEXI Preset 40%</sub>"
        );
        assert_eq!(
            overlay_name(OverlayKind::PresetAndRaisedTarget, None),
            "Preset + Raised Target<br><sub>Target 150-170, Preset n/a</sub>"
        );
    }

    #[test]
    fn empty_overlay_gives_empty_trace() {
        let overlay = Overlay { kind: OverlayKind::RaisedTarget, preset: Some(1.0), groups: Vec::new() };
        let style = MarkerStyle { symbol: "diamond".to_owned(), color: "#E5CFA4".to_owned(), size: 14 };
        let trace = create_overlay_trace(&overlay, &style, Metric::TimeInRange, Metric::TimeBelow70);

        assert!(trace.x.is_empty());
        assert!(trace.customdata.is_empty());
        assert_eq!(trace.marker.size, MarkerSize::Fixed(14));
        assert_eq!(
            trace.hovertemplate,
            "%TIR (70-180 mg/dl): %{x:.2f}<br>%TBR (<70 mg/dl): %{y:.2f}<br>%{customdata[0]}<extra></extra>"
        );
    }
}
