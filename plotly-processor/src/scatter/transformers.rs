use crate::config::plotly_mappings::PlotlyConfig;
use crate::layout::Layout;
use crate::scatter::builders::{create_overlay_trace, create_target_trace, size_reference};
use crate::scatter_plot_data::{ScatterPlotData, ScatterTrace};
use crate::target_colors::{target_color_map, FALLBACK_COLOR};
use activity_metrics_scenario_processor::aggregation::AggregatedGroup;
use activity_metrics_scenario_processor::overlays::select_overlays;
use activity_metrics_scenario_processor::request::PlotRequest;
use log::debug;

/// Groups per target bucket: configured buckets first in ascending order,
/// then any other target range found in the data.
fn group_by_target<'a>(groups: &'a [AggregatedGroup], color_map: &[(String, String)]) -> Vec<(String, String, Vec<&'a AggregatedGroup>)> {
    let mut buckets: Vec<(String, String, Vec<&AggregatedGroup>)> = color_map
        .iter()
        .map(|(label, color)| (label.clone(), color.clone(), Vec::new()))
        .collect();

    for group in groups {
        let label = group.target_label();
        match buckets.iter_mut().find(|(bucket, _, _)| *bucket == label) {
            Some((_, _, members)) => members.push(group),
            None => {
                debug!("Target range {} has no configured colour", label);
                buckets.push((label, FALLBACK_COLOR.to_owned(), vec![group]));
            }
        }
    }

    buckets.retain(|(_, _, members)| !members.is_empty());
    buckets
}

fn target_traces(config: &PlotlyConfig, request: &PlotRequest, groups: &[AggregatedGroup]) -> Vec<ScatterTrace> {
    let settings = &config.scatter;
    let color_map = target_color_map(&settings.target_mins, &settings.color_scale, &settings.target_color_sample_points);
    let max_size = groups.iter().map(AggregatedGroup::size).fold(0.0, f64::max);
    let sizeref = size_reference(max_size, settings.size_max);

    group_by_target(groups, &color_map)
        .into_iter()
        .map(|(label, color, members)| {
            create_target_trace(&label, &color, &members, request.x_metric, request.y_metric, sizeref, settings)
        })
        .collect()
}

fn overlay_traces(config: &PlotlyConfig, request: &PlotRequest, groups: &[AggregatedGroup]) -> Vec<ScatterTrace> {
    let activity_preset = config.aggregation.activity_preset(&request.activity);
    select_overlays(groups, activity_preset)
        .iter()
        .map(|overlay| {
            if overlay.is_empty() {
                debug!("No scenario matches the {:?} overlay", overlay.kind);
            }
            create_overlay_trace(overlay, config.scatter.overlays.for_kind(overlay.kind), request.x_metric, request.y_metric)
        })
        .collect()
}

/// Builds the complete figure for the aggregated groups of one request.
pub fn to_plotly_data(config: &PlotlyConfig, request: &PlotRequest, groups: &[AggregatedGroup]) -> ScatterPlotData {
    let mut data = target_traces(config, request, groups);
    data.extend(overlay_traces(config, request, groups));

    ScatterPlotData {
        data,
        layout: Layout::new(
            request.title(),
            request.x_metric.to_string(),
            request.y_metric.to_string(),
            &config.scatter,
        ),
    }
}
