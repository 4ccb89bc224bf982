mod input_sources;
mod csv_reader;
pub mod aggregation;
pub mod data_source_name;
pub mod filter;
pub mod loader;
pub mod options;
pub mod overlays;
pub mod request;
pub mod scenario_csv_row;
pub mod settings;
pub mod weighting;

use crate::aggregation::{aggregate_scenarios, AggregatedGroup};
use crate::loader::{LoadError, ScenarioSource};
use crate::request::PlotRequest;
use crate::settings::AggregationSettings;
use log::info;

/// Loads the result tables selected by `request` and aggregates the
/// scenarios that pass its filters.
pub fn process(source: &ScenarioSource, request: &PlotRequest, settings: &AggregationSettings) -> Result<Vec<AggregatedGroup>, LoadError> {
    let records = source.load(request.noise, request.window)?;
    let groups = aggregate_scenarios(&records, &request.filter(settings), request.averaging, settings);
    let aggregated: usize = groups.iter().map(|group| group.record_count).sum();
    info!(
        "Aggregated {} of {} scenario records into {} groups for {}",
        aggregated,
        records.len(),
        groups.len(),
        request.activity
    );
    Ok(groups)
}
