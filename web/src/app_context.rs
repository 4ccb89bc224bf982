use activity_metrics_plotly_processor::config::plotly_mappings::PlotlyConfig;
use activity_metrics_plotly_processor::scatter::transformers::to_plotly_data;
use activity_metrics_plotly_processor::scatter_plot_data::ScatterPlotData;
use activity_metrics_scenario_processor::loader::{LoadError, ScenarioSource};
use activity_metrics_scenario_processor::process;
use activity_metrics_scenario_processor::request::PlotRequest;

#[derive(Clone)]
pub struct AppContext {
    pub source: ScenarioSource,
    pub plotly_config: &'static PlotlyConfig,
}

impl AppContext {
    /// Full recompute of one figure: load, filter, aggregate and build.
    pub fn plot(&self, request: &PlotRequest) -> Result<ScatterPlotData, LoadError> {
        let groups = process(&self.source, request, &self.plotly_config.aggregation)?;
        Ok(to_plotly_data(self.plotly_config, request, &groups))
    }
}
