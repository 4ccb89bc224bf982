use crate::options::DurationSelection;
use crate::scenario_csv_row::ScenarioRecord;

/// Dropdown selections that decide which scenario records are aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioFilter {
    pub activity: String,
    pub duration: DurationSelection,
    pub max_net_iob: f64,
    pub min_glucose: f64,
    pub max_glucose: f64,
    /// Records whose target range starts at or above this bound are excluded
    /// regardless of the other selections.
    pub target_min_ceiling: f64,
}

impl ScenarioFilter {
    pub fn matches(&self, record: &ScenarioRecord) -> bool {
        record.activity == self.activity
            && record.net_iob <= self.max_net_iob
            && self.duration.matches(record.pa_duration)
            && record.starting_glucose >= self.min_glucose
            && record.starting_glucose <= self.max_glucose
            && record.target_min < self.target_min_ceiling
    }

    pub fn apply<'a>(&'a self, records: &'a [ScenarioRecord]) -> impl Iterator<Item = &'a ScenarioRecord> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}
