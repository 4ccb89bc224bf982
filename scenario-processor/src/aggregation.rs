use crate::filter::ScenarioFilter;
use crate::options::{Averaging, Metric};
use crate::scenario_csv_row::{format_bound, ScenarioRecord};
use crate::settings::AggregationSettings;
use log::warn;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const METRIC_COUNT: usize = Metric::ALL.len();

/// Width of a target range, used to derive the bucket label from its lower bound.
pub const TARGET_RANGE_WIDTH: f64 = 20.0;

/// A scenario record with its starting-glucose weight and display label attached.
#[derive(Debug, Clone)]
pub struct WeightedScenario<'a> {
    pub record: &'a ScenarioRecord,
    pub weight: f64,
    pub label: String,
}

pub fn enrich<'a>(records: &'a [ScenarioRecord], settings: &AggregationSettings) -> Vec<WeightedScenario<'a>> {
    records
        .iter()
        .map(|record| WeightedScenario {
            record,
            weight: settings.weight(record.starting_glucose),
            label: record.label(),
        })
        .collect()
}

#[derive(Debug, Clone)]
struct GroupKey {
    label: String,
    target_min: f64,
    preset: f64,
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label
            .cmp(&other.label)
            .then_with(|| self.target_min.total_cmp(&other.target_min))
            .then_with(|| self.preset.total_cmp(&other.preset))
    }
}

#[derive(Debug, Default)]
struct GroupAccumulator {
    count: usize,
    sums: [f64; METRIC_COUNT],
    weighted_sums: [f64; METRIC_COUNT],
    weight_total: f64,
}

impl GroupAccumulator {
    fn add(&mut self, scenario: &WeightedScenario) {
        self.count += 1;
        self.weight_total += scenario.weight;
        for metric in Metric::ALL {
            let value = scenario.record.metric(metric);
            self.sums[metric.index()] += value;
            self.weighted_sums[metric.index()] += value * scenario.weight;
        }
    }

    fn means(&self, averaging: Averaging) -> Option<[f64; METRIC_COUNT]> {
        let mut means = [0.0; METRIC_COUNT];
        match averaging {
            Averaging::Unweighted => {
                if self.count == 0 {
                    return None;
                }
                for (mean, sum) in means.iter_mut().zip(self.sums) {
                    *mean = sum / self.count as f64;
                }
            }
            Averaging::Weighted => {
                if self.weight_total == 0.0 {
                    return None;
                }
                for (mean, sum) in means.iter_mut().zip(self.weighted_sums) {
                    *mean = sum / self.weight_total;
                }
            }
        }
        Some(means)
    }
}

/// Mean metrics of every scenario sharing a (label, target, preset) key.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedGroup {
    pub label: String,
    pub target_min: f64,
    pub preset: f64,
    pub record_count: usize,
    metrics: [f64; METRIC_COUNT],
}

impl AggregatedGroup {
    pub fn metric(&self, metric: Metric) -> f64 {
        self.metrics[metric.index()]
    }

    /// Target bucket the group belongs to, e.g. `150-170`.
    pub fn target_label(&self) -> String {
        format!(
            "{}-{}",
            format_bound(self.target_min),
            format_bound(self.target_min + TARGET_RANGE_WIDTH)
        )
    }

    /// Marker size, proportional to the preset fraction.
    pub fn size(&self) -> f64 {
        self.preset * 100.0
    }
}

/// Groups the weighted scenarios by key and reduces every metric to its
/// (weighted) mean. Groups come out in ascending key order.
pub fn aggregate<'s, 'r: 's>(scenarios: impl IntoIterator<Item = &'s WeightedScenario<'r>>, averaging: Averaging) -> Vec<AggregatedGroup> {
    let mut groups: BTreeMap<GroupKey, GroupAccumulator> = BTreeMap::new();
    for scenario in scenarios {
        let key = GroupKey {
            label: scenario.label.clone(),
            target_min: scenario.record.target_min,
            preset: scenario.record.preset,
        };
        groups.entry(key).or_default().add(scenario);
    }

    groups
        .into_iter()
        .filter_map(|(key, accumulator)| match accumulator.means(averaging) {
            Some(metrics) => Some(AggregatedGroup {
                label: key.label,
                target_min: key.target_min,
                preset: key.preset,
                record_count: accumulator.count,
                metrics,
            }),
            None => {
                warn!("Dropping group {:?}: starting-glucose weights sum to zero", key.label);
                None
            }
        })
        .collect()
}

/// Weights every record, keeps those passing the filter and aggregates them.
pub fn aggregate_scenarios(
    records: &[ScenarioRecord],
    filter: &ScenarioFilter,
    averaging: Averaging,
    settings: &AggregationSettings,
) -> Vec<AggregatedGroup> {
    let weighted = enrich(records, settings);
    aggregate(weighted.iter().filter(|scenario| filter.matches(scenario.record)), averaging)
}
