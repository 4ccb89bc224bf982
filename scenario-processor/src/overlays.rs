use crate::aggregation::AggregatedGroup;

pub const DEFAULT_TARGET: &str = "100-120";
pub const RAISED_TARGET: &str = "150-170";
pub const FULL_PRESET: f64 = 1.0;

/// Canonical reference scenarios highlighted on top of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// No intervention: default target, 100% preset.
    Baseline,
    RaisedTarget,
    /// Activity default preset at the default target.
    PresetOnly,
    PresetAndRaisedTarget,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::Baseline,
        OverlayKind::RaisedTarget,
        OverlayKind::PresetOnly,
        OverlayKind::PresetAndRaisedTarget,
    ];

    pub fn target_label(&self) -> &'static str {
        match self {
            OverlayKind::Baseline | OverlayKind::PresetOnly => DEFAULT_TARGET,
            OverlayKind::RaisedTarget | OverlayKind::PresetAndRaisedTarget => RAISED_TARGET,
        }
    }

    /// Preset the overlay matches, `None` when the activity has no default preset.
    pub fn preset(&self, activity_preset: Option<f64>) -> Option<f64> {
        match self {
            OverlayKind::Baseline | OverlayKind::RaisedTarget => Some(FULL_PRESET),
            OverlayKind::PresetOnly | OverlayKind::PresetAndRaisedTarget => activity_preset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<'a> {
    pub kind: OverlayKind,
    pub preset: Option<f64>,
    pub groups: Vec<&'a AggregatedGroup>,
}

impl<'a> Overlay<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Picks the four reference subsets out of the aggregated groups. A subset
/// with no matching group is returned empty.
pub fn select_overlays(groups: &[AggregatedGroup], activity_preset: Option<f64>) -> Vec<Overlay<'_>> {
    OverlayKind::ALL
        .into_iter()
        .map(|kind| {
            let preset = kind.preset(activity_preset);
            let matching = match preset {
                Some(preset) => groups
                    .iter()
                    .filter(|group| group.preset == preset && group.target_label() == kind.target_label())
                    .collect(),
                None => Vec::new(),
            };
            Overlay { kind, preset, groups: matching }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{aggregate, enrich};
    use crate::options::Averaging;
    use crate::scenario_csv_row::ScenarioRecord;
    use crate::settings::AggregationSettings;

    fn groups_for(keys: &[(f64, f64)]) -> Vec<AggregatedGroup> {
        let records: Vec<ScenarioRecord> = keys
            .iter()
            .map(|(target_min, preset)| ScenarioRecord {
                activity: "walking".to_owned(),
                starting_glucose: 120.0,
                target_min: *target_min,
                target_max: target_min + 20.0,
                preset: *preset,
                ..Default::default()
            })
            .collect();
        aggregate(&enrich(&records, &AggregationSettings::default()), Averaging::Weighted)
    }

    #[test]
    fn selects_all_four_reference_scenarios() {
        let groups = groups_for(&[(100.0, 1.0), (150.0, 1.0), (100.0, 0.2), (150.0, 0.2), (120.0, 0.2)]);
        let overlays = select_overlays(&groups, Some(0.2));

        assert_eq!(overlays.len(), 4);
        for overlay in &overlays {
            assert_eq!(overlay.groups.len(), 1, "{:?}", overlay.kind);
            assert_eq!(overlay.groups[0].target_label(), overlay.kind.target_label());
        }
        assert_eq!(overlays[2].groups[0].preset, 0.2);
    }

    #[test]
    fn missing_raised_target_gives_empty_overlay() {
        let groups = groups_for(&[(100.0, 1.0), (140.0, 1.0)]);
        let overlays = select_overlays(&groups, Some(0.2));

        assert_eq!(overlays[0].kind, OverlayKind::Baseline);
        assert_eq!(overlays[0].groups.len(), 1);
        assert_eq!(overlays[1].kind, OverlayKind::RaisedTarget);
        assert!(overlays[1].is_empty());
    }

    #[test]
    fn unknown_activity_preset_gives_empty_preset_overlays() {
        let groups = groups_for(&[(100.0, 1.0), (100.0, 0.2)]);
        let overlays = select_overlays(&groups, None);

        assert!(overlays[2].is_empty());
        assert!(overlays[3].is_empty());
        assert_eq!(overlays[2].preset, None);
    }

    #[test]
    fn no_groups_gives_four_empty_overlays() {
        let overlays = select_overlays(&[], Some(0.4));
        assert_eq!(overlays.len(), 4);
        assert!(overlays.iter().all(Overlay::is_empty));
    }
}
