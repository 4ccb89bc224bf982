use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Noise condition of a simulation result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseMode {
    NoNoise,
    SampledNoise,
    FullNoise,
}

impl NoiseMode {
    pub const ALL: [NoiseMode; 3] = [NoiseMode::NoNoise, NoiseMode::SampledNoise, NoiseMode::FullNoise];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseMode::NoNoise => "nonoise",
            NoiseMode::SampledNoise => "samplednoise",
            NoiseMode::FullNoise => "fullnoise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NoiseMode::NoNoise => "No Noise",
            NoiseMode::SampledNoise => "Uniformly Sampled Noise (Max 25%)",
            NoiseMode::FullNoise => "25% Noise",
        }
    }
}

impl FromStr for NoiseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoiseMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown noise mode: {:?}", s))
    }
}

impl Display for NoiseMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Noise dropdown value: one noise sub-dataset or the union of all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseSelection {
    All,
    Single(NoiseMode),
}

impl NoiseSelection {
    pub fn modes(&self) -> Vec<NoiseMode> {
        match self {
            NoiseSelection::All => NoiseMode::ALL.to_vec(),
            NoiseSelection::Single(mode) => vec![*mode],
        }
    }
}

impl FromStr for NoiseSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(NoiseSelection::All)
        } else {
            s.parse().map(NoiseSelection::Single)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationSelection {
    All,
    Minutes(u32),
}

impl DurationSelection {
    pub fn matches(&self, pa_duration: f64) -> bool {
        match self {
            DurationSelection::All => true,
            DurationSelection::Minutes(minutes) => pa_duration == *minutes as f64,
        }
    }
}

impl FromStr for DurationSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DurationSelection::All);
        }
        s.parse::<u32>()
            .map(DurationSelection::Minutes)
            .map_err(|_| format!("Invalid activity duration: {:?}", s))
    }
}

/// Where the evaluation window of the result metrics starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStart {
    OneHourBefore,
    ActivityStart,
    ActivityEnd,
}

impl EvaluationStart {
    pub const ALL: [EvaluationStart; 3] = [
        EvaluationStart::OneHourBefore,
        EvaluationStart::ActivityStart,
        EvaluationStart::ActivityEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStart::OneHourBefore => "1hr_before",
            EvaluationStart::ActivityStart => "activity_start",
            EvaluationStart::ActivityEnd => "activity_end",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EvaluationStart::OneHourBefore => "1Hr Before Activity",
            EvaluationStart::ActivityStart => "Activity Start Time",
            EvaluationStart::ActivityEnd => "Activity End Time",
        }
    }
}

impl FromStr for EvaluationStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvaluationStart::ALL
            .into_iter()
            .find(|start| start.as_str() == s)
            .ok_or_else(|| format!("Unknown evaluation start: {:?}", s))
    }
}

/// Where the evaluation window of the result metrics ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationEnd {
    ActivityStart,
    ActivityEnd,
    OneHourAfter,
    TwoHoursAfter,
    ThreeHoursAfter,
}

impl EvaluationEnd {
    pub const ALL: [EvaluationEnd; 5] = [
        EvaluationEnd::ActivityStart,
        EvaluationEnd::ActivityEnd,
        EvaluationEnd::OneHourAfter,
        EvaluationEnd::TwoHoursAfter,
        EvaluationEnd::ThreeHoursAfter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationEnd::ActivityStart => "activity_start",
            EvaluationEnd::ActivityEnd => "activity_end",
            EvaluationEnd::OneHourAfter => "1hr_after",
            EvaluationEnd::TwoHoursAfter => "2hr_after",
            EvaluationEnd::ThreeHoursAfter => "3hr_after",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EvaluationEnd::ActivityStart => "Activity Start Time",
            EvaluationEnd::ActivityEnd => "Activity End Time",
            EvaluationEnd::OneHourAfter => "1Hr After Activity",
            EvaluationEnd::TwoHoursAfter => "2Hr After Activity",
            EvaluationEnd::ThreeHoursAfter => "3Hr After Activity",
        }
    }
}

impl FromStr for EvaluationEnd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvaluationEnd::ALL
            .into_iter()
            .find(|end| end.as_str() == s)
            .ok_or_else(|| format!("Unknown evaluation end: {:?}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationWindow {
    pub start: EvaluationStart,
    pub end: EvaluationEnd,
}

impl Default for EvaluationWindow {
    fn default() -> Self {
        Self {
            start: EvaluationStart::ActivityStart,
            end: EvaluationEnd::ThreeHoursAfter,
        }
    }
}

/// Outcome metrics that can be put on the plot axes, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TimeInRange,
    TimeBelow54,
    TimeBelow70,
    TimeAbove180,
    Lbgi,
    Hbgi,
    Bgri,
    MagniRisk,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::TimeInRange,
        Metric::TimeBelow54,
        Metric::TimeBelow70,
        Metric::TimeAbove180,
        Metric::Lbgi,
        Metric::Hbgi,
        Metric::Bgri,
        Metric::MagniRisk,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::TimeInRange => "%TIR (70-180 mg/dl)",
            Metric::TimeBelow54 => "%TBR (<54 mg/dl)",
            Metric::TimeBelow70 => "%TBR (<70 mg/dl)",
            Metric::TimeAbove180 => "%TAR (>180 mg/dl)",
            Metric::Lbgi => "LBGI",
            Metric::Hbgi => "HBGI",
            Metric::Bgri => "BGRI",
            Metric::MagniRisk => "Magni Risk",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.column_name() == s)
            .ok_or_else(|| format!("Unknown metric: {:?}", s))
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Averaging {
    Weighted,
    Unweighted,
}

impl FromStr for Averaging {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weighted" => Ok(Averaging::Weighted),
            "Unweighted" => Ok(Averaging::Unweighted),
            _ => Err(format!("Unknown averaging mode: {:?}", s)),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Dropdown {
    pub label: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
}

/// Every dropdown of the dashboard with its options and default value.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub activity: Dropdown,
    pub duration: Dropdown,
    pub noise: Dropdown,
    pub max_netiob: Dropdown,
    pub min_glucose: Dropdown,
    pub max_glucose: Dropdown,
    pub eval_start: Dropdown,
    pub eval_end: Dropdown,
    pub y_metric: Dropdown,
    pub x_metric: Dropdown,
    pub averaging: Dropdown,
}

pub const ACTIVITIES: [(&str, &str); 4] = [
    ("Walking", "walking"),
    ("Biking", "biking"),
    ("Jogging", "jogging"),
    ("Strength Training", "strength training"),
];

pub const MAX_NETIOB_CHOICES: [u32; 4] = [0, 1, 2, 3];

pub fn glucose_choices() -> Vec<u32> {
    (70..260).step_by(20).collect()
}

fn numeric_options(values: impl IntoIterator<Item = u32>) -> Vec<DropdownOption> {
    values.into_iter().map(|v| DropdownOption::new(v.to_string(), v.to_string())).collect()
}

fn metric_options() -> Vec<DropdownOption> {
    Metric::ALL
        .iter()
        .map(|m| DropdownOption::new(m.column_name(), m.column_name()))
        .collect()
}

pub fn filter_options() -> FilterOptions {
    let noise_options = std::iter::once(DropdownOption::new("All", "all"))
        .chain(NoiseMode::ALL.iter().map(|m| DropdownOption::new(m.display_name(), m.as_str())))
        .collect();
    let window = EvaluationWindow::default();

    FilterOptions {
        activity: Dropdown {
            label: "Activity".to_owned(),
            options: ACTIVITIES.iter().map(|(l, v)| DropdownOption::new(*l, *v)).collect(),
            value: "walking".to_owned(),
        },
        duration: Dropdown {
            label: "Activity Duration (min)".to_owned(),
            options: vec![
                DropdownOption::new("30", "30"),
                DropdownOption::new("60", "60"),
                DropdownOption::new("All", "all"),
            ],
            value: "all".to_owned(),
        },
        noise: Dropdown { label: "Noise".to_owned(), options: noise_options, value: "all".to_owned() },
        max_netiob: Dropdown {
            label: "Max netIoB".to_owned(),
            options: numeric_options(MAX_NETIOB_CHOICES),
            value: "3".to_owned(),
        },
        min_glucose: Dropdown {
            label: "Min Starting Glucose".to_owned(),
            options: numeric_options(glucose_choices()),
            value: "70".to_owned(),
        },
        max_glucose: Dropdown {
            label: "Max Starting Glucose".to_owned(),
            options: numeric_options(glucose_choices()),
            value: "250".to_owned(),
        },
        eval_start: Dropdown {
            label: "Evaluation Start Time".to_owned(),
            options: EvaluationStart::ALL
                .iter()
                .map(|s| DropdownOption::new(s.display_name(), s.as_str()))
                .collect(),
            value: window.start.as_str().to_owned(),
        },
        eval_end: Dropdown {
            label: "Evaluation End Time".to_owned(),
            options: EvaluationEnd::ALL
                .iter()
                .map(|e| DropdownOption::new(e.display_name(), e.as_str()))
                .collect(),
            value: window.end.as_str().to_owned(),
        },
        y_metric: Dropdown {
            label: "Metric Y-Axis".to_owned(),
            options: metric_options(),
            value: Metric::TimeBelow70.column_name().to_owned(),
        },
        x_metric: Dropdown {
            label: "Metric X-Axis".to_owned(),
            options: metric_options(),
            value: Metric::TimeInRange.column_name().to_owned(),
        },
        averaging: Dropdown {
            label: "Averaging".to_owned(),
            options: vec![
                DropdownOption::new("Weighted", "Weighted"),
                DropdownOption::new("Unweighted", "Unweighted"),
            ],
            value: "Weighted".to_owned(),
        },
    }
}
