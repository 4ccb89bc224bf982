use crate::layout::Layout;
use crate::line::Line;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(u8),
    PerPoint(Vec<f64>),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub color: String,
    pub size: MarkerSize,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    pub mode: String,
    #[serde(rename = "type")]
    pub series_type: String,
    pub marker: Marker,
    /// One `[label]` entry per point.
    pub customdata: Vec<Vec<String>>,
    pub hovertemplate: String,
    pub showlegend: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScatterPlotData {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
}
