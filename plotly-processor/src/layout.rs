use crate::config::plotly_mappings::ScatterPlotSettings;
use crate::font::Font;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: String,
    pub font: Font,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub legend: Legend,
    pub autosize: bool,
}

impl Layout {
    pub fn new(title: String, x_title: String, y_title: String, settings: &ScatterPlotSettings) -> Self {
        let white_font = |size: Option<u8>| Font {
            size,
            color: Some(settings.font_color.clone()),
            family: Some(settings.font_family.clone()),
        };

        Self {
            title: Title {
                text: title,
                font: Font { size: Some(settings.title_font_size), color: Some(settings.font_color.clone()), family: None },
            },
            paper_bgcolor: settings.paper_background.clone(),
            font: white_font(None),
            margin: Margin { t: 50.0, l: 50.0, r: 300.0, b: 50.0 },
            xaxis: Axis { title: AxisTitle { text: x_title } },
            yaxis: Axis { title: AxisTitle { text: y_title } },
            showlegend: true,
            legend: Legend {
                title: LegendTitle {
                    text: settings.legend_title.clone(),
                    font: white_font(Some(settings.legend_font_size)),
                },
                bordercolor: settings.font_color.clone(),
                borderwidth: 1,
                font: white_font(Some(settings.legend_font_size)),
                x: 1.05,
                y: 0.5,
                xanchor: "left".to_owned(),
                yanchor: "middle".to_owned(),
                tracegroupgap: 4,
            },
            autosize: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Margin {
    pub t: f64,
    pub l: f64,
    pub r: f64,
    pub b: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: LegendTitle,
    pub bordercolor: String,
    pub borderwidth: u8,
    pub font: Font,
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub tracegroupgap: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegendTitle {
    pub text: String,
    pub font: Font,
}
