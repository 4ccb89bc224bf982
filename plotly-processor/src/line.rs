use serde::{Deserialize, Serialize};

/// Outline of a marker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
