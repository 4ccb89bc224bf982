use crate::options::{EvaluationWindow, NoiseMode};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref RESULT_FILE_REGEX: Regex = Regex::new(
        r"^(?P<prefix>.+?)_(?P<noise>nonoise|samplednoise|fullnoise)_(?P<start>1hr_before|activity_start|activity_end)_(?P<end>activity_start|activity_end|[123]hr_after)\.(?P<ext>[A-Za-z0-9]+)$"
    )
    .unwrap();
}

/// File name of a result table: `<prefix>_<noise>_<eval_start>_<eval_end>.<ext>`.
pub fn result_file_name(prefix: &str, noise: NoiseMode, window: EvaluationWindow, extension: &str) -> String {
    format!(
        "{}_{}_{}_{}.{}",
        prefix,
        noise.as_str(),
        window.start.as_str(),
        window.end.as_str(),
        extension
    )
}

/// A result table found in the data location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFileName {
    pub file_name: String,
    pub prefix: String,
    pub noise: NoiseMode,
    pub eval_start: String,
    pub eval_end: String,
}

pub fn parse_result_file_name(file_name: &str) -> Option<ResultFileName> {
    let captures = RESULT_FILE_REGEX.captures(file_name)?;
    Some(ResultFileName {
        file_name: file_name.to_owned(),
        prefix: captures.name("prefix")?.as_str().to_owned(),
        noise: captures.name("noise")?.as_str().parse().ok()?,
        eval_start: captures.name("start")?.as_str().to_owned(),
        eval_end: captures.name("end")?.as_str().to_owned(),
    })
}
