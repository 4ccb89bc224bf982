use crate::csv_reader::read_scenario_records;
use crate::data_source_name::{parse_result_file_name, result_file_name, ResultFileName};
use crate::input_sources::{create_reader, is_remote_location, join_location};
use crate::options::{EvaluationWindow, NoiseMode, NoiseSelection};
use crate::scenario_csv_row::ScenarioRecord;
use log::{debug, warn};
use std::fmt::{Display, Formatter};
use std::fs;

#[derive(Debug, PartialEq)]
pub enum LoadError {
    /// The result file could not be opened or downloaded.
    Unavailable { location: String, reason: String },
    MalformedRow { location: String, reason: String },
    /// Listing is only possible for local directories.
    ListingUnsupported { location: String },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Unavailable { location, reason } => write!(f, "Result file {} is unavailable: {}", location, reason),
            LoadError::MalformedRow { location, reason } => write!(f, "Malformed row in {}: {}", location, reason),
            LoadError::ListingUnsupported { location } => write!(f, "Cannot list result files at {}", location),
        }
    }
}

impl std::error::Error for LoadError {}

/// Location and naming convention of the precomputed result tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSource {
    /// Local directory or HTTP(S) base URL.
    pub location: String,
    pub prefix: String,
    pub extension: String,
}

impl Default for ScenarioSource {
    fn default() -> Self {
        Self {
            location: "./data".to_owned(),
            prefix: "03_13".to_owned(),
            extension: "csv".to_owned(),
        }
    }
}

impl ScenarioSource {
    pub fn new(location: impl Into<String>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn file_location(&self, noise: NoiseMode, window: EvaluationWindow) -> String {
        join_location(&self.location, &result_file_name(&self.prefix, noise, window, &self.extension))
    }

    /// Reads one result table. Any unreadable row fails the whole table.
    pub fn load_table(&self, noise: NoiseMode, window: EvaluationWindow) -> Result<Vec<ScenarioRecord>, LoadError> {
        let location = self.file_location(noise, window);
        debug!("Loading scenario records from {}", location);
        let reader = create_reader(&location).map_err(|reason| LoadError::Unavailable {
            location: location.clone(),
            reason,
        })?;
        let records = read_scenario_records(reader, noise)
            .collect::<Result<Vec<_>, String>>()
            .map_err(|reason| LoadError::MalformedRow { location: location.clone(), reason })?;
        if let Some(first) = records.first() {
            debug!("Read {} records from {}, first: {}", records.len(), location, first);
        }
        Ok(records)
    }

    /// Union of the tables selected by the noise dropdown, in
    /// `nonoise`, `samplednoise`, `fullnoise` order for "all".
    pub fn load(&self, noise: NoiseSelection, window: EvaluationWindow) -> Result<Vec<ScenarioRecord>, LoadError> {
        let mut records = Vec::new();
        for mode in noise.modes() {
            records.extend(self.load_table(mode, window)?);
        }
        Ok(records)
    }

    /// Result tables present in a local data directory, sorted by file name.
    pub fn list_result_files(&self) -> Result<Vec<ResultFileName>, LoadError> {
        if is_remote_location(&self.location) {
            return Err(LoadError::ListingUnsupported { location: self.location.clone() });
        }
        let entries = fs::read_dir(&self.location).map_err(|e| LoadError::Unavailable {
            location: self.location.clone(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match parse_result_file_name(file_name) {
                Some(parsed) if parsed.prefix == self.prefix => files.push(parsed),
                _ => warn!("Skipping {}: not a {}_* result file", file_name, self.prefix),
            }
        }
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }
}
