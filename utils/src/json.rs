use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::{fs, io};

#[derive(Debug)]
pub enum JsonFileError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl From<io::Error> for JsonFileError {
    fn from(err: io::Error) -> Self {
        JsonFileError::Io(err)
    }
}

impl From<serde_json::Error> for JsonFileError {
    fn from(err: serde_json::Error) -> Self {
        JsonFileError::Serde(err)
    }
}

impl Display for JsonFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonFileError::Io(e) => write!(f, "IO error: {}", e),
            JsonFileError::Serde(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for JsonFileError {}

/// Deserializes a whole JSON file into `T`.
pub fn load_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T, JsonFileError> {
    let content = fs::read_to_string(path.as_ref())?;
    let data = serde_json::from_str(&content)?;
    Ok(data)
}

/// Like [`load_json`] but a missing file yields `None` instead of an error.
pub fn load_optional_json<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<Option<T>, JsonFileError> {
    if !path.as_ref().exists() {
        return Ok(None);
    }
    load_json(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        fs::write(&path, r#"{"walking": 0.2}"#).unwrap();

        let presets: HashMap<String, f64> = load_json(&path).unwrap();
        assert_eq!(presets["walking"], 0.2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result: Result<HashMap<String, f64>, _> = load_json("no_such_file.json");
        assert!(matches!(result, Err(JsonFileError::Io(_))));
    }

    #[test]
    fn invalid_json_is_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let result: Result<HashMap<String, f64>, _> = load_json(&path);
        assert!(matches!(result, Err(JsonFileError::Serde(_))));
    }

    #[test]
    fn optional_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<HashMap<String, f64>> = load_optional_json(dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }
}
