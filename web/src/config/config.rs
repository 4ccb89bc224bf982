use activity_metrics_scenario_processor::loader::ScenarioSource;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory or base URL holding the result CSV files.
    pub data_source: String,
    pub file_prefix: String,
    pub file_extension: String,
    pub plot_config_path: String,
    pub static_path: String,
    pub bind_address: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        let source = ScenarioSource::default();
        Self {
            data_source: source.location,
            file_prefix: source.prefix,
            file_extension: source.extension,
            plot_config_path: "./plot-config".to_owned(),
            static_path: "./web/static".to_owned(),
            bind_address: "0.0.0.0".to_owned(),
            port: 8080,
        }
    }
}

impl AppConfig {
    pub fn scenario_source(&self) -> ScenarioSource {
        ScenarioSource::new(&self.data_source, &self.file_prefix, &self.file_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"dataSource": "/srv/results", "port": 9000}"#).unwrap();
        assert_eq!(config.data_source, "/srv/results");
        assert_eq!(config.port, 9000);
        assert_eq!(config.file_prefix, "03_13");
        assert_eq!(config.plot_config_path, "./plot-config");
    }

    #[test]
    fn builds_scenario_source() {
        let config = AppConfig {
            data_source: "https://example.org/results".to_owned(),
            file_prefix: "04_01".to_owned(),
            ..AppConfig::default()
        };
        let source = config.scenario_source();
        assert_eq!(source.location, "https://example.org/results");
        assert_eq!(source.prefix, "04_01");
        assert_eq!(source.extension, "csv");
    }
}
