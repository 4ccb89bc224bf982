use crate::config::plotly_mappings::{ConfigError, PlotlyConfig};
use once_cell::sync::OnceCell;
use std::io;
use std::path::Path;

static CONFIG: OnceCell<PlotlyConfig> = OnceCell::new();

fn read_config(config_dir: &Path) -> Result<&'static PlotlyConfig, ConfigError> {
    let config = PlotlyConfig::load(config_dir)?;
    Ok(CONFIG.get_or_init(|| config))
}

pub fn get_config() -> Option<&'static PlotlyConfig> {
    CONFIG.get()
}

/// Built-in settings, for when no configuration directory exists.
pub fn init_default_plot_config() -> &'static PlotlyConfig {
    CONFIG.get_or_init(PlotlyConfig::default)
}

/// Loads the plot configuration directory once per process.
pub fn init_plot_config(path_string: &str) -> Result<&'static PlotlyConfig, io::Error> {
    if let Some(config) = get_config() {
        return Ok(config);
    }
    let path = Path::new(path_string);
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Plot configuration directory {:?} does not exist", path),
        ));
    }
    read_config(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Error initializing plot-config at {:?}: {}", path, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_once() {
        let dir = tempfile::tempdir().unwrap();
        let first = init_plot_config(dir.path().to_str().unwrap()).unwrap();
        let second = init_plot_config("does/not/matter").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, init_default_plot_config()));
        assert!(get_config().is_some());
    }
}
