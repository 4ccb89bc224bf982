use std::env;
use std::error::Error;
use std::io;
use std::path::Path;

pub const CONFIG_FILE_ARG: &str = "--config-file=";
pub const CONFIG_ENV_VAR: &str = "ACTIVITY_METRICS_DASHBOARD_CONFIG";

fn not_found(message: String) -> Box<dyn Error> {
    Box::new(io::Error::new(io::ErrorKind::NotFound, message))
}

fn resolve_command_line_arg(args: &[String]) -> Result<String, Box<dyn Error>> {
    match args.iter().find_map(|arg| arg.strip_prefix(CONFIG_FILE_ARG)) {
        Some(path) if !path.is_empty() => resolve_path(path)
            .map_err(|_| not_found(format!("Invalid path set by \"--config-file\" argument: {:?}", path))),
        _ => Err(not_found("No \"--config-file\" argument provided or path is empty".to_owned())),
    }
}

fn resolve_environment_var() -> Result<String, Box<dyn Error>> {
    let env_path = env::var(CONFIG_ENV_VAR).map_err(|_| not_found(format!("Environment variable {} is not set", CONFIG_ENV_VAR)))?;
    resolve_path(&env_path).map_err(|_| not_found(format!("Invalid path set by {}: {:?}", CONFIG_ENV_VAR, env_path)))
}

/// Absolute form of an existing path; relative paths are taken from the
/// current directory.
pub fn resolve_path(path_string: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(path_string);
    let resolved_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    if !resolved_path.exists() {
        return Err(not_found(format!("Path does not exist {}", path_string)));
    }
    Ok(resolved_path.to_string_lossy().into_owned())
}

pub fn resolve_first_path(paths: &[&str]) -> Result<String, Box<dyn Error>> {
    paths
        .iter()
        .find_map(|path| resolve_path(path).ok())
        .ok_or_else(|| not_found(format!("No valid path found: {:#?}", paths)))
}

/// Command line argument first, then the environment variable, then the fallbacks.
pub fn resolve_config_file_path(cmd_args: &[String], fallback_paths: &[&str]) -> Result<String, Box<dyn Error>> {
    resolve_command_line_arg(cmd_args)
        .or_else(|_| resolve_environment_var())
        .or_else(|_| resolve_first_path(fallback_paths))
}


#[cfg(test)]
mod tests_lock {
    use lazy_static::lazy_static;
    use std::sync::{Mutex, MutexGuard};

    lazy_static! {
        static ref PROCESS_STATE: Mutex<()> = Mutex::new(());
    }

    /// Serializes tests touching the working directory or environment.
    pub fn lock() -> MutexGuard<'static, ()> {
        PROCESS_STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
