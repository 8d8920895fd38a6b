use crate::domain::{
    config::{CalcConfig, ConfigFile},
    error::{CalcError, CalcResult},
};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".minicalc";
const CONFIG_FILE: &str = "config.toml";

/// Configuration manager
pub struct ConfigManager {
    global_config_path: Option<PathBuf>,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create a manager for the user's home and the current directory
    pub fn new() -> Self {
        let project_config_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_config_path(&dir));

        Self::with_paths(Self::get_global_config_path(), project_config_path)
    }

    /// Create a manager with explicit file locations
    pub fn with_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> Self {
        Self {
            global_config_path: global,
            project_config_path: project,
        }
    }

    /// Load configuration from files.
    ///
    /// Defaults, then the global file, then the project file; later files only
    /// override the keys they set.
    pub fn load_config(&self) -> CalcResult<CalcConfig> {
        let mut config = CalcConfig::default();

        for path in self.config_files() {
            Self::apply_config_file(&mut config, path)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific path on top of the defaults
    pub fn load_config_from_path(&self, path: &Path) -> CalcResult<CalcConfig> {
        let mut config = CalcConfig::default();
        Self::apply_config_file(&mut config, path)?;
        Ok(config)
    }

    /// Existing config files that `load_config` reads, in merge order
    pub fn config_files(&self) -> Vec<&Path> {
        [&self.global_config_path, &self.project_config_path]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
            .filter(|path| path.exists())
            .collect()
    }

    /// Get global configuration path
    fn get_global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("minicalc").join(CONFIG_FILE))
    }

    /// Find project configuration path by walking up directory tree
    pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    fn apply_config_file(config: &mut CalcConfig, path: &Path) -> CalcResult<()> {
        let file = Self::read_config_file(path)?;
        config.global.merge(file.global).map_err(|e| match e {
            CalcError::Config { message } => CalcError::Config {
                message: format!("Invalid config file {}: {}", path.display(), message),
            },
            other => other,
        })
    }

    fn read_config_file(path: &Path) -> CalcResult<ConfigFile> {
        let content = fs::read_to_string(path).map_err(|e| CalcError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| CalcError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let config_dir = dir.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join(CONFIG_FILE);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_default_config() {
        let manager = ConfigManager::with_paths(None, None);
        let config = manager.load_config().unwrap();

        assert_eq!(config.global.log_level, "warn");
        assert_eq!(config.global.precision, 6);
        assert_eq!(config.global.output, OutputFormat::Text);
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_paths(
            Some(temp_dir.path().join("nope.toml")),
            Some(temp_dir.path().join("also-nope.toml")),
        );
        assert!(manager.load_config().is_ok());
    }

    #[test]
    fn test_project_overrides_global() {
        let global_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        let global = write_config(
            global_dir.path(),
            "[global]\noutput = \"json\"\nprecision = 2\n",
        );
        let project = write_config(project_dir.path(), "[global]\noutput = \"csv\"\n");

        let manager = ConfigManager::with_paths(Some(global), Some(project));
        let config = manager.load_config().unwrap();

        assert_eq!(config.global.output, OutputFormat::Csv);
        assert_eq!(config.global.precision, 2);
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_config(temp_dir.path(), "");
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(ConfigManager::find_project_config_path(&nested), Some(expected));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(temp_dir.path(), "[global]\nprecision = \"six\"\n");

        let manager = ConfigManager::with_paths(None, None);
        let err = manager.load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, CalcError::Config { .. }));
        assert_eq!(err.exit_code(false), 3);
    }

    #[test]
    fn test_config_files_lists_existing_only() {
        let temp_dir = TempDir::new().unwrap();
        let project = write_config(temp_dir.path(), "");
        let manager =
            ConfigManager::with_paths(Some(temp_dir.path().join("nope.toml")), Some(project.clone()));

        assert_eq!(manager.config_files(), vec![project.as_path()]);
    }

    #[test]
    fn test_out_of_range_precision_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(temp_dir.path(), "[global]\nprecision = 70000\n");

        let manager = ConfigManager::with_paths(None, Some(path.clone()));
        let err = manager.load_config().unwrap_err();
        assert_eq!(err.exit_code(false), 3);
        assert!(err.to_string().contains(&path.display().to_string()));
        assert!(err.to_string().contains("precision 70000"));
    }
}
