//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "HVAC_API_BASE_URL";

const PROJECT_CONFIG_FILES: [&str; 2] = ["hvac.toml", ".hvac.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `HVAC_API_BASE_URL` environment variable
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./hvac.toml` or `./.hvac.toml`
    /// 4. Global: `<config_dir>/hvac-site/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }

        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }

        if let Some(path) = config_path {
            files.push(path.to_path_buf());
        }

        Self::figment(&files).extract().map_err(Box::new)
    }

    /// Load defaults and the environment only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(&[]).extract().map_err(Box::new)
    }

    /// Build the merged figment: defaults, then each file in order, then env
    fn figment(files: &[PathBuf]) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in files {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(
            Env::raw()
                .only(&[BASE_URL_ENV])
                .map(|_| "api.base_url".into()),
        )
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hvac-site").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if std::env::var_os(BASE_URL_ENV).is_some() {
            println!("  [FOUND] Env:      {}", BASE_URL_ENV);
        } else {
            println!("  [     ] Env:      {}", BASE_URL_ENV);
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./hvac.toml or ./.hvac.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}
