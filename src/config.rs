use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".translayerrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Canonical language root holding the application's base translations.
    #[serde(default = "default_lang_root")]
    pub lang_root: String,
    /// Root where edited translations are stored before promotion.
    #[serde(default = "default_override_root")]
    pub override_root: String,
    /// Locale whose base set stands in for locales without one.
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
}

fn default_lang_root() -> String {
    "./lang".to_string()
}

fn default_override_root() -> String {
    "./overrides".to_string()
}

fn default_fallback_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_root: default_lang_root(),
            override_root: default_override_root(),
            fallback_locale: default_fallback_locale(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.lang_root.trim().is_empty() {
            bail!("'langRoot' must not be empty");
        }
        if self.override_root.trim().is_empty() {
            bail!("'overrideRoot' must not be empty");
        }
        if self.fallback_locale.trim().is_empty() {
            bail!("'fallbackLocale' must not be empty");
        }
        // a shared root would make every save overwrite its own baseline
        if Path::new(&self.lang_root) == Path::new(&self.override_root) {
            bail!("'langRoot' and 'overrideRoot' must point to different directories");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
