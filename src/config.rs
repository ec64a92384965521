use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the launcher changes into before checking for the target.
    #[serde(default = "default_workdir")]
    pub workdir: String,

    /// Entry-point file expected inside the working directory.
    #[serde(default = "default_target")]
    pub target: String,

    /// Runner command line; the target filename is appended as the final
    /// argument (e.g. "streamlit run" becomes `streamlit run app_boss.py`).
    #[serde(default = "default_runner")]
    pub runner: String,

    /// Terminal window title, set best-effort at startup.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workdir: default_workdir(),
            target: default_target(),
            runner: default_runner(),
            title: default_title(),
        }
    }
}

fn default_workdir() -> String {
    ".".to_string()
}
fn default_target() -> String {
    "app_boss.py".to_string()
}
fn default_runner() -> String {
    "streamlit run".to_string()
}
fn default_title() -> String {
    "Estoque BOSS BLANC".to_string()
}

impl Config {
    /// Load configuration from an explicit path, or probe the default
    /// locations, falling back to compiled-in defaults.
    ///
    /// An explicit path that cannot be read or parsed is an error; a missing
    /// file at a probed default location is not.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content).context("Failed to parse config")
            }
            None => {
                for p in Self::default_paths() {
                    if let Ok(content) = std::fs::read_to_string(&p) {
                        return toml::from_str(&content)
                            .with_context(|| format!("Failed to parse config at {}", p));
                    }
                }
                Ok(Self::default())
            }
        }
    }

    fn default_paths() -> Vec<String> {
        let mut paths = vec!["estoque-launcher.toml".to_string()];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(
                config_dir
                    .join("estoque-launcher")
                    .join("config.toml")
                    .to_string_lossy()
                    .into_owned(),
            );
        }
        paths
    }
}
