use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::Config;

pub const CONFIG_FILE_NAME: &str = "swarm-stack.yml";

/// Parse and validate a config document.
pub fn parse(contents: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(contents)?;
    if config.endpoint.url.trim().is_empty() {
        bail!("endpoint.url must be set");
    }
    Ok(config)
}

/// Load the config file at `path`.
pub fn load(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid config in {}", path.display()))
}

/// Load `swarm-stack.yml` from `dir`, or `None` if there is no such file.
pub fn load_from_dir(dir: &Path) -> Result<Option<Config>> {
    let path = default_path(dir);
    if !path.exists() {
        return Ok(None);
    }
    load(&path).map(Some)
}

pub fn default_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
