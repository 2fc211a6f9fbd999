use std::path::PathBuf;

use serde::Deserialize;

use crate::docker::{Endpoint, HubCredential, RegistryCredential, Stack};

pub const DEFAULT_BINARY_PATH: &str = "/usr/local/bin";

/// Contents of a `swarm-stack.yml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the docker binary.
    pub binary_path: PathBuf,
    pub endpoint: Endpoint,
    pub registries: Vec<RegistryCredential>,
    pub dockerhub: HubCredential,
    pub stack: Stack,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
            endpoint: Endpoint::default(),
            registries: Vec::new(),
            dockerhub: HubCredential::default(),
            stack: Stack::default(),
        }
    }
}
