use std::path::{Component, Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;

const REDACTED: &str = "********";

/// TLS settings used to reach an endpoint. Empty paths mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub tls: bool,
    pub tls_skip_verify: bool,
    pub tls_ca_cert_path: String,
    pub tls_cert_path: String,
    pub tls_key_path: String,
}

/// A remote docker engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    pub url: String,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Endpoint {
    /// Plain (non-TLS) endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tls: TlsConfig::default(),
        }
    }
}

/// Credentials for a private registry.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryCredential {
    pub url: String,
    pub username: String,
    pub password: SecretString,
    #[serde(default)]
    pub authentication: bool,
}

impl RegistryCredential {
    /// Authenticated registry entry.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: SecretString::new(password.into()),
            authentication: true,
        }
    }
}

/// Credentials for the default public registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubCredential {
    pub username: String,
    pub password: SecretString,
    pub authentication: bool,
}

impl HubCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
            authentication: true,
        }
    }

    /// Hub entry with authentication turned off.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl Default for HubCredential {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: SecretString::new(String::new()),
            authentication: false,
        }
    }
}

/// A named stack whose compose file lives at `project_path/entry_point`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stack {
    pub name: String,
    pub project_path: PathBuf,
    pub entry_point: String,
}

impl Stack {
    /// `entry_point` below `project_path`. A root, drive prefix or `.` in the
    /// entry point is dropped, so an absolute entry point is still appended.
    pub fn compose_file(&self) -> PathBuf {
        let relative: PathBuf = Path::new(&self.entry_point)
            .components()
            .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
            .collect();
        self.project_path.join(relative)
    }
}

/// One invocation of the docker binary. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl DockerCommand {
    /// Shell-quoted command line with every `--password` value masked.
    pub fn redacted(&self) -> String {
        let mut words = Vec::with_capacity(self.args.len() + 1);
        words.push(self.program.to_string_lossy().into_owned());

        let mut mask_next = false;
        for arg in &self.args {
            if mask_next {
                words.push(REDACTED.to_string());
            } else {
                words.push(arg.clone());
            }
            mask_next = arg == "--password";
        }

        shell_words::join(words)
    }
}

/// What a runner observed from one child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    pub stderr: String,
}

impl RunOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stderr: stderr.into(),
        }
    }
}
