use std::path::{Path, PathBuf};

use tracing::info;

use crate::docker::{
    self, CommandRunner, DockerCommand, Endpoint, HubCredential, Platform, ProcessRunner,
    RegistryCredential, Stack,
};
use crate::error::Result;

use super::commands::{
    deploy_command, hub_login_command, logout_command, registry_login_command, remove_command,
};

/// Runs registry logins and swarm stack deploys through the docker CLI
/// installed under `binary_path`.
///
/// Every operation spawns its process(es) synchronously and stops at the
/// first failing invocation.
#[derive(Debug, Clone)]
pub struct StackManager<R = ProcessRunner> {
    binary_path: PathBuf,
    platform: Platform,
    runner: R,
}

impl StackManager<ProcessRunner> {
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self::with_runner(binary_path, ProcessRunner)
    }
}

impl<R: CommandRunner> StackManager<R> {
    pub fn with_runner(binary_path: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            binary_path: binary_path.into(),
            platform: Platform::current(),
            runner,
        }
    }

    /// Override the platform used to name the docker binary.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Log in to every authenticated registry in order, then to the hub if
    /// it is authenticated. The first failure skips everything after it.
    pub fn login(
        &self,
        hub: &HubCredential,
        registries: &[RegistryCredential],
        endpoint: &Endpoint,
    ) -> Result<()> {
        let base = self.base_command(endpoint);

        for registry in registries.iter().filter(|r| r.authentication) {
            info!(registry = %registry.url, endpoint = %endpoint.url, "logging in to registry");
            self.run(&registry_login_command(&base, registry))?;
        }

        if hub.authentication {
            info!(endpoint = %endpoint.url, "logging in to docker hub");
            self.run(&hub_login_command(&base, hub))?;
        }

        Ok(())
    }

    pub fn logout(&self, endpoint: &Endpoint) -> Result<()> {
        info!(endpoint = %endpoint.url, "logging out");
        self.run(&logout_command(&self.base_command(endpoint)))
    }

    pub fn deploy(&self, stack: &Stack, endpoint: &Endpoint) -> Result<()> {
        info!(
            stack = %stack.name,
            compose_file = %stack.compose_file().display(),
            endpoint = %endpoint.url,
            "deploying stack"
        );
        self.run(&deploy_command(&self.base_command(endpoint), stack))
    }

    pub fn remove(&self, stack: &Stack, endpoint: &Endpoint) -> Result<()> {
        info!(stack = %stack.name, endpoint = %endpoint.url, "removing stack");
        self.run(&remove_command(&self.base_command(endpoint), stack))
    }

    fn base_command(&self, endpoint: &Endpoint) -> DockerCommand {
        docker::prepare_command(&self.binary_path, self.platform, endpoint)
    }

    fn run(&self, cmd: &DockerCommand) -> Result<()> {
        docker::run_and_capture_stderr(&self.runner, cmd)
    }
}
