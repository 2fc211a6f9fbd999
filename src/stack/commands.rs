use secrecy::ExposeSecret;

use crate::docker::{DockerCommand, HubCredential, RegistryCredential, Stack};

/// Append `login` for a private registry to the endpoint base command.
pub fn registry_login_command(base: &DockerCommand, registry: &RegistryCredential) -> DockerCommand {
    let mut cmd = base.clone();
    cmd.args.extend([
        "login".into(),
        "--username".into(),
        registry.username.clone(),
        "--password".into(),
        registry.password.expose_secret().clone(),
        registry.url.clone(),
    ]);
    cmd
}

/// Append `login` for the hub. No registry URL: docker defaults to the hub.
pub fn hub_login_command(base: &DockerCommand, hub: &HubCredential) -> DockerCommand {
    let mut cmd = base.clone();
    cmd.args.extend([
        "login".into(),
        "--username".into(),
        hub.username.clone(),
        "--password".into(),
        hub.password.expose_secret().clone(),
    ]);
    cmd
}

pub fn logout_command(base: &DockerCommand) -> DockerCommand {
    let mut cmd = base.clone();
    cmd.args.push("logout".into());
    cmd
}

/// `stack deploy` with registry auth forwarded to the swarm agents.
pub fn deploy_command(base: &DockerCommand, stack: &Stack) -> DockerCommand {
    let mut cmd = base.clone();
    cmd.args.extend([
        "stack".into(),
        "deploy".into(),
        "--with-registry-auth".into(),
        "--compose-file".into(),
        stack.compose_file().to_string_lossy().into_owned(),
        stack.name.clone(),
    ]);
    cmd
}

pub fn remove_command(base: &DockerCommand, stack: &Stack) -> DockerCommand {
    let mut cmd = base.clone();
    cmd.args.extend(["stack".into(), "rm".into(), stack.name.clone()]);
    cmd
}
