// Docker CLI plumbing: endpoint arguments, process execution and shared types.

pub mod engine;
pub mod run;
pub mod types;

pub use engine::{Platform, binary_name, prepare_command};
pub use run::{CommandRunner, ProcessRunner, run_and_capture_stderr};
pub use types::{
    DockerCommand, Endpoint, HubCredential, RegistryCredential, RunOutcome, Stack, TlsConfig,
};
