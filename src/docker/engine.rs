use std::path::Path;

use super::types::{DockerCommand, Endpoint};

/// Host family, as far as naming the docker binary is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// File name of the docker binary on `platform`.
pub fn binary_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "docker.exe",
        Platform::Unix => "docker",
    }
}

/// Build the docker executable path and the endpoint-selection arguments
/// (`-H` plus TLS flags) every operation starts from.
///
/// Pure argument assembly: neither the binary nor the certificate paths are
/// checked for existence.
pub fn prepare_command(
    binary_dir: &Path,
    platform: Platform,
    endpoint: &Endpoint,
) -> DockerCommand {
    let program = binary_dir.join(binary_name(platform));

    let mut args = vec!["-H".to_string(), endpoint.url.clone()];

    let tls = &endpoint.tls;
    if tls.tls {
        args.push("--tls".into());

        if !tls.tls_skip_verify {
            args.extend([
                "--tlsverify".into(),
                "--tlscacert".into(),
                tls.tls_ca_cert_path.clone(),
            ]);
        }

        if !tls.tls_cert_path.is_empty() && !tls.tls_key_path.is_empty() {
            args.extend([
                "--tlscert".into(),
                tls.tls_cert_path.clone(),
                "--tlskey".into(),
                tls.tls_key_path.clone(),
            ]);
        }
    }

    DockerCommand { program, args }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::docker::types::TlsConfig;

    fn tls_endpoint(tls: TlsConfig) -> Endpoint {
        Endpoint {
            url: "tcp://10.0.0.1:2376".into(),
            tls,
        }
    }

    #[test]
    fn binary_name_per_platform() {
        assert_eq!(binary_name(Platform::Windows), "docker.exe");
        assert_eq!(binary_name(Platform::Unix), "docker");
    }

    #[cfg(unix)]
    #[test]
    fn current_platform_is_unix() {
        assert_eq!(Platform::current(), Platform::Unix);
    }

    #[test]
    fn program_is_joined_under_binary_dir() {
        let endpoint = Endpoint::new("unix:///var/run/docker.sock");
        let cmd = prepare_command(Path::new("/opt/portal"), Platform::Unix, &endpoint);
        assert_eq!(cmd.program, PathBuf::from("/opt/portal/docker"));

        let cmd = prepare_command(Path::new("/opt/portal"), Platform::Windows, &endpoint);
        assert_eq!(cmd.program, PathBuf::from("/opt/portal/docker.exe"));
    }

    #[test]
    fn tls_disabled_yields_host_flag_only() {
        let endpoint = tls_endpoint(TlsConfig {
            tls: false,
            tls_skip_verify: false,
            tls_ca_cert_path: "/certs/ca.pem".into(),
            tls_cert_path: "/certs/cert.pem".into(),
            tls_key_path: "/certs/key.pem".into(),
        });
        let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
        assert_eq!(cmd.args, ["-H", "tcp://10.0.0.1:2376"]);
    }

    #[test]
    fn skip_verify_omits_verify_and_ca() {
        let endpoint = tls_endpoint(TlsConfig {
            tls: true,
            tls_skip_verify: true,
            tls_ca_cert_path: "/certs/ca.pem".into(),
            ..TlsConfig::default()
        });
        let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
        assert_eq!(cmd.args, ["-H", "tcp://10.0.0.1:2376", "--tls"]);
        assert!(!cmd.args.iter().any(|a| a == "--tlsverify" || a == "--tlscacert"));
    }

    #[test]
    fn verify_adds_ca_pair() {
        let endpoint = tls_endpoint(TlsConfig {
            tls: true,
            tls_ca_cert_path: "/certs/ca.pem".into(),
            ..TlsConfig::default()
        });
        let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
        assert_eq!(
            cmd.args,
            [
                "-H",
                "tcp://10.0.0.1:2376",
                "--tls",
                "--tlsverify",
                "--tlscacert",
                "/certs/ca.pem"
            ]
        );
    }

    #[test]
    fn client_cert_and_key_appended_when_both_set() {
        let endpoint = tls_endpoint(TlsConfig {
            tls: true,
            tls_skip_verify: false,
            tls_ca_cert_path: "/certs/ca.pem".into(),
            tls_cert_path: "/certs/cert.pem".into(),
            tls_key_path: "/certs/key.pem".into(),
        });
        let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
        assert_eq!(
            cmd.args,
            [
                "-H",
                "tcp://10.0.0.1:2376",
                "--tls",
                "--tlsverify",
                "--tlscacert",
                "/certs/ca.pem",
                "--tlscert",
                "/certs/cert.pem",
                "--tlskey",
                "/certs/key.pem"
            ]
        );
    }

    #[test]
    fn client_cert_without_key_is_ignored() {
        for (cert, key) in [("/certs/cert.pem", ""), ("", "/certs/key.pem")] {
            let endpoint = tls_endpoint(TlsConfig {
                tls: true,
                tls_skip_verify: true,
                tls_cert_path: cert.into(),
                tls_key_path: key.into(),
                ..TlsConfig::default()
            });
            let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
            assert!(!cmd.args.iter().any(|a| a == "--tlscert" || a == "--tlskey"));
        }
    }

    #[test]
    fn skip_verify_still_passes_client_cert() {
        let endpoint = tls_endpoint(TlsConfig {
            tls: true,
            tls_skip_verify: true,
            tls_cert_path: "/certs/cert.pem".into(),
            tls_key_path: "/certs/key.pem".into(),
            ..TlsConfig::default()
        });
        let cmd = prepare_command(Path::new("/bin"), Platform::Unix, &endpoint);
        assert_eq!(
            cmd.args,
            [
                "-H",
                "tcp://10.0.0.1:2376",
                "--tls",
                "--tlscert",
                "/certs/cert.pem",
                "--tlskey",
                "/certs/key.pem"
            ]
        );
    }
}
