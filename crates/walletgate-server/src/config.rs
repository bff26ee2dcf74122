/*
[INPUT]:  Command-line flags and environment variables
[OUTPUT]: Validated server configuration
[POS]:    Configuration layer - server startup
[UPDATE]: When adding new configuration options
*/

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NONCE_TTL_SECS: u64 = 300;

/// Auth server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "walletgate-server", version, about = "Wallet sign-in nonce and signature server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "WALLETGATE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Seconds an issued nonce stays valid
    #[arg(long = "nonce-ttl", env = "WALLETGATE_NONCE_TTL", default_value_t = DEFAULT_NONCE_TTL_SECS)]
    pub nonce_ttl_secs: u64,

    /// Tracing filter directive (e.g. "info", "walletgate_server=debug")
    #[arg(long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn nonce_ttl(&self) -> Duration {
        Duration::from_secs(self.nonce_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["walletgate-server"]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.nonce_ttl(), crate::store::DEFAULT_NONCE_TTL);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "walletgate-server",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--log-level",
            "debug",
            "--nonce-ttl",
            "60",
        ])
        .unwrap();
        assert_eq!(config.nonce_ttl(), Duration::from_secs(60));
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["walletgate-server", "--port", "70000"]).is_err());
    }
}
