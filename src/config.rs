use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_SEED_PATH: &str = "data/rooms.json";

/// Server configuration read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `ROOMS_SEED_PATH`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("ROOMS_SEED_PATH").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, seed_path: Option<String>) -> Self {
        let bind_addr = match bind_addr {
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!(value = %value, error = %e, "Invalid BIND_ADDR, using default");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let seed_path = seed_path
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH));

        Self {
            bind_addr,
            seed_path,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}
