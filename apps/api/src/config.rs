use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port the simulator listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Default base URL clients talk to
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface the simulator binds to
    pub host: IpAddr,
    /// Port the simulator binds to
    pub port: u16,
    /// Base URL used by the client commands
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the `DEVTEAM_*` variables from the process environment
    ///
    /// The binary loads `.env` before calling this. Unset variables fall
    /// back to defaults; unparsable ones are reported and also fall back.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("DEVTEAM_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "DEVTEAM_HOST is not an IP address, using default");
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("DEVTEAM_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "DEVTEAM_PORT is not a port number, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let api_url = lookup("DEVTEAM_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_url);

        Self {
            host,
            port,
            api_url,
        }
    }

    /// Address the simulator binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
