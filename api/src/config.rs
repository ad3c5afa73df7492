use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Pre-populate the in-memory store with sample countries and persons
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            seed_data: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid BIND_ADDR, using default");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let seed_data = lookup("SEED_DATA")
            .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_data);

        Self {
            bind_addr,
            port,
            seed_data,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
