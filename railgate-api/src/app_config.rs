use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub route: RouteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// The one route/fare policy every ticket is issued against.
#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    pub origin: String,
    pub destination: String,
    pub price: f64,
}

impl From<RouteConfig> for railgate_core::Route {
    fn from(cfg: RouteConfig) -> Self {
        Self {
            origin: cfg.origin,
            destination: cfg.destination,
            price: cfg.price,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of RAILGATE)
            .add_source(config::Environment::with_prefix("RAILGATE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
