use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Lamplight liveness server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(name = "lamplight", version, about = "File-presence liveness lamp over WebSocket")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "LAMPLIGHT_PORT", default_value = "8765")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "LAMPLIGHT_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// File whose presence drives the online/offline signal
    #[arg(long, env = "LAMPLIGHT_WATCH_PATH", default_value = "./hello.txt")]
    pub watch_path: PathBuf,

    /// Poll interval in seconds (fractional values allowed)
    #[arg(long, env = "LAMPLIGHT_POLL_INTERVAL_SECS", default_value = "0.5")]
    pub poll_interval_secs: f64,

    /// Path to TOML config file
    #[arg(long, default_value = "./lamplight.toml")]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "LAMPLIGHT_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8765,
            bind_address: "0.0.0.0".to_string(),
            watch_path: PathBuf::from("./hello.txt"),
            poll_interval_secs: 0.5,
            config: "./lamplight.toml".to_string(),
            json_logs: false,
            generate_config: false,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (LAMPLIGHT_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("LAMPLIGHT_"))
            .merge(Serialized::defaults(cli))
            .extract()?;

        if !config.poll_interval_secs.is_finite() || config.poll_interval_secs <= 0.0 {
            return Err(figment::Error::from(format!(
                "poll_interval_secs must be a positive number, got {}",
                config.poll_interval_secs
            )));
        }

        Ok(config)
    }

    /// Poll interval as a [`Duration`]. Valid because `load` rejects
    /// non-positive and non-finite values.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs_f64(self.poll_interval_secs)
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Lamplight Liveness Server Configuration
# Place this file at ./lamplight.toml or specify with --config <path>
# All settings can be overridden via environment variables (LAMPLIGHT_PORT, etc.)
# or CLI flags (--port, etc.)

# Server port (default: 8765)
# port = 8765

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# File whose presence drives the online/offline signal (default: ./hello.txt)
# watch_path = "/var/run/service/heartbeat"

# Poll interval in seconds; fractional values allowed (default: 0.5)
# poll_interval_secs = 0.5

# Enable structured JSON logging for Docker/production
# json_logs = false
"#
    .to_string()
}
