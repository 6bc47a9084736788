use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use faderdeck_net::queue::{DEFAULT_CAPACITY, DEFAULT_REPLY_TIMEOUT};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    network: NetworkConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct NetworkConfig {
    local_port: Option<u16>,
    remote_host: Option<String>,
    remote_port: Option<u16>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    refresh_ms: Option<u64>,
    queue_capacity: Option<usize>,
    reply_timeout_ms: Option<u64>,
}

pub struct Config {
    network: NetworkConfig,
    runtime: RuntimeConfig,
}

impl Config {
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::from_file(Self::embedded()),
        }
    }

    /// Load the embedded defaults with overrides from `path`, if it
    /// exists. Malformed override files are logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut base = Self::embedded();

        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                    Ok(user) => {
                        merge_network(&mut base.network, user.network);
                        merge_runtime(&mut base.runtime, user.runtime);
                    }
                    Err(e) => {
                        log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                    }
                },
                Err(e) => {
                    log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                }
            }
        }

        Self::from_file(base)
    }

    fn embedded() -> ConfigFile {
        toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml")
    }

    fn from_file(file: ConfigFile) -> Self {
        Config {
            network: file.network,
            runtime: file.runtime,
        }
    }

    /// Local bind address for the panel socket.
    pub fn local_addr(&self) -> String {
        format!("0.0.0.0:{}", self.network.local_port.unwrap_or(9001))
    }

    /// Remote mixer endpoint.
    pub fn remote_addr(&self) -> String {
        format!(
            "{}:{}",
            self.network.remote_host.as_deref().unwrap_or("127.0.0.1"),
            self.network.remote_port.unwrap_or(7001)
        )
    }

    /// Interval between channel re-selects (clamped to 10..10000 ms).
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.runtime.refresh_ms.unwrap_or(50).clamp(10, 10_000))
    }

    pub fn queue_capacity(&self) -> usize {
        self.runtime.queue_capacity.unwrap_or(DEFAULT_CAPACITY).max(1)
    }

    /// Echo watchdog deadline. None disables the watchdog.
    pub fn reply_timeout(&self) -> Option<Duration> {
        let default_ms = DEFAULT_REPLY_TIMEOUT.as_millis() as u64;
        match self.runtime.reply_timeout_ms.unwrap_or(default_ms) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("faderdeck").join("config.toml"))
}

fn merge_network(base: &mut NetworkConfig, user: NetworkConfig) {
    if user.local_port.is_some() {
        base.local_port = user.local_port;
    }
    if user.remote_host.is_some() {
        base.remote_host = user.remote_host;
    }
    if user.remote_port.is_some() {
        base.remote_port = user.remote_port;
    }
}

fn merge_runtime(base: &mut RuntimeConfig, user: RuntimeConfig) {
    if user.refresh_ms.is_some() {
        base.refresh_ms = user.refresh_ms;
    }
    if user.queue_capacity.is_some() {
        base.queue_capacity = user.queue_capacity;
    }
    if user.reply_timeout_ms.is_some() {
        base.reply_timeout_ms = user.reply_timeout_ms;
    }
}
