//! Runtime configuration from the environment (and `.env` via dotenv).

use crate::models::HostPolicy;
use std::error::Error;
use std::str::FromStr;

pub const ENV_HOST_POLICY: &str = "SUBNET_CALC_HOST_POLICY";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";
pub const ENV_PROMPT: &str = "SUBNET_CALC_PROMPT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_PROMPT: &str = "Subnet Calculator> ";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected text or json)"
            )),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub host_policy: HostPolicy,
    pub output: OutputFormat,
    pub color: bool,
    pub prompt: String,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host_policy: HostPolicy::default(),
            output: OutputFormat::default(),
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a [`Config`] from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_HOST_POLICY) {
            config.host_policy = value
                .parse()
                .map_err(|e| format!("{ENV_HOST_POLICY}: {e}"))?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = value.parse().map_err(|e| format!("{ENV_OUTPUT}: {e}"))?;
        }
        if let Some(value) = lookup(ENV_COLOR) {
            config.color = parse_bool(&value).map_err(|e| format!("{ENV_COLOR}: {e}"))?;
        }
        // https://no-color.org: any non-empty value disables colour
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        if let Some(value) = lookup(ENV_PROMPT) {
            config.prompt = value;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            config.log_config = value;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}
