//! # Application Configuration
//!
//! Settings are baked in at compile time through `option_env!`, the WASM
//! equivalent of a process environment. Everything has a default, so a plain
//! `trunk build` targets the injected wallet and the deployed contract.
//!
//! | Variable | Default |
//! |---|---|
//! | `USE_LOCAL_NETWORK` (alias `NEXT_PUBLIC_USE_LOCAL_NETWORK`) | `false` |
//! | `CONTRACT_ADDRESS` | [`DEFAULT_CONTRACT_ADDRESS`] |
//! | `LOCAL_RPC_URL` | [`DEFAULT_LOCAL_RPC_URL`] |
//! | `CONFIRMATION_POLL_MS` | `1000` |
//! | `CONFIRMATION_MAX_POLLS` | `120` |
//! | `LOG_LEVEL` | `info` |
//!
//! ## Global Config Access
//!
//! ```rust
//! use shared::config::{app_config, NetworkMode};
//!
//! let config = app_config();
//! if config.network_mode == NetworkMode::Local {
//!     println!("talking to {}", config.local_rpc_url);
//! }
//! ```

use std::sync::OnceLock;

use alloy_primitives::{address, Address};

use crate::error::ConfigError;

pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512");
pub const DEFAULT_LOCAL_RPC_URL: &str = "http://localhost:8545";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1_000;
pub const DEFAULT_MAX_POLLS: u32 = 120;

/// Which provider every operation talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkMode {
    /// Fixed local development node.
    Local,
    /// The wallet injected into the page (`window.ethereum`).
    Injected,
}

/// How long to wait for a submitted transaction to be mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub poll_interval_ms: u32,
    pub max_polls: u32,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub network_mode: NetworkMode,
    pub contract_address: Address,
    pub local_rpc_url: String,
    pub confirmation: ConfirmationPolicy,
    /// `log` level name handed to the logger at startup.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network_mode: NetworkMode::Injected,
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            local_rpc_url: DEFAULT_LOCAL_RPC_URL.to_string(),
            confirmation: ConfirmationPolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the variables captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "USE_LOCAL_NETWORK" => option_env!("USE_LOCAL_NETWORK"),
            "NEXT_PUBLIC_USE_LOCAL_NETWORK" => option_env!("NEXT_PUBLIC_USE_LOCAL_NETWORK"),
            "CONTRACT_ADDRESS" => option_env!("CONTRACT_ADDRESS"),
            "LOCAL_RPC_URL" => option_env!("LOCAL_RPC_URL"),
            "CONFIRMATION_POLL_MS" => option_env!("CONFIRMATION_POLL_MS"),
            "CONFIRMATION_MAX_POLLS" => option_env!("CONFIRMATION_MAX_POLLS"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            _ => None,
        })
    }

    /// Build from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let local = lookup("USE_LOCAL_NETWORK")
            .or_else(|| lookup("NEXT_PUBLIC_USE_LOCAL_NETWORK"))
            .map(|v| v.trim() == "true")
            .unwrap_or(false);

        let contract_address = match lookup("CONTRACT_ADDRESS") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidAddress {
                key: "CONTRACT_ADDRESS",
                value: value.to_string(),
            })?,
            None => defaults.contract_address,
        };

        let poll_interval_ms = parse_number(&lookup, "CONFIRMATION_POLL_MS", DEFAULT_POLL_INTERVAL_MS)?;
        let max_polls = parse_number(&lookup, "CONFIRMATION_MAX_POLLS", DEFAULT_MAX_POLLS)?;

        Ok(Self {
            network_mode: if local {
                NetworkMode::Local
            } else {
                NetworkMode::Injected
            },
            contract_address,
            local_rpc_url: lookup("LOCAL_RPC_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.local_rpc_url),
            confirmation: ConfirmationPolicy {
                poll_interval_ms,
                max_polls,
            },
            log_level: lookup("LOG_LEVEL")
                .map(|v| v.trim().to_ascii_lowercase())
                .unwrap_or(defaults.log_level),
        })
    }

    /// Reject values that would make every operation fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract_address == Address::ZERO {
            return Err(ConfigError::Invalid("CONTRACT_ADDRESS must not be the zero address".to_string()));
        }

        if !(self.local_rpc_url.starts_with("http://") || self.local_rpc_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "LOCAL_RPC_URL must be an http(s) URL, got {:?}",
                self.local_rpc_url
            )));
        }

        if self.confirmation.poll_interval_ms == 0 || self.confirmation.max_polls == 0 {
            return Err(ConfigError::Invalid(
                "CONFIRMATION_POLL_MS and CONFIRMATION_MAX_POLLS must be greater than zero".to_string(),
            ));
        }

        if log_level_filter(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(format!("LOG_LEVEL {:?} is not a log level", self.log_level)));
        }

        Ok(())
    }

    pub fn log_level_filter(&self) -> log::Level {
        log_level_filter(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_number<'a>(
    lookup: &impl Fn(&str) -> Option<&'a str>,
    key: &'static str,
    default: u32,
) -> Result<u32, ConfigError> {
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

fn log_level_filter(level: &str) -> Option<log::Level> {
    level.parse().ok()
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Initialize the global configuration from the build environment.
///
/// An invalid configuration is logged and replaced by the defaults so the
/// page still renders.
pub fn init_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        match AppConfig::from_build_env().and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[CONFIG] invalid build configuration, using defaults: {}", e);
                AppConfig::default()
            }
        }
    })
}

/// Global configuration; initializes on first use.
pub fn app_config() -> &'static AppConfig {
    init_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<&'a str> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key: &str| map.get(key).copied()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.network_mode, NetworkMode::Injected);
        assert_eq!(config.local_rpc_url, "http://localhost:8545");
        assert_eq!(
            config.contract_address.to_checksum(None),
            "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
        );
        assert_eq!(config.confirmation, ConfirmationPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_contract_address() {
        assert_eq!(AppConfig::default().contract_address, DEFAULT_CONTRACT_ADDRESS);
        assert_ne!(DEFAULT_CONTRACT_ADDRESS, Address::ZERO);
    }

    #[test]
    fn test_local_flag_and_alias() {
        let config = AppConfig::from_lookup(lookup_from(&[("USE_LOCAL_NETWORK", "true")])).unwrap();
        assert_eq!(config.network_mode, NetworkMode::Local);

        let config =
            AppConfig::from_lookup(lookup_from(&[("NEXT_PUBLIC_USE_LOCAL_NETWORK", "true")])).unwrap();
        assert_eq!(config.network_mode, NetworkMode::Local);

        let config = AppConfig::from_lookup(lookup_from(&[("USE_LOCAL_NETWORK", "1")])).unwrap();
        assert_eq!(config.network_mode, NetworkMode::Injected);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("CONTRACT_ADDRESS", "0x1234")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddress { key: "CONTRACT_ADDRESS", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("CONFIRMATION_POLL_MS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "CONFIRMATION_POLL_MS", .. }));
    }

    #[test]
    fn test_validate_rejects() {
        let mut config = AppConfig::default();
        config.local_rpc_url = "localhost:8545".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.confirmation.max_polls = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.contract_address = Address::ZERO;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.log_level = "chatty".to_string();
        assert!(config.validate().is_err());
    }
}
