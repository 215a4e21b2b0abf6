//! Controller configuration - supplied by the surrounding application

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::constants::REFRESH_DELAY_MS;
use crate::error::ConfigError;

pub const ENV_CONTRACT_ADDRESS: &str = "FUNDME_CONTRACT_ADDRESS";
pub const ENV_OWNER_ADDRESS: &str = "FUNDME_OWNER_ADDRESS";
pub const ENV_REFRESH_DELAY_MS: &str = "FUNDME_REFRESH_DELAY_MS";

fn default_refresh_delay_ms() -> u64 { REFRESH_DELAY_MS }
fn default_wallet_name() -> String { "MetaMask".into() }
fn default_unit() -> String { "ETH".into() }

/// Immutable controller configuration. Higher layers construct this once at
/// startup; the controller never derives or persists these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    pub contract_address: String,
    pub owner_address: String,
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
    /// Shown in "not installed" messages
    #[serde(default = "default_wallet_name")]
    pub wallet_name: String,
    /// Currency symbol for major units
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl ControllerConfig {
    pub fn new(contract_address: impl Into<String>, owner_address: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            owner_address: owner_address.into(),
            refresh_delay_ms: default_refresh_delay_ms(),
            wallet_name: default_wallet_name(),
            unit: default_unit(),
        }
    }
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self { self.refresh_delay_ms = delay.as_millis() as u64; self }
    pub fn with_wallet_name(mut self, name: impl Into<String>) -> Self { self.wallet_name = name.into(); self }
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self { self.unit = unit.into(); self }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_address("contract address", &self.contract_address)?;
        check_address("owner address", &self.owner_address)?;
        Ok(())
    }

    /// Load from `FUNDME_*` environment variables.
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        let contract = std::env::var(ENV_CONTRACT_ADDRESS).map_err(|_| ConfigError::Missing(ENV_CONTRACT_ADDRESS))?;
        let owner = std::env::var(ENV_OWNER_ADDRESS).map_err(|_| ConfigError::Missing(ENV_OWNER_ADDRESS))?;
        let mut config = Self::new(contract, owner);
        if let Ok(raw) = std::env::var(ENV_REFRESH_DELAY_MS) {
            config.refresh_delay_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                field: ENV_REFRESH_DELAY_MS,
                value: raw.clone(),
            })?;
        }
        config.validate()?;
        Ok(config)
    }
}

fn check_address(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidAddress { field, value: value.to_string() };
    let digits = value.strip_prefix("0x").ok_or_else(invalid)?;
    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    if bytes.len() != 20 {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const OWNER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::new(CONTRACT, OWNER);
        assert_eq!(config.refresh_delay(), Duration::from_secs(2));
        assert_eq!(config.wallet_name, "MetaMask");
        assert_eq!(config.unit, "ETH");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_addresses() {
        let short = ControllerConfig::new("0x1234", OWNER);
        assert!(matches!(short.validate(), Err(ConfigError::InvalidAddress { field: "contract address", .. })));
        let unprefixed = ControllerConfig::new(CONTRACT, &OWNER[2..]);
        assert!(matches!(unprefixed.validate(), Err(ConfigError::InvalidAddress { field: "owner address", .. })));
        let not_hex = ControllerConfig::new(CONTRACT, "0xZZ9Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert!(not_hex.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: ControllerConfig = serde_json::from_value(serde_json::json!({
            "contractAddress": CONTRACT,
            "ownerAddress": OWNER,
            "refreshDelayMs": 500
        }))
        .unwrap();
        assert_eq!(config.refresh_delay_ms, 500);
        assert_eq!(config.unit, "ETH");
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        std::env::set_var(ENV_CONTRACT_ADDRESS, CONTRACT);
        std::env::set_var(ENV_OWNER_ADDRESS, OWNER);
        std::env::set_var(ENV_REFRESH_DELAY_MS, "750");
        let config = ControllerConfig::from_env().expect("config");
        assert_eq!(config.contract_address, CONTRACT);
        assert_eq!(config.refresh_delay(), Duration::from_millis(750));

        std::env::set_var(ENV_REFRESH_DELAY_MS, "soon");
        assert!(matches!(ControllerConfig::from_env(), Err(ConfigError::InvalidNumber { .. })));

        std::env::remove_var(ENV_OWNER_ADDRESS);
        assert_eq!(ControllerConfig::from_env(), Err(ConfigError::Missing(ENV_OWNER_ADDRESS)));
        std::env::remove_var(ENV_CONTRACT_ADDRESS);
        std::env::remove_var(ENV_REFRESH_DELAY_MS);
    }
}
