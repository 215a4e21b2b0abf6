//! Amount codec: major units <-> fixed-point wire amounts (10^18 scale).
//!
//! ```text
//! "0.5" ──to_wire──▶ 0x6f05b59d3b20000
//! 0xde0b6b3a7640000 ──from_wire_balance──▶ 1.0
//! ```
//!
//! Parsing goes through `f64`, so the two directions are inverse only up to
//! floating-point rounding and floor truncation at the 10^-18 boundary.

use std::fmt;

use serde::Serialize;

use super::constants::WEI_PER_UNIT;
use crate::error::{WalletError, WalletResult};

/// Hex-encoded wire amount with `0x` prefix, lowercase, no separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WireAmount(String);

impl WireAmount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WireAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a user-entered major-unit amount. Must be finite and > 0.
pub fn parse_amount(input: &str) -> WalletResult<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| WalletError::InvalidAmount(input.to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(WalletError::InvalidAmount(input.to_string()));
    }
    Ok(value)
}

pub fn to_wire(input: &str) -> WalletResult<WireAmount> {
    let value = parse_amount(input)?;
    let scaled = (value * WEI_PER_UNIT).floor();
    if scaled >= u128::MAX as f64 {
        return Err(WalletError::InvalidAmount(input.to_string()));
    }
    Ok(WireAmount(format!("0x{:x}", scaled as u128)))
}

pub fn from_wire_balance(hex_wei: &str) -> WalletResult<f64> {
    let digits = hex_wei
        .strip_prefix("0x")
        .or_else(|| hex_wei.strip_prefix("0X"))
        .unwrap_or(hex_wei);
    let wei = u128::from_str_radix(digits, 16)
        .map_err(|e| WalletError::ProviderCallFailed(format!("malformed balance {hex_wei:?}: {e}")))?;
    Ok(wei as f64 / WEI_PER_UNIT)
}

/// Six-decimal rendering used in balance messages.
pub fn format_units(value: f64) -> String {
    format!("{value:.6}")
}
