use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::inbound::console::MenuConfig;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub customer_id: i64,
    pub first_order_id: i64,
    pub max_input_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customer_id: 1,
            first_order_id: 1,
            max_input_attempts: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let max_input_attempts =
            parse_or(&lookup, "SHOP_MAX_INPUT_ATTEMPTS", defaults.max_input_attempts)?;
        if max_input_attempts == 0 {
            anyhow::bail!("SHOP_MAX_INPUT_ATTEMPTS must be at least 1");
        }
        let customer_id = parse_or(&lookup, "SHOP_CUSTOMER_ID", defaults.customer_id)?;
        if customer_id <= 0 {
            anyhow::bail!("SHOP_CUSTOMER_ID must be positive");
        }
        let first_order_id = parse_or(&lookup, "SHOP_FIRST_ORDER_ID", defaults.first_order_id)?;
        if first_order_id <= 0 {
            anyhow::bail!("SHOP_FIRST_ORDER_ID must be positive");
        }
        Ok(Self {
            customer_id,
            first_order_id,
            max_input_attempts,
        })
    }
}

impl From<&Config> for MenuConfig {
    fn from(c: &Config) -> Self {
        MenuConfig {
            customer_id: c.customer_id,
            first_order_id: c.first_order_id,
            max_input_attempts: c.max_input_attempts,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
