//! Engine configuration read from the environment.
//!
//! `from_env` loads an optional `.env` file first (via `dotenv`), then reads:
//! - `SUGANG_WANTED`: result cap used when a request does not set `wanted` (default 5)
//! - `SUGANG_STEP_BUDGET`: maximum search steps per request; unset or `0` means unlimited

use std::env;

use crate::algorithm::budget::StepBudget;
use crate::error::{EngineError, Result};

pub const DEFAULT_WANTED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_wanted: usize,
    pub step_budget: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_wanted: DEFAULT_WANTED,
            step_budget: None,
        }
    }
}

// load .env if present
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

fn parse_key<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| EngineError::Config {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (environment, map, ...).
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = EngineConfig::default();

        if let Some(raw) = get("SUGANG_WANTED") {
            let wanted: usize = parse_key("SUGANG_WANTED", &raw)?;
            if wanted == 0 {
                return Err(EngineError::Config {
                    key: "SUGANG_WANTED".to_string(),
                    value: raw,
                });
            }
            config.default_wanted = wanted;
        }

        if let Some(raw) = get("SUGANG_STEP_BUDGET") {
            let steps: u64 = parse_key("SUGANG_STEP_BUDGET", &raw)?;
            config.step_budget = (steps > 0).then_some(steps);
        }

        Ok(config)
    }

    /// Fresh budget for one request.
    pub fn budget(&self) -> StepBudget {
        match self.step_budget {
            Some(steps) => StepBudget::limited(steps),
            None => StepBudget::unlimited(),
        }
    }
}
