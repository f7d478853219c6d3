//! Configuration for a benchmark run

use serde::{Deserialize, Serialize};
use std::time::Duration;
use log::{debug, error};

pub const DEFAULT_ENDPOINT: &str
  = "http://localhost:11434/api/generate";

/// Long generations on local hardware need the full budget
pub const DEFAULT_TIMEOUT_MS: u64 = 500_000;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_PLAIN_MODEL: &str = "llama3:8b";

pub const DEFAULT_REASONING_MODEL: &str = "deepseek-r1:8b";

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig
{   /// Full URL of the generate endpoint
    pub endpoint: String
  , /// Per-call deadline in milliseconds
    pub timeout_ms: u64
  , /// Sampling temperature sent with every call
    pub temperature: f32
  , /// Model used directly and for plan-then-solve
    pub plain_model: String
  , /// Model used directly only
    pub reasoning_model: String
}

impl BenchConfig
{   /// Per-call deadline as a Duration
    pub fn timeout(&self) -> Duration
    {   Duration::from_millis(self.timeout_ms)
    }

    /// Reject configurations no call could succeed with
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   debug!("Validating config: {:?}", self);
        let problem = if self.endpoint.trim().is_empty()
        {   Some("endpoint is empty")
        } else if self.timeout_ms == 0
        {   Some("timeout must be greater than zero")
        } else if self.plain_model.trim().is_empty()
        {   Some("plain model is empty")
        } else if self.reasoning_model.trim().is_empty()
        {   Some("reasoning model is empty")
        } else
        {   None
        };

        match problem
        {   Some(msg) => {
              error!("Invalid config: {}", msg);
              Err(crate::error::Error::InvalidConfiguration(
                msg.to_string()
              ))
            }
          , None => Ok(())
        }
    }
}

impl Default for BenchConfig
{   fn default() -> Self
    {   BenchConfig
        {   endpoint: DEFAULT_ENDPOINT.to_string()
          , timeout_ms: DEFAULT_TIMEOUT_MS
          , temperature: DEFAULT_TEMPERATURE
          , plain_model: DEFAULT_PLAIN_MODEL.to_string()
          , reasoning_model: DEFAULT_REASONING_MODEL.to_string()
        }
    }
}
