//! Wire types for the `/api/generate` endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Sampling options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions
{   #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
}

impl GenerateOptions
{   /// A zero temperature is left out so the server default applies
    pub fn with_temperature(temperature: f32) -> Self
    {   GenerateOptions
        {   temperature: if temperature == 0.0
            {   None
            } else
            {   Some(temperature)
            }
        }
    }
}

/// Request body, built fresh for every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest
{   pub model: String
  , pub prompt: String
  , pub stream: bool
  , pub options: GenerateOptions
  , pub nostate: bool
}

impl GenerateRequest
{   /// Non-streaming, stateless request
    pub fn new(
      prompt: &str
    , model: &str
    , temperature: f32
    ) -> Self
    {   GenerateRequest
        {   model: model.to_string()
          , prompt: prompt.to_string()
          , stream: false
          , options: GenerateOptions::with_temperature(temperature)
          , nostate: true
        }
    }
}

/// Response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse
{   #[serde(default, deserialize_with = "null_as_empty")]
    pub model: String
  , #[serde(default, deserialize_with = "null_as_empty")]
    pub response: String
  , #[serde(default)]
    pub done: bool
  , #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>
}

impl GenerateResponse
{   /// The server's error message, if it sent a non-empty one
    pub fn reported_error(&self) -> Option<&str>
    {   self.error
          .as_deref()
          .filter(|msg| !msg.is_empty())
    }
}

/// Servers may send `null` where a string is expected
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{   Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
