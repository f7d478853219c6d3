use std::fmt;

/// Error type for a single generate call and its configuration
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Request record could not be serialized
    RequestEncoding(String)
  , /// Connection refused, DNS failure and friends
    Transport(String)
  , /// Response body could not be read
    Io(String)
  , /// Response body was not a valid generate response
    Decoding(String)
  , /// Server answered with a non-empty `error` field
    ServerReported(String)
  , /// Deadline elapsed before the call finished
    Timeout
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Short name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str
    {   match self
        {   Error::RequestEncoding(_) => "request-encoding"
          , Error::Transport(_) => "transport"
          , Error::Io(_) => "io"
          , Error::Decoding(_) => "decoding"
          , Error::ServerReported(_) => "server-reported"
          , Error::Timeout => "timeout"
          , Error::InvalidConfiguration(_) => "invalid-configuration"
          , Error::Other(_) => "other"
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::RequestEncoding(msg) => {
              write!(f, "failed to encode request: {}", msg)
            }
          , Error::Transport(msg) => {
              write!(f, "failed to send request: {}", msg)
            }
          , Error::Io(msg) => {
              write!(f, "failed to read response: {}", msg)
            }
          , Error::Decoding(msg) => {
              write!(f, "failed to decode response: {}", msg)
            }
          , Error::ServerReported(msg) => {
              write!(f, "server error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "operation timed out")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

/// `err` followed by every cause its message does not already include
pub fn with_causes(err: &dyn std::error::Error) -> String
{   let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source
    {   let text = cause.to_string();
        if !msg.contains(&text)
        {   msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
