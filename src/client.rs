use std::time::Duration;
use tokio::sync::mpsc;
use log::{debug, trace, error, info};

/// Client for a single generate endpoint
///
/// Every call is raced against the configured deadline and
/// produces exactly one outcome. Nothing is shared between
/// calls: each one builds its own request and HTTP client.
#[derive(Debug, Clone)]
pub struct GenerateClient
{   endpoint: String
  , timeout: Duration
}

impl GenerateClient
{   pub fn new(endpoint: &str, timeout: Duration) -> Self
    {   debug!(
          "Creating GenerateClient for {} (timeout {:?})",
          endpoint, timeout
        );
        GenerateClient
        {   endpoint: endpoint.to_string()
          , timeout
        }
    }

    pub fn from_config(config: &crate::config::BenchConfig) -> Self
    {   GenerateClient::new(&config.endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    pub fn timeout(&self) -> Duration
    {   self.timeout
    }

    /// Generate a completion for `prompt` with `model`
    ///
    /// The HTTP exchange runs on its own task. If the deadline
    /// fires first that task is aborted and `Error::Timeout`
    /// is returned; a late reply is never observed.
    pub async fn generate(
      &self
    , prompt: &str
    , model: &str
    , temperature: f32
    ) -> crate::GenerateReply
    {   debug!("generate queued for model: {}", model);

        let request = crate::request::GenerateRequest::new(
          prompt, model, temperature
        );
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();
        let task = spawn_generate(
          self.endpoint.clone(), request, reply_tx
        );

        tokio::select!
        { reply = reply_rx.recv() => {
            match reply
            {   Some(result) => result
              , None => {
                  error!("Generate task ended without a reply");
                  Err("generate task ended without a reply".into())
                }
            }
          }
        , _ = tokio::time::sleep(self.timeout) => {
            info!(
              "Generate for {} timed out after {:?}",
              model, self.timeout
            );
            task.abort();
            Err(crate::error::Error::Timeout)
          }
        }
    }
}

/// Run the exchange on its own task, reply when done
fn spawn_generate(
  endpoint: String
, request: crate::request::GenerateRequest
, reply: crate::GenerateReplySender
) -> tokio::task::JoinHandle<()>
{   tokio::spawn(async move {
      let result = send_generate(&endpoint, &request).await;
      let _ = reply.send(result);
    })
}

/// One POST to the generate endpoint, start to finish
async fn send_generate(
  endpoint: &str
, request: &crate::request::GenerateRequest
) -> crate::GenerateReply
{   trace!("Generate request: {:?}", request);

    let body = serde_json::to_vec(request).map_err(|e| {
      error!("Encode error: {}", e);
      crate::error::Error::RequestEncoding(e.to_string())
    })?;

    let http_client = reqwest::Client::new();
    let response = http_client
      .post(endpoint)
      .header("Content-Type", "application/json")
      .body(body)
      .send()
      .await
      .map_err(|e| {
        error!("HTTP error: {}", e);
        crate::error::Error::Transport(
          crate::error::with_causes(&e)
        )
      })?;

    let status = response.status();
    trace!("Generate response status: {}", status);

    let bytes = response.bytes().await.map_err(|e| {
      error!("Read error: {}", e);
      crate::error::Error::Io(crate::error::with_causes(&e))
    })?;

    let generate_response: crate::request::GenerateResponse
      = serde_json::from_slice(&bytes).map_err(|e| {
        error!("Parse error: {}", e);
        crate::error::Error::Decoding(e.to_string())
      })?;

    if let Some(msg) = generate_response.reported_error()
    {   error!("Server reported error: {}", msg);
        return Err(crate::error::Error::ServerReported(
          msg.to_string()
        ));
    }

    debug!(
      "Generate for {} done={} ({} bytes)",
      generate_response.model,
      generate_response.done,
      generate_response.response.len()
    );
    Ok(generate_response.response)
}
