pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod prompts;
pub mod bench;

pub use bench::Bench;
pub use client::GenerateClient;
pub use config::BenchConfig;
pub use error::Error;

/*

plansolve times a handful of fixed tasks against a local
Ollama-style inference server, comparing plain models with a
two-call "plan then solve" prompting strategy.

plansolve/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Shared types and re-exports
│   ├── main.rs         # Runs the benchmark once
│   ├── error.rs        # Error taxonomy for a call
│   ├── config.rs       # Endpoint, deadline, models
│   ├── request.rs      # /api/generate wire types
│   ├── client.rs       # Deadline-bounded generate call
│   ├── prompts.rs      # Planner/solver templates, task list
│   └── bench.rs        # Sequential strategy runner
└── tests/

*/

// ===== Generate =====

pub type GenerateReply = Result<String, crate::error::Error>;
pub type GenerateReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateReply>;

// ===== Benchmark structures =====

/// A fixed benchmark task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchTask
{   /// Text sent to the model
    pub prompt: &'static str
  , /// Known reference answer, if the task has one
    pub expected: Option<&'static str>
}

/// How a task is put to a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy
{   /// One call with the task as the prompt
    Direct
    {   model: String
    }
  , /// A planning call followed by a solving call
    PlanThenSolve
    {   model: String
    }
}

impl Strategy
{   pub fn model(&self) -> &str
    {   match self
        {   Strategy::Direct { model } => model
          , Strategy::PlanThenSolve { model } => model
        }
    }

    /// Name shown in the console output
    pub fn label(&self) -> String
    {   match self
        {   Strategy::Direct { model } => model.clone()
          , Strategy::PlanThenSolve { model } => {
              format!("{} with plan", model)
            }
        }
    }
}
