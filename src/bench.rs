//! Sequential benchmark runner

use std::fmt;
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use crate::{BenchTask, Strategy};

/// Which call of a strategy an outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage
{   Answer
  , Plan
  , Final
}

/// Result of one generate call inside a strategy
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome
{   pub stage: Stage
  , pub model: String
  , pub result: crate::GenerateReply
}

impl fmt::Display for StageOutcome
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match (&self.result, self.stage)
        {   (Err(e), _) => {
              write!(f, "Error with {}: {}", self.model, e)
            }
          , (Ok(text), Stage::Answer) => {
              write!(f, "{} Response: {}", self.model, text)
            }
          , (Ok(text), Stage::Plan) => {
              write!(f, "{} PLAN Response: {}", self.model, text)
            }
          , (Ok(text), Stage::Final) => {
              write!(f, "{} FINAL Response: {}", self.model, text)
            }
        }
    }
}

/// Everything one strategy produced for one task
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport
{   pub label: String
  , pub stages: Vec<StageOutcome>
  , pub elapsed: Duration
}

impl StrategyReport
{   /// Text of the last stage, if every stage succeeded
    pub fn answer(&self) -> Option<&str>
    {   if self.stages.iter().any(|s| s.result.is_err())
        {   return None;
        }
        self.stages.last()
          .and_then(|s| s.result.as_deref().ok())
    }
}

/// Runs every strategy against every task, one call at a time
#[derive(Debug)]
pub struct Bench
{   client: crate::client::GenerateClient
  , temperature: f32
  , strategies: Vec<Strategy>
}

impl Bench
{   /// Bench with the default strategies: both models
    /// directly, then the plain model with a plan
    pub fn new(
      config: crate::config::BenchConfig
    ) -> Result<Self, crate::error::Error>
    {   let strategies = vec![
          Strategy::Direct
          {   model: config.plain_model.clone()
          }
        , Strategy::Direct
          {   model: config.reasoning_model.clone()
          }
        , Strategy::PlanThenSolve
          {   model: config.plain_model.clone()
          }
        ];
        Bench::with_strategies(config, strategies)
    }

    pub fn with_strategies(
      config: crate::config::BenchConfig
    , strategies: Vec<Strategy>
    ) -> Result<Self, crate::error::Error>
    {   config.validate()?;
        debug!(
          "Creating Bench with {} strategies",
          strategies.len()
        );
        Ok(Bench
        {   client: crate::client::GenerateClient::from_config(&config)
          , temperature: config.temperature
          , strategies
        })
    }

    pub fn strategies(&self) -> &[Strategy]
    {   &self.strategies
    }

    /// Run one strategy against one task and time it
    pub async fn run_strategy(
      &self
    , task: &str
    , strategy: &Strategy
    ) -> StrategyReport
    {   let label = strategy.label();
        let model = strategy.model();
        debug!("Running strategy: {}", label);
        let start = Instant::now();
        let mut stages = Vec::new();

        match strategy
        {   Strategy::Direct { .. } => {
              let result = self.client
                .generate(task, model, self.temperature)
                .await;
              stages.push(StageOutcome
              {   stage: Stage::Answer
                , model: model.to_string()
                , result
              });
            }
          , Strategy::PlanThenSolve { .. } => {
              let plan = self.client
                .generate(
                  &crate::prompts::planner_prompt(task),
                  model,
                  self.temperature
                )
                .await;
              let solve_prompt = plan.as_ref()
                .ok()
                .map(|p| crate::prompts::solver_prompt(p, task));
              stages.push(StageOutcome
              {   stage: Stage::Plan
                , model: model.to_string()
                , result: plan
              });

              match solve_prompt
              {   Some(prompt) => {
                    let result = self.client
                      .generate(&prompt, model, self.temperature)
                      .await;
                    stages.push(StageOutcome
                    {   stage: Stage::Final
                      , model: model.to_string()
                      , result
                    });
                  }
                , None => {
                    warn!("Plan failed for {}, skipping solve", model);
                  }
              }
            }
        }

        let elapsed = start.elapsed();
        for outcome in &stages
        {   if let Err(e) = &outcome.result
            {   warn!(
                  "{} failed ({}): {}",
                  outcome.model, e.kind(), e
                );
            }
        }
        info!("Strategy {} finished in {:?}", label, elapsed);

        StrategyReport
        {   label
          , stages
          , elapsed
        }
    }

    /// Run all strategies for one task, printing as it goes
    pub async fn run_task(
      &self
    , index: usize
    , task: &BenchTask
    ) -> Vec<StrategyReport>
    {   println!("\n\n ### TASK {} ### \n", index);
        if let Some(expected) = task.expected
        {   println!("Expected answer: {}\n", expected);
        }

        let mut reports = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies
        {   println!(
              "Starting: {} with model {}",
              task.prompt, strategy.label()
            );
            let report = self.run_strategy(task.prompt, strategy).await;
            for outcome in &report.stages
            {   println!("{}", outcome);
            }
            println!(
              "\nFinished in: {} s\n",
              report.elapsed.as_secs_f64()
            );
            reports.push(report);
        }
        reports
    }

    /// Run every task in order; failures never stop the run
    pub async fn run(
      &self
    , tasks: &[BenchTask]
    ) -> Vec<StrategyReport>
    {   info!("Running {} tasks", tasks.len());
        let mut reports = Vec::new();
        for (index, task) in tasks.iter().enumerate()
        {   reports.extend(self.run_task(index, task).await);
        }
        reports
    }
}
