//! Prompt templates and the fixed task list

use crate::BenchTask;

pub const PLANNER_PROMPT: &str = "You are an extremely smart planner.
Do not solve the task provided,
instead list all steps that are needed in detail to get to the correct solution.";

pub const SOLVER_PROMPT: &str = "You are a genius solver and critical thinker.
Solve the task by using the thinking steps above, but question them critically, respond only with the correct answer.";

pub const TASKS: [BenchTask; 4] = [
  BenchTask
  {   prompt: "What is the smallest integer whose square is between 15 and 30?"
    , expected: Some("-5")
  }
, BenchTask
  {   prompt: "If we lay 5 shirts out in the sun and it takes 4 hours to dry, how long would 20 shirts take to dry if there is enough space?"
    , expected: Some("4 hours")
  }
, BenchTask
  {   prompt: "How many times does the letter R appear in the word \"strawberry\"?"
    , expected: Some("3")
  }
, BenchTask
  {   prompt: "Explain classes in python using the example of cars. Show a code example with it!"
    , expected: None
  }
];

/// First stage: ask for a plan only
pub fn planner_prompt(task: &str) -> String
{   format!("{} \n {}", PLANNER_PROMPT, task)
}

/// Second stage: solve the task with the plan in front of it
pub fn solver_prompt(plan: &str, task: &str) -> String
{   format!(
      "{} \n This is the Plan: {} \n This is the actual task:\n {}",
      SOLVER_PROMPT, plan, task
    )
}
