use log::{error, info};

#[tokio::main]
async fn main()
{   env_logger::init();

    let config = plansolve::BenchConfig::default();
    info!("Benchmarking against {}", config.endpoint);

    match plansolve::Bench::new(config)
    {   Ok(bench) => {
          let reports = bench.run(&plansolve::prompts::TASKS).await;
          info!("Finished {} strategy runs", reports.len());
        }
      , Err(e) => {
          error!("Cannot start benchmark: {}", e);
        }
    }
}
