use outbound_delay::config::ProbeConfig;
use outbound_delay::prober;
use outbound_delay::report::{rank, ProbeReport};

use tracing::{info, error};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<()> {
    // Load config first to get log level
    let config = ProbeConfig::load().await?;
    let log_level = config.get_tracing_level()?;

    // stdout carries the ranking only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                         .add_directive(format!("outbound_delay={}", log_level.as_str().to_lowercase()).parse()?))
        .init();

    info!("probing {} targets", config.targets.len());

    let default_timeout = config.default_timeout_secs;
    let mut handles = Vec::with_capacity(config.targets.len());
    for t in config.targets.into_iter() {
        let target = t.clone();
        handles.push((target, tokio::spawn(async move {
            let measurement = prober::run(&t, default_timeout).await;
            match &measurement.error {
                None => info!("{} probe {} success: {}ms", t.kind.as_str(), t.name, measurement.delay),
                Some(e) => error!("{} probe {} failed ({}): {}", t.kind.as_str(), t.name, measurement.delay, e),
            }
            ProbeReport::new(&t, &measurement)
        })));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for (target, handle) in handles {
        match handle.await {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("{} probe {} aborted: {}", target.kind.as_str(), target.name, e);
                reports.push(ProbeReport::aborted(&target, e));
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&rank(reports))?);
    Ok(())
}
