use cachestat::TracingHandler;
use cachestat::prelude::*;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // 1. Initialize tracing subscriber
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // 2. Report to a counter, a log line and an in-process tally at once
    let provider = InMemoryProvider::new();
    let collector = Arc::new(StatsCollector::new());
    let reporter = CacheEventReporter::new("users", &provider, ReporterOpts::new())?;
    let handlers = Handlers::new()
        .with(reporter)
        .with(TracingHandler::new("users"))
        .with(Arc::clone(&collector));

    // 3. A lookup that misses locally, hits remotely
    handlers.report_local_miss();
    handlers.report_remote_hit();
    handlers.report_hit();

    // 4. A lookup that falls through to a failing loader
    handlers.report_local_miss();
    handlers.report_remote_miss();
    handlers.report_miss();
    handlers.report(&CacheEvent::QueryFail("upstream timeout".to_string()));

    let stats = collector.snapshot();
    println!("hit ratio: {:.2}", stats.hit_ratio());
    println!(
        "counter total: {}",
        provider.instrument_total("cache_handle_total")
    );

    Ok(())
}
