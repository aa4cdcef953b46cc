use cachestat::prelude::*;

fn main() -> Result<()> {
    // Install an SDK provider with an exporter before this point, e.g.
    // opentelemetry::global::set_meter_provider(sdk_provider);
    // Without one, increments go to the global no-op provider.
    let reporter = CacheEventReporter::new(
        "sessions",
        &OtelMeterProvider::global(),
        ReporterOpts::new()
            .namespace("auth")
            .help("Session cache events by tier and outcome"),
    )?;

    reporter.report_local_hit();
    reporter.report_hit();
    reporter.report_query();

    println!("reporting to {}", reporter.instrument_name());
    Ok(())
}
