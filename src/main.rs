use anyhow::Context;
use rent_scout::analytics::Report;
use rent_scout::scrapers::{CraigslistClient, Collector, SearchParams};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("🏠 Rent Scout - Craigslist apartment prices");

    let params = SearchParams::load().context("Failed to load search parameters")?;
    let client = CraigslistClient::new(params.clone()).context("Failed to create HTTP client")?;

    let listings = Collector::new(&client, &params)
        .collect()
        .await
        .context("Failed to collect listings")?;

    let report = Report::build(&params, &listings).context("Failed to analyze listing prices")?;
    info!(
        "Priced {} of {} listings",
        report.priced_count, report.listing_count
    );

    println!("{}", report);

    Ok(())
}
