//! List upcoming trips for the member identified by TRAXO_ACCESS_TOKEN.
//!
//! Usage: TRAXO_ACCESS_TOKEN=... cargo run --example get_trips

use anyhow::Result;
use traxo::{TraxoClient, TripsQuery};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = TraxoClient::from_env()?;

    // No options: the API defaults to trips starting today or later.
    let trips = client.trips(&TripsQuery::default()).await?;
    println!("{} upcoming trip(s)", trips.len());
    for trip in &trips {
        println!(
            "  {} -> {} [{}]",
            trip.name.as_deref().unwrap_or("(unnamed)"),
            trip.destination.as_deref().unwrap_or("?"),
            trip.status.as_deref().unwrap_or("unknown"),
        );
    }

    Ok(())
}
