mod args;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use log::info;
use log::warn;
use wells_lib::Payload;
use wells_lib::WellsClient;
use wells_lib::api::query::WellsQuery;
use wells_lib::export;
use wells_lib::summary;

use crate::args::Args;
use crate::args::Selection;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine; the key can come from the flag or environment.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logging::init(args.log_level());

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let client = args.client().context("Failed to create client")?;

    let payload = match args.selection() {
        Selection::State(state) => {
            info!("Filtering by state: {}", state);
            Payload::Records(client.filter_by_state(&state).await?)
        }
        Selection::Status(status) => {
            info!("Filtering by status: {}", status);
            client.filter_by_status(&status, args.format).await?
        }
        Selection::Offshore(offshore) => {
            info!("Filtering {} wells", if offshore { "offshore" } else { "onshore" });
            Payload::Records(client.filter_by_offshore(offshore).await?)
        }
        Selection::All => fetch_all(&client, args).await?,
        Selection::Totals => return print_totals(&client).await,
        Selection::Page => {
            let query = WellsQuery::new()
                .with_format(args.format)
                .with_offset(args.offset)
                .with_limit(args.limit);
            client.get(&query).await?
        }
    };

    info!("Writing {} payload as {}", payload.kind(), args.format);
    match &args.save {
        Some(path) => {
            export::save(&payload, path, args.format)?;
            println!("Data saved to {}", path.display());
        }
        None => println!("{}", export::render(&payload, args.format)?),
    }

    Ok(())
}

/// Keeps whatever was fetched before a failure; fails only when nothing was.
async fn fetch_all(client: &WellsClient, args: &Args) -> Result<Payload> {
    info!("Fetching all records in batches of {}", args.batch_size);
    let (payload, failure) = client.fetch_all(args.format, args.batch_size).await.into_parts();

    match failure {
        None => Ok(payload),
        Some(e) if payload.records().is_none_or(|records| records.is_empty()) => {
            Err(anyhow::Error::from(e).context("Failed to fetch records"))
        }
        Some(e) => {
            let fetched = payload.records().map_or(0, |records| records.len());
            warn!("Stopped after {} records: {}", fetched, e);
            eprintln!("Warning: output is incomplete ({} records): {}", fetched, e);
            Ok(payload)
        }
    }
}

async fn print_totals(client: &WellsClient) -> Result<()> {
    let totals = client
        .flowing_well_totals()
        .await?
        .with_context(|| format!("No \"{}\" row in response", summary::TOTAL_FLOWING_WELLS))?;

    for total in totals {
        println!("{:<40} {}", total.state.display_name(), total.wells);
    }
    Ok(())
}
