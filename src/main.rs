mod api;
mod battery;
mod cli;
mod prelude;
mod quantity;
mod registry;
mod tables;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    api::Notion,
    battery::{BatteryRecord, DerivedMetrics},
    cli::{Args, Command, NotionArgs},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Args::parse().command {
        Command::Report(args) => {
            let notion = try_new_notion(&args.notion)?;
            if let Err(error) = notion.ensure_database_schema().await {
                warn!("failed to update the database schema, continuing: {error:#}");
            }
            let (record, metrics) = extract().await?;
            if args.dry_run {
                println!("{}", tables::build_report_table(&record, &metrics));
            } else {
                notion.create_report_page(&record, &metrics).await?;
            }
            Ok(())
        }

        Command::Show => {
            let (record, metrics) = extract().await?;
            println!("{}", tables::build_report_table(&record, &metrics));
            Ok(())
        }

        Command::EnsureSchema(args) => try_new_notion(&args.notion)?.ensure_database_schema().await,
    }
}

fn try_new_notion(args: &NotionArgs) -> Result<Notion> {
    Notion::try_new(&args.api_key, args.database_id.clone())
}

/// Run the extraction pipeline: registry dump → typed record → derived metrics.
async fn extract() -> Result<(BatteryRecord, DerivedMetrics)> {
    let raw = registry::query_smart_battery().await?;
    let record = BatteryRecord::parse(&raw).context("failed to parse the registry dump")?;
    let metrics = DerivedMetrics::derive(&record, Local::now());
    info!(
        serial = %record.serial,
        real_health = %metrics.real_health,
        cycle_count = record.cycle_count,
        temperature = %metrics.temperature,
        power = %metrics.power_draw,
        status = %metrics.charging_status,
        "extracted the battery telemetry",
    );
    Ok((record, metrics))
}
