use clap::{builder::RangedU64ValueParser, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tripwise_core::{Activity, Hotel};
use tripwise_summary::{SummaryClient, SummarySettings};
use tripwise_travel::{Sourced, TravelService, TravelSettings};

#[derive(Debug, Parser)]
#[command(name = "tripwise-cli")]
#[command(about = "Tripwise travel planner command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up hotels for a destination
    Hotels {
        #[arg(long)]
        destination: String,
        /// Maximum number of hotels (1-30)
        #[arg(long, default_value_t = 5, value_parser = limit_parser())]
        limit: usize,
    },
    /// Look up activities for a destination
    Activities {
        #[arg(long)]
        destination: String,
        /// Maximum number of activities (1-30)
        #[arg(long, default_value_t = 5, value_parser = limit_parser())]
        limit: usize,
    },
    /// Build a full trip plan with hotels, activities and a summary
    Plan {
        #[arg(long)]
        destination: String,
        /// Trip budget in rupees
        #[arg(long)]
        budget: u64,
        #[arg(long, default_value_t = 5, value_parser = limit_parser())]
        limit: usize,
    },
}

fn limit_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=30)
}

#[derive(Debug, Serialize)]
struct TripPlan {
    destination: String,
    budget: u64,
    hotels: Sourced<Hotel>,
    activities: Sourced<Activity>,
    summary: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tripwise_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let travel = TravelService::new(&TravelSettings::from_app_config(&config))?;

    let output = match cli.command {
        Commands::Hotels { destination, limit } => {
            let hotels = travel.search_hotels(&destination, limit).await;
            tracing::info!(
                destination = %destination,
                source = ?hotels.source,
                count = hotels.items.len(),
                "hotels ready"
            );
            serde_json::to_string_pretty(&hotels)?
        }
        Commands::Activities { destination, limit } => {
            let activities = travel.search_activities(&destination, limit).await;
            tracing::info!(
                destination = %destination,
                source = ?activities.source,
                count = activities.items.len(),
                "activities ready"
            );
            serde_json::to_string_pretty(&activities)?
        }
        Commands::Plan {
            destination,
            budget,
            limit,
        } => {
            let summary_client = SummaryClient::new(&SummarySettings::from_app_config(&config))?;
            let (hotels, activities) = tokio::join!(
                travel.search_hotels(&destination, limit),
                travel.search_activities(&destination, limit),
            );
            tracing::info!(
                destination = %destination,
                hotel_source = ?hotels.source,
                activity_source = ?activities.source,
                live_summary = summary_client.is_enabled(),
                "planning trip"
            );
            let summary = summary_client
                .generate_summary(&destination, budget, &hotels.items, &activities.items)
                .await;
            serde_json::to_string_pretty(&TripPlan {
                destination,
                budget,
                hotels,
                activities,
                summary,
            })?
        }
    };

    println!("{output}");
    Ok(())
}
