//! angola-holidays-client CLI entry point.

use angola_holidays_client::cli::{Cli, Commands, OutputFormat};
use angola_holidays_client::client::HolidaysClient;
use angola_holidays_client::output::{json, pretty};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = HolidaysClient::new(&cli.base_url).with_lang(cli.lang);

    let output = match cli.command {
        Commands::List { year } => {
            let payload = client.list_holidays(year).await?;
            match cli.format {
                OutputFormat::Json => json::format_json(&payload),
                OutputFormat::Pretty => pretty::format_year(&payload),
            }
        }
        Commands::Range { start, end } => {
            let payload = client.holidays_in_range(start, end).await?;
            match cli.format {
                OutputFormat::Json => json::format_json(&payload),
                OutputFormat::Pretty => pretty::format_range(&payload),
            }
        }
        Commands::Check { date } => {
            let check = client.check_date(date).await?;
            match cli.format {
                OutputFormat::Json => json::format_json(&check),
                OutputFormat::Pretty => pretty::format_check(&check, cli.lang),
            }
        }
        Commands::Upcoming { days } => {
            let payload = client.upcoming(days).await?;
            match cli.format {
                OutputFormat::Json => json::format_json(&payload),
                OutputFormat::Pretty => pretty::format_upcoming(&payload),
            }
        }
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => json::format_json(&health),
                OutputFormat::Pretty => pretty::format_health(&health),
            }
        }
    };

    println!("{output}");
    Ok(())
}
