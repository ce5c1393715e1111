use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "finder-cli")]
#[command(about = "Command-line client for the Fintech Finder service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the paying account and its balance
    Account,
    /// List candidates
    Candidates,
    /// Price a candidate's hours without paying
    Quote {
        #[arg(short, long)]
        candidate: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10))]
        hours: u32,
    },
    /// Sign and submit a payment to a candidate
    Pay {
        #[arg(short, long)]
        candidate: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10))]
        hours: u32,
    },
    /// Check service and node health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Account => client.get(format!("{}/api/v1/account", base)).send().await?,
        Commands::Candidates => {
            client
                .get(format!("{}/api/v1/candidates", base))
                .send()
                .await?
        }
        Commands::Quote { candidate, hours } => {
            client
                .get(format!("{}/api/v1/quote", base))
                .query(&[("candidate", candidate), ("hours", hours.to_string())])
                .send()
                .await?
        }
        Commands::Pay { candidate, hours } => {
            client
                .post(format!("{}/api/v1/pay", base))
                .json(&json!({ "candidate": candidate, "hours": hours }))
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
