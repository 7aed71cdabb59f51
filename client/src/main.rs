#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use irev_client::{
    config::Config,
    explore::{state_snapshot, StateSnapshot, FCT_STATE_ID},
    irev::{HttpIrevClient, IrevApi},
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Query the INEC IReV election results API.
///
/// Auth tokens and hosts come from irev.yaml, a .env file, or IREV_-prefixed
/// environment variables (e.g. `IREV_API__AUTH_TOKENS=token-a,token-b`).
#[derive(Debug, Parser)]
#[command(name = "irev", version)]
struct Cli {
    /// YAML configuration file.
    #[arg(long, default_value = "irev.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all election types.
    ElectionTypes,
    /// List the elections of an election type.
    Elections { election_type: String },
    /// Show one election.
    Election { election: String },
    /// Show polling unit and result sheet counts for an election.
    Stats { election: String },
    /// List the LGAs (with wards) of a state.
    Lgas { election: String, state_id: u32 },
    /// Show one LGA with its wards.
    Lga { election: String, lga: String },
    /// List the polling units (with documents) of a ward.
    PollingUnits { election: String, ward: String },
    /// Show one polling unit with its documents.
    PollingUnit {
        election: String,
        polling_unit: String,
    },
    /// Write every LGA of a state to `<out>/<state>/<lga>` as JSON.
    DumpState {
        /// Election type code; the first election of this type is used.
        #[arg(long, default_value = "PRES")]
        type_code: String,
        /// State number, 1..=37 (15 is the FCT).
        #[arg(long, default_value_t = FCT_STATE_ID)]
        state_id: u32,
        #[arg(long, default_value = ".cache")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.level)?)
        .with_writer(std::io::stderr)
        .init();

    let client = HttpIrevClient::new(&config.api)?;
    tracing::debug!(?client, "IReV client ready");

    match cli.command {
        Command::ElectionTypes => print_json(&client.get_election_types().await?),
        Command::Elections { election_type } => {
            print_json(&client.get_elections(&election_type).await?)
        }
        Command::Election { election } => print_json(&client.get_election(&election).await?),
        Command::Stats { election } => print_json(&client.get_election_stats(&election).await?),
        Command::Lgas { election, state_id } => {
            print_json(&client.get_lgas_by_state(&election, state_id).await?)
        }
        Command::Lga { election, lga } => print_json(&client.get_lga(&election, &lga).await?),
        Command::PollingUnits { election, ward } => {
            print_json(&client.get_polling_units_by_ward(&election, &ward).await?)
        }
        Command::PollingUnit {
            election,
            polling_unit,
        } => print_json(&client.get_polling_unit(&election, &polling_unit).await?),
        Command::DumpState {
            type_code,
            state_id,
            out,
        } => {
            let snapshot = state_snapshot(&client, &type_code, state_id).await?;
            write_snapshot(&out, &snapshot).await
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn write_snapshot(out: &Path, snapshot: &StateSnapshot) -> Result<(), anyhow::Error> {
    let Some(first) = snapshot.lgas.first() else {
        tracing::warn!(state_id = snapshot.state_id, "state has no LGAs, nothing written");
        return Ok(());
    };

    let dir = out.join(&first.state.id);
    tokio::fs::create_dir_all(&dir).await?;

    for lga in &snapshot.lgas {
        let file = dir.join(&lga.lga.id);
        tokio::fs::write(&file, serde_json::to_string_pretty(lga)?).await?;
    }

    tracing::info!(
        election = %snapshot.election.full_name,
        lgas = snapshot.lgas.len(),
        dir = %dir.display(),
        "state snapshot written"
    );
    println!("{}", dir.display());
    Ok(())
}
