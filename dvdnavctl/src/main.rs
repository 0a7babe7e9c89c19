use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dvdnav_config::{NavigatorConfig, init_tracing};
use dvdnavctl::{PacketFormat, describe_packet, load_packet, parse_script, run_replay};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "dvdnavctl",
    about = "Inspect DVD menu navigation packets and replay menu input"
)]
struct Cli {
    /// Navigator config file (TOML or JSON). Defaults to the environment
    /// and the usual dvdnav.toml locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the buttons of a navigation packet
    Inspect {
        packet: PathBuf,
        /// Input is a raw PCI packet instead of JSON
        #[arg(long)]
        pci: bool,
        /// Print the decoded packet as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay an input script against a packet, one JSON line per step
    Replay {
        packet: PathBuf,
        script: PathBuf,
        /// Input is a raw PCI packet instead of JSON
        #[arg(long)]
        pci: bool,
    },
}

fn packet_format(pci: bool) -> PacketFormat {
    if pci {
        PacketFormat::Pci
    } else {
        PacketFormat::Json
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => (
            NavigatorConfig::load_from_file(path)?,
            dvdnav_config::NavigatorConfigSource::File(path.clone()),
        ),
        None => NavigatorConfig::load_from_env()?,
    };
    init_tracing(&config.log_filter);
    debug!(?source, ?config, "navigator config loaded");

    match cli.command {
        Command::Inspect { packet, pci, json } => {
            let packet = load_packet(&packet, packet_format(pci))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&packet)?);
            } else {
                print!("{}", describe_packet(&packet));
            }
        }
        Command::Replay {
            packet,
            script,
            pci,
        } => {
            let packet = load_packet(&packet, packet_format(pci))?;
            let source = fs::read_to_string(&script).with_context(|| {
                format!("failed to read script {}", script.display())
            })?;
            let steps = parse_script(&source)?;
            info!(steps = steps.len(), "replaying input script");
            let stdout = io::stdout();
            run_replay(packet, config.session_options(), &steps, stdout.lock())?;
        }
    }

    Ok(())
}
