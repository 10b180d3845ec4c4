// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lane_monitor::render::{palette, surface::lane_name, terminal::paint};
use lane_monitor::utils::logging::format_info;
use lane_monitor::{
    Config, Poller, StatusClient, Step, TerminalBoard, border_triple, render,
};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "lane_monitor")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Live lane dashboard for a three-lane traffic controller", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the controller and redraw the lane board until interrupted
    Watch {
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Stop after this many requests
        #[arg(long, value_name = "NUM")]
        ticks: Option<u64>,
    },

    /// Fetch the status once and draw a single frame
    Once {
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Print the decoded payload and computed borders as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the border colors used for every controller step
    Palette,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    lane_monitor::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let color = cli.color && config.display.color;

    match cli.command {
        Commands::Watch {
            endpoint,
            interval_ms,
            ticks,
        } => {
            if let Some(endpoint) = endpoint {
                config.poller.endpoint = endpoint;
            }
            if let Some(interval_ms) = interval_ms {
                config.poller.interval_ms = interval_ms;
            }
            if ticks.is_some() {
                config.poller.max_ticks = ticks;
            }
            config.validate().context("Invalid watch options")?;
            cmd_watch(&config, color).await?;
        }
        Commands::Once { endpoint, json } => {
            if let Some(endpoint) = endpoint {
                config.poller.endpoint = endpoint;
            }
            config.validate().context("Invalid endpoint")?;
            cmd_once(&config, json, color).await?;
        }
        Commands::Palette => {
            cmd_palette(color);
        }
    }

    Ok(())
}

async fn cmd_watch(config: &Config, color: bool) -> Result<()> {
    let client = StatusClient::new(&config.poller).context("Failed to create status client")?;
    info!("Watching {}", client.endpoint());

    let poller =
        Poller::new(client, config.poller.interval()).with_max_ticks(config.poller.max_ticks);
    let mut board = TerminalBoard::stdout(config.display.lane_count, color);

    let stats = poller
        .run(&mut board, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    println!("{}", stats.summary(color));

    Ok(())
}

async fn cmd_once(config: &Config, json: bool, color: bool) -> Result<()> {
    let client = StatusClient::new(&config.poller).context("Failed to create status client")?;
    let payload = client
        .fetch_status()
        .await
        .context("Failed to fetch controller status")?;

    if json {
        let borders =
            border_triple(&payload.current_step).map(|borders| borders.map(|b| b.to_string()));
        let phase = Step::parse(&payload.current_step).map(Step::label);
        let report = serde_json::json!({
            "status": payload,
            "step": phase,
            "borders": borders,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut board = TerminalBoard::with_writer(config.display.lane_count, io::stdout(), color);
    let outcome = render(&payload, &mut board);
    if !outcome.borders_applied {
        println!(
            "{}",
            format_info(&format!(
                "Step {:?} is not a known phase, borders left unset",
                payload.current_step
            ))
        );
    }

    Ok(())
}

fn cmd_palette(color: bool) {
    for step in Step::ALL {
        let lanes: Vec<String> = palette::signals_for(step)
            .iter()
            .enumerate()
            .map(|(index, signal)| {
                let cell = format!("{}={:<6}", lane_name(index), signal.css_name());
                if color {
                    paint(*signal, &cell)
                } else {
                    cell
                }
            })
            .collect();

        println!("{:<20} {}", step.to_string(), lanes.join(" "));
    }
}
