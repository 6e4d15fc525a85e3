//! `gamefront`: browse a fixture storefront or inspect the resolved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gamefront_cli::{BrowseOptions, BrowseReport, run_browse};
use gamefront_config::StorefrontConfig;
use gamefront_core::FixtureCatalog;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gamefront",
    version,
    about = "Drive the Gamefront storefront engines against a fixture catalog"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load banners, rotate the carousel and scroll the feed to its end
    Browse(BrowseArgs),
    /// Print the resolved configuration and where it came from
    Config,
}

#[derive(Args)]
struct BrowseArgs {
    /// JSON fixture catalog; overrides GAMEFRONT_FIXTURE and the config file
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Simulated time the carousel rotates for (e.g. `30s`, `2m`)
    #[arg(long, default_value = "30s")]
    rotate: humantime::Duration,
    /// Viewport width in CSS px
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Pages in the generated catalog when no fixture is given
    #[arg(long, default_value_t = 5)]
    pages: u32,
    /// Games per generated page
    #[arg(long, default_value_t = 20)]
    page_size: usize,
    /// Games each generated page repeats from the previous one
    #[arg(long, default_value_t = 4)]
    overlap: usize,
    /// Simulated latency per catalog request (e.g. `150ms`)
    #[arg(long)]
    latency: Option<humantime::Duration>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (config, source) = StorefrontConfig::load_from_env()?;

    match cli.command {
        Command::Config => {
            println!("# source: {source}");
            print!("{}", config.to_toml()?);
        }
        Command::Browse(args) => {
            let catalog = catalog_for(&args, &config)?;
            let options = BrowseOptions {
                rotate_for: args.rotate.into(),
                viewport_width: args.width,
                ..BrowseOptions::default()
            };
            let report = run_browse(&config, catalog, &options).await;
            info!(
                items = report.feed_items,
                end_of_content = report.end_of_content,
                "browse finished"
            );
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn catalog_for(args: &BrowseArgs, config: &StorefrontConfig) -> Result<FixtureCatalog> {
    let mut catalog = match args.fixture.as_ref().or(config.fixture.as_ref()) {
        Some(path) => FixtureCatalog::from_path(path)
            .with_context(|| format!("failed to load fixture {}", path.display()))?,
        None => FixtureCatalog::generated(args.pages, args.page_size, args.overlap),
    };
    if let Some(latency) = &args.latency {
        catalog = catalog.with_latency(**latency);
    }
    Ok(catalog)
}

fn print_report(report: &BrowseReport) {
    println!("viewport        {:?}", report.breakpoint);
    println!("banners         {}", report.banners);
    println!(
        "carousel        {} auto-advances, {} re-centers",
        report.auto_advances, report.recenters
    );
    if let (Some(title), Some(route)) = (&report.final_banner, &report.final_route) {
        println!("showing         {title} ({route})");
    }
    println!(
        "feed            {} games over {} pages ({} revealed)",
        report.feed_items, report.feed_pages, report.revealed
    );
    println!("sentinel hits   {}", report.scrolls);
    match &report.error {
        Some(message) => println!("error           {message}"),
        None if report.end_of_content => println!("end of content  yes"),
        None => println!("end of content  no"),
    }
}
