//! Itinera CLI - terminal front end for the trip planner.
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ITINERA_*`)
//! 3. Project config (`.itinera/config.toml` in the project directory)
//! 4. Global config (`~/.itinera/config.toml`)
//! 5. Default values (lowest priority)
//!
//! # Output
//!
//! Dialogs, slides and logs go to stderr. Results (`accepted`, asset
//! listings, drag payloads) go to stdout so they can be piped.

mod cli_overrides;
mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli_overrides::CliOverrides;
use itinera_runtime::config::{ConfigError, ConfigLoader, ConfigResolver, ItineraConfig};
use itinera_runtime::confirm::{ConfirmationBroker, ConfirmationOptions, OverlapPolicy};
use itinera_runtime::dialog::{ConsoleDialogRenderer, DialogHost};
use itinera_runtime::onboarding::{Carousel, FlagError, JsonFileFlagStore, Onboarding, Slide};
use itinera_runtime::sidebar::{group_by_region, Asset, AssetFilter, Catalog, CatalogError};
use itinera_types::{AssetId, DialogKind, ErrorCode};
use prompt::OnboardingExit;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const SAMPLE_CATALOG: &str = include_str!("../assets/sample_catalog.json");

/// Itinera - plan trips from the terminal
#[derive(Parser, Debug)]
#[command(name = "itinera")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable ANSI color
    #[arg(long, global = true)]
    no_color: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    project: Option<PathBuf>,

    /// Overlapping request policy: replace, queue or reject (also: ITINERA_OVERLAP)
    #[arg(long, global = true, value_name = "POLICY")]
    overlap: Option<OverlapPolicy>,

    /// Locale for default dialog labels (also: ITINERA_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Onboarding flag file (also: ITINERA_FLAG_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    flag_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a yes/no question. Exits 0 when accepted, 1 otherwise.
    Confirm {
        /// Question to show
        message: String,

        #[arg(long)]
        title: Option<String>,

        /// info, warning, error or success
        #[arg(long, default_value_t = DialogKind::Info)]
        kind: DialogKind,

        #[arg(long)]
        confirm_label: Option<String>,

        #[arg(long)]
        cancel_label: Option<String>,
    },

    /// List sidebar assets
    Assets {
        /// Catalog JSON (defaults to config, then the bundled sample)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Required tag; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Name substring
        #[arg(short, long)]
        query: Option<String>,

        /// Group by region
        #[arg(long)]
        group: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the drag payload for an asset
    Drag {
        id: String,

        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// Run the first-run carousel
    Onboarding {
        /// Clear the completion flag and exit
        #[arg(long)]
        reset: bool,

        /// Show the carousel even if already completed
        #[arg(long)]
        force: bool,
    },

    /// Walk through a short planning session
    Demo,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        let catalog = match &self.command {
            Command::Assets { catalog, .. } | Command::Drag { catalog, .. } => catalog.clone(),
            _ => None,
        };

        CliOverrides::new()
            .debug(self.debug)
            .verbose(self.verbose)
            .no_color(self.no_color)
            .overlap(self.overlap)
            .locale(self.locale.clone())
            .flag_file(self.flag_file.clone())
            .catalog(catalog)
    }
}

fn load_config(args: &Args) -> Result<ItineraConfig> {
    let project_root = match args.project.clone() {
        Some(p) => p,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let mut config = ConfigLoader::new()
        .with_project_root(&project_root)
        .load()
        .context("Config error")?;
    args.overrides().apply(&mut config);
    Ok(config)
}

/// Terminal filter: --debug > --verbose > RUST_LOG env > default "warn".
fn init_tracing(config: &ItineraConfig) {
    let filter = if config.debug {
        EnvFilter::new("debug")
    } else if config.ui.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(config.ui.color)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}

fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

fn build_broker(config: &ItineraConfig) -> ConfirmationBroker {
    ConfirmationBroker::builder()
        .config(&config.dialog)
        .locale(&config.locale)
        .build()
}

fn mount(broker: &ConfirmationBroker, config: &ItineraConfig) -> DialogHost<ConsoleDialogRenderer> {
    let renderer = ConsoleDialogRenderer::new()
        .with_verbose(config.ui.verbose)
        .with_color(config.ui.color);
    let mut host = DialogHost::new(broker, renderer);
    host.pump();
    host
}

fn load_catalog(config: &ItineraConfig) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => {
            info!("No catalog configured, using bundled sample");
            Catalog::from_json(SAMPLE_CATALOG).context("Bundled catalog is invalid")
        }
    }
}

fn asset_line(asset: &Asset) -> String {
    let mut line = format!(
        "{:<24} {:<10} {}",
        asset.id.as_str(),
        asset.kind.as_str(),
        asset.name
    );
    if !asset.category.is_empty() {
        line.push_str(&format!(" ({})", asset.category));
    }
    if !asset.tags.is_empty() {
        line.push_str(&format!(" #{}", asset.tags.join(" #")));
    }
    if asset.locked {
        line.push_str(" [locked]");
    }
    line
}

fn onboarding_slides() -> Carousel {
    Carousel::new(vec![
        Slide::new(
            "Welcome to Itinera",
            "Build a trip day by day from attractions and ready-made templates.",
        ),
        Slide::new(
            "Drag to plan",
            "Pick cards from the sidebar and drop them onto a day.",
        ),
        Slide::new(
            "Stay in control",
            "Anything destructive asks first. Confirm with y, cancel with n or esc.",
        ),
    ])
}

async fn cmd_confirm(config: &ItineraConfig, options: ConfirmationOptions) -> Result<ExitCode> {
    let broker = build_broker(config);
    let mut host = mount(&broker, config);
    let mut lines = stdin_lines();

    let accepted = prompt::ask(&broker, &mut host, &mut lines, options).await?;
    println!("{}", if accepted { "accepted" } else { "declined" });

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn cmd_assets(
    config: &ItineraConfig,
    filter: &AssetFilter,
    group: bool,
    json: bool,
) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let hits = catalog.filter(filter);

    if json {
        let out = if group {
            serde_json::to_string_pretty(&group_by_region(hits))?
        } else {
            serde_json::to_string_pretty(&hits)?
        };
        println!("{out}");
        return Ok(ExitCode::SUCCESS);
    }

    if hits.is_empty() {
        eprintln!("No assets match.");
        return Ok(ExitCode::SUCCESS);
    }

    if group {
        for (region, assets) in group_by_region(hits) {
            println!("{region}");
            for asset in assets {
                println!("  {}", asset_line(asset));
            }
        }
    } else {
        for asset in hits {
            println!("{}", asset_line(asset));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_drag(config: &ItineraConfig, id: &str) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let Some(asset) = catalog.get(&AssetId::new(id)) else {
        eprintln!("Unknown asset: {id}");
        return Ok(ExitCode::from(2));
    };
    let Some(payload) = asset.drag_payload() else {
        eprintln!("Asset is locked: {id}");
        return Ok(ExitCode::from(1));
    };
    println!("{}", payload.to_json()?);
    Ok(ExitCode::SUCCESS)
}

async fn cmd_onboarding(config: &ItineraConfig, reset: bool, force: bool) -> Result<ExitCode> {
    let store = JsonFileFlagStore::new(config.onboarding.resolved_flag_file());
    info!(path = %store.path().display(), "Onboarding flag file");
    let mut onboarding = Onboarding::new(onboarding_slides(), store);

    if reset {
        onboarding.reset()?;
        println!("Onboarding reset.");
        return Ok(ExitCode::SUCCESS);
    }

    if !force && !onboarding.should_show()? {
        println!("Onboarding already completed.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut lines = stdin_lines();
    match prompt::run_onboarding(&mut onboarding, &mut lines).await? {
        OnboardingExit::Finished => println!("Onboarding complete."),
        OnboardingExit::Skipped => println!("Onboarding skipped."),
        OnboardingExit::Quit => println!("Onboarding paused."),
    }
    Ok(ExitCode::SUCCESS)
}

async fn cmd_demo(config: &ItineraConfig) -> Result<ExitCode> {
    let catalog = load_catalog(config)?;
    let broker = build_broker(config);
    let mut host = mount(&broker, config);
    let mut lines = stdin_lines();

    println!("Sidebar");
    for (region, assets) in group_by_region(catalog.assets()) {
        println!("  {region}");
        for asset in assets {
            println!("    {}", asset_line(asset));
        }
    }

    if let Some(payload) = catalog.assets().iter().find_map(Asset::drag_payload) {
        println!("Dragged onto day 1: {}", payload.to_json()?);
    }

    let delete = prompt::ask(
        &broker,
        &mut host,
        &mut lines,
        ConfirmationOptions::new("Delete this day?").with_kind(DialogKind::Warning),
    )
    .await?;
    println!("{}", if delete { "Day 2 deleted." } else { "Day 2 kept." });

    let unlocked = prompt::ask(
        &broker,
        &mut host,
        &mut lines,
        ConfirmationOptions::new("Templates are now available in the sidebar.")
            .with_title("Unlocked!")
            .with_confirm_label("Awesome")
            .with_kind(DialogKind::Success),
    )
    .await?;
    println!(
        "{}",
        if unlocked {
            "Templates enabled."
        } else {
            "Maybe later."
        }
    );

    Ok(ExitCode::SUCCESS)
}

/// Stable code of the first workspace error in the chain, if any.
fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            Some(e.code())
        } else if let Some(e) = cause.downcast_ref::<CatalogError>() {
            Some(e.code())
        } else {
            cause.downcast_ref::<FlagError>().map(ErrorCode::code)
        }
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(err) => {
            match error_code(&err) {
                Some(code) => eprintln!("Error: [{code}] {err:#}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    init_tracing(&config);

    info!(
        overlap = %config.dialog.overlap,
        locale = %config.locale.language,
        "Configuration loaded"
    );

    match args.command {
        Command::Confirm {
            message,
            title,
            kind,
            confirm_label,
            cancel_label,
        } => {
            let mut options = ConfirmationOptions::new(message).with_kind(kind);
            options.title = title;
            options.confirm_label = confirm_label;
            options.cancel_label = cancel_label;
            cmd_confirm(&config, options).await
        }
        Command::Assets {
            region,
            category,
            tags,
            query,
            group,
            json,
            ..
        } => {
            let filter = AssetFilter {
                region,
                category,
                tags,
                query,
            };
            cmd_assets(&config, &filter, group, json)
        }
        Command::Drag { id, .. } => cmd_drag(&config, &id),
        Command::Onboarding { reset, force } => cmd_onboarding(&config, reset, force).await,
        Command::Demo => cmd_demo(&config).await,
    }
}
