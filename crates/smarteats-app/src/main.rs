use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use smarteats_client::{BackendClient, FileSource, MenuSource};
use smarteats_config::Config;
use smarteats_iconset_openmoji::FoodIconResolver;
use smarteats_types::IconSize;
use tracing_subscriber::EnvFilter;

mod commands;
mod profile;
mod render;

#[cfg(test)]
mod tests;

use self::commands::{AppContext, MenuArgs, ResolveArgs, handle_menu, handle_resolve, handle_showcase};
use self::render::OutputFormat;

#[derive(Parser)]
#[command(name = "smarteats")]
#[command(about = "SmartEats dining menus and food icons", long_about = None)]
struct Cli {
    /// Output format (default: text on a terminal, json when piped)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Profile file to load instead of the environment defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Icon size: sm, md or lg
    #[arg(long, global = true)]
    size: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the icon for one dish
    Resolve(ResolveArgs),
    /// List dining halls, or the dishes of one hall
    Menu(MenuArgs),
    /// Run sample dishes through every resolution tier
    Showcase,
    /// Write a profile file holding the current settings
    InitProfile {
        path: PathBuf,
        #[arg(long, default_value = "main")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let format = cli.format.unwrap_or_else(OutputFormat::detect);
    let resolver = FoodIconResolver::new();

    let ctx = AppContext {
        config: &config,
        resolver: &resolver,
        format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Resolve(args) => handle_resolve(&ctx, args, &mut out)?,
        Commands::Menu(args) => {
            let source: Box<dyn MenuSource> = match &args.file {
                Some(path) => Box::new(FileSource::new(path)),
                None => Box::new(BackendClient::new(&config.api)?),
            };
            handle_menu(&ctx, source.as_ref(), args, &mut out).await?;
        }
        Commands::Showcase => handle_showcase(&ctx, &mut out)?,
        Commands::InitProfile { path, name } => {
            profile::init_profile(path, name, config.clone())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so piped JSON output stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = env::var("SMARTEATS_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => profile::load_profile(path)?,
        None => Config::new(),
    };

    if let Some(size) = &cli.size {
        match IconSize::from_str(size) {
            Some(size) => config.icons.size = size,
            None => tracing::warn!(
                "Unknown icon size {size:?}, keeping {}",
                config.icons.size.as_str()
            ),
        }
    }

    tracing::info!(
        backend = %config.api.base_url,
        size = config.icons.size.as_str(),
        "Configuration loaded"
    );
    Ok(config)
}
