use clap::Parser;
use kumi::{
    config::{DriverConfig, OutputFormat},
    driver, InternalResult,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file with demo cases
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source text for a single ad-hoc case (requires --grammar)
    #[arg(short, long, requires = "grammar")]
    source: Option<String>,

    /// Grammar for the ad-hoc case, as JSON
    #[arg(short, long, requires = "source")]
    grammar: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> InternalResult<DriverConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("Loading config: {:?}", path);
            DriverConfig::from_file(path)?
        }
        None => DriverConfig::default(),
    };

    config.apply_overrides(cli.source.as_deref(), cli.grammar.as_deref(), cli.format)?;
    Ok(config)
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = load_config(cli)?;
    info!("config loaded.");
    debug!("config: {:?}", config);

    for line in driver::run_all(&config.cases, config.format)? {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
