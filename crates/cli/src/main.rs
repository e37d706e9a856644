use clap::Parser;
use genops::{render, showcase, OutputFormat};
use genops_config::ConfigLoader;
use genops_core::constants::{GENOPS_CONFIG_VAR, GENOPS_LOG_VAR};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Parser)]
#[command(name = "genops")]
#[command(
    about = "Compare hand-written generic map, filter and fold with the standard library",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./genops.json when present)
    #[arg(short, long, env = GENOPS_CONFIG_VAR)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Ignore GENOPS_* environment overrides
    #[arg(long)]
    no_env: bool,

    /// Log level (GENOPS_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Exit with an error if any comparison differs
    #[arg(long)]
    strict: bool,
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(GENOPS_LOG_VAR)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_tracing(cli.log_level);

    let mut loader = ConfigLoader::new().env_overrides(!cli.no_env);
    if let Some(path) = cli.config {
        loader = loader.file(path);
    }
    let (config, source) = loader.load()?;

    info!(%source, values = config.values.len(), "Running showcase");
    let report = showcase::run(&config);
    println!("{}", render(&report, cli.format)?);

    if cli.strict && !report.all_match() {
        eyre::bail!(
            "{} of {} comparisons differ",
            report.len() - report.matching(),
            report.len()
        );
    }

    Ok(())
}
