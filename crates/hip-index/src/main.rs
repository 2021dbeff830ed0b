mod config;
mod error;
mod update;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use hip_core::model::IndexStats;
use update::{Target, UpdateService};

enum Action {
    Update(Target),
    Stats,
}

fn resolve_action(command: Option<Commands>, check: bool) -> Result<Action, AppError> {
    match command.unwrap_or(Commands::All) {
        Commands::Json => Ok(Action::Update(Target::Json)),
        Commands::Readme => Ok(Action::Update(Target::Readme)),
        Commands::All => Ok(Action::Update(Target::All)),
        Commands::Stats if check => Err(AppError::Usage(
            "--check does not apply to stats".to_string(),
        )),
        Commands::Stats => Ok(Action::Stats),
    }
}

#[derive(Parser)]
#[command(name = "hip-index", about = "Regenerate the HIP JSON index and README table")]
struct Cli {
    /// Verify outputs are up to date without writing; fails if any are stale.
    /// Not accepted by `stats`, which writes nothing.
    #[arg(long, global = true)]
    check: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Write hip-index.json to every configured destination
    Json,
    /// Replace the index section of the README
    Readme,
    /// Both json and readme (default)
    All,
    /// Print status, type and category counts as JSON
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let action = resolve_action(cli.command, cli.check)?;

    let config = Config::from_env()?;
    info!(
        repo_root = %config.repo_root.display(),
        hips_dir = %config.hips_dir.display(),
        outputs = config.json_outputs.len(),
        readme = %config.readme_path.display(),
        "configuration loaded"
    );

    let service = UpdateService::new(config);

    let target = match action {
        Action::Update(target) => target,
        Action::Stats => {
            let records = service.collect()?;
            let stats = IndexStats::from_records(&records);
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }
    };

    let result = service.run(target, cli.check)?;
    info!(
        hips = result.stats.total,
        changed = result.changed.len(),
        check = cli.check,
        "hip index run complete"
    );
    for (status, count) in &result.stats.by_status {
        info!(status = %status, count, "hips by status");
    }
    Ok(())
}
