use crate::demo::{run_comments, run_demo, run_score, CommentsArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use swing_score::config::AppConfig;
use swing_score::error::AppError;
use swing_score::scoring::ScoringService;
use swing_score::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "swing-score",
    about = "Score golf swing measurements and serve localized coaching feedback",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a vendor result file (JSON document or flat phase,item,value CSV)
    Score(ScoreArgs),
    /// List the coaching remarks defined for a swing phase
    Comments(CommentsArgs),
    /// Score a built-in sample swing and walk through the stored-record round trip
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(&offline_service()?, args),
        Command::Comments(args) => run_comments(&offline_service()?, args),
        Command::Demo(args) => run_demo(&offline_service()?, args),
    }
}

/// Configuration, stderr logging and the scoring service for one-shot commands.
fn offline_service() -> Result<ScoringService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;
    Ok(ScoringService::from_config(&config.scoring)?)
}
