use crate::demo::{run_catalog, run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use care_engine::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Care Decision Engine",
    about = "Serve and exercise the clinical and compliance decision engine from the command line",
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
    /// Evaluate an assessment request stored as JSON
    Evaluate(EvaluateArgs),
    /// Walk through the minimal-risk and high-risk reference scenarios
    Demo(DemoArgs),
    /// List the embedded domain catalog and drug interaction table
    Catalog,
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
        Command::Catalog => run_catalog(),
    }
}
