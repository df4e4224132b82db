use crate::map::{run_map, MapArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_forms::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "visa-forms-api",
    about = "Map visa wizard answers onto I-129F form fields and serve the mapping API",
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
    /// Map an answers JSON file and print the resulting field assignments
    Map(MapArgs),
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
        Command::Map(args) => run_map(args),
    }
}
