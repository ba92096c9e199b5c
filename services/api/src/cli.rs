use crate::report::{run_prediction_report, PredictionReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use liftoff::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Liftoff",
    about = "Serve and inspect road-closure launch predictions",
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
    /// Print the active road-closure predictions
    Predictions(PredictionReportArgs),
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
        Command::Predictions(args) => run_prediction_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["liftoff"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_prediction_report_flags() {
        let cli = Cli::try_parse_from([
            "liftoff",
            "predictions",
            "--now",
            "2025-05-20T14:00:00Z",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Predictions(args)) => {
                assert!(args.json);
                assert_eq!(
                    args.now.map(|now| now.to_rfc3339()),
                    Some("2025-05-20T14:00:00+00:00".to_string())
                );
            }
            other => panic!("expected predictions command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let result = Cli::try_parse_from(["liftoff", "predictions", "--now", "tomorrow"]);
        assert!(result.is_err());
    }
}
