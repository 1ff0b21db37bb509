mod cmd_analyze;
mod cmd_clean;
mod cmd_plan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "truth-weaver",
    version,
    about = "Extract reconciled truth and deception patterns from interview transcripts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze every full batch of sessions and write the report
    Analyze {
        /// Aggregated transcript (`<file>: <text>` per session)
        #[arg(long, default_value = "transcript.txt")]
        input: PathBuf,
        /// Report destination
        #[arg(long, default_value = "submission.json")]
        output: PathBuf,
    },
    /// Show how the transcript would be grouped, without calling the oracle
    Plan {
        /// Aggregated transcript
        #[arg(long, default_value = "transcript.txt")]
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Normalize a raw transcription file (lowercase, letters and full stops only)
    Clean {
        /// Raw transcription file
        #[arg(long, default_value = "transcribed.txt")]
        input: PathBuf,
        /// Cleaned transcript destination
        #[arg(long, default_value = "cleaned_transcript.txt")]
        output: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.cmd {
        Command::Analyze { input, output } => cmd_analyze::execute(&input, &output),
        Command::Plan { input, json } => cmd_plan::execute(&input, json),
        Command::Clean { input, output } => cmd_clean::execute(&input, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_defaults() {
        let cli = Cli::try_parse_from(["truth-weaver", "analyze"]).unwrap();
        match cli.cmd {
            Command::Analyze { input, output } => {
                assert_eq!(input, PathBuf::from("transcript.txt"));
                assert_eq!(output, PathBuf::from("submission.json"));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn plan_json_flag() {
        let cli =
            Cli::try_parse_from(["truth-weaver", "plan", "--input", "t.txt", "--json"]).unwrap();
        assert!(matches!(cli.cmd, Command::Plan { json: true, .. }));
    }

    #[test]
    fn clean_paths() {
        let cli = Cli::try_parse_from([
            "truth-weaver",
            "clean",
            "--input",
            "raw.txt",
            "--output",
            "out.txt",
        ])
        .unwrap();
        match cli.cmd {
            Command::Clean { input, output } => {
                assert_eq!(input, PathBuf::from("raw.txt"));
                assert_eq!(output, PathBuf::from("out.txt"));
            }
            _ => panic!("expected clean"),
        }
    }

    #[test]
    fn batch_size_is_not_an_option() {
        assert!(Cli::try_parse_from(["truth-weaver", "analyze", "--batch-size", "3"]).is_err());
    }
}
