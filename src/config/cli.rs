use crate::app::OperationKind;
use crate::domain::model::{HashStrategy, TimestampPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ident-kit")]
#[command(about = "Normalize timestamps, URL content hashes and labels")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the timestamp policy from the config file
    #[arg(long, value_enum, global = true)]
    pub policy: Option<TimestampPolicy>,

    /// Override the hash extraction strategy from the config file
    #[arg(long, value_enum, global = true)]
    pub strategy: Option<HashStrategy>,

    /// Emit JSON lines instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply an operation to the given values
    Apply {
        #[arg(value_enum)]
        op: OperationKind,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Apply an operation to every line of a file (or stdin)
    Batch {
        #[arg(value_enum)]
        op: OperationKind,
        /// Input file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Format a byte count
    Size {
        bytes: f64,
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        decimals: i32,
        /// Use powers of 1024
        #[arg(long)]
        binary: bool,
        /// Fixed two-decimal output (1024 steps, up to PB)
        #[arg(long, conflicts_with_all = ["decimals", "binary"])]
        human: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_apply() {
        let cli = CliConfig::parse_from([
            "ident-kit",
            "--policy",
            "strict",
            "apply",
            "timestamp",
            "20240115143022",
        ]);
        assert_eq!(cli.policy, Some(TimestampPolicy::Strict));
        match cli.command {
            Command::Apply { op, inputs } => {
                assert_eq!(op, OperationKind::Timestamp);
                assert_eq!(inputs, vec!["20240115143022".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_batch_with_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from([
            "ident-kit",
            "batch",
            "file-hash",
            "--strategy",
            "path-tail",
            "--json",
            "-i",
            "urls.txt",
        ]);
        assert_eq!(cli.strategy, Some(HashStrategy::PathTail));
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Command::Batch { op: OperationKind::FileHash, input: Some(_) }
        ));
    }

    #[test]
    fn test_apply_requires_input() {
        assert!(CliConfig::try_parse_from(["ident-kit", "apply", "title-case"]).is_err());
    }
}
