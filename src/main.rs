use anyhow::Context;
use clap::Parser;
use ident_kit::utils::error::{ErrorSeverity, IdentError};
use ident_kit::utils::{logger, validation, validation::Validate};
use ident_kit::{
    format_bytes, human_readable_file_size, BatchRunner, CliConfig, Command, FileConfig, Operation,
};
use std::io::{self, BufReader};

fn main() {
    let cli = CliConfig::parse();

    // 載入配置檔，沒有指定就用預設值
    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    logger::init_cli_logger(cli.verbose, file_config.log_level(), file_config.log_format());
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = file_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &file_config) {
        let exit_code = match e.downcast_ref::<IdentError>() {
            Some(ident_err) => {
                tracing::error!(
                    "❌ {} (Severity: {:?})",
                    ident_err,
                    ident_err.severity()
                );
                eprintln!("❌ {}", ident_err.user_friendly_message());
                eprintln!("💡 {}", ident_err.recovery_suggestion());
                match ident_err.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                1
            }
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn operation_for(cli: &CliConfig, config: &FileConfig, op: ident_kit::OperationKind) -> Operation {
    Operation::new(op)
        .with_policy(cli.policy.unwrap_or(config.timestamp_policy()))
        .with_strategy(cli.strategy.unwrap_or(config.hash_strategy()))
        .with_address_format(config.address_format())
}

fn run(cli: &CliConfig, config: &FileConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Apply { op, inputs } => {
            let runner = BatchRunner::new(operation_for(cli, config, *op), cli.json);
            let summary = runner.run_values(inputs, io::stdout().lock())?;
            if summary.rejected > 0 {
                anyhow::bail!("{} of {} values rejected", summary.rejected, summary.processed);
            }
        }
        Command::Batch { op, input } => {
            let runner = BatchRunner::new(operation_for(cli, config, *op), cli.json);
            let summary = match input {
                Some(path) => {
                    validation::validate_path("batch.input", &path.to_string_lossy())?;
                    let file = std::fs::File::open(path)
                        .with_context(|| format!("cannot open batch input '{}'", path.display()))?;
                    runner.run(BufReader::new(file), io::stdout().lock())?
                }
                None => runner.run(io::stdin().lock(), io::stdout().lock())?,
            };
            tracing::info!(
                "✅ Processed {} lines ({} absent, {} degraded, {} rejected)",
                summary.processed,
                summary.absent,
                summary.degraded,
                summary.rejected
            );
        }
        Command::Size {
            bytes,
            decimals,
            binary,
            human,
        } => {
            let formatted = if *human {
                human_readable_file_size(*bytes)
            } else {
                format_bytes(*bytes, *decimals, *binary)
            };
            if cli.json {
                println!("{}", serde_json::json!({ "input": bytes, "output": formatted }));
            } else {
                println!("{}", formatted);
            }
        }
    }

    Ok(())
}
