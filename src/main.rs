use anyhow::Context;
use clap::Parser;
use revenue_planner::core::ConfigProvider;
use revenue_planner::utils::error::{ErrorSeverity, PlannerError};
use revenue_planner::utils::{logger, validation::Validate};
use revenue_planner::{CliConfig, LocalStorage, PricingPlanner, Settings, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting revenue-planner");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let exit_code = match e.downcast_ref::<PlannerError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Planning failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    err.category(),
                    err.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());

                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());

                exit_code_for(err.severity())
            }
            None => {
                tracing::error!("❌ Planning failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };

        std::process::exit(exit_code);
    }
}

fn exit_code_for(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let mut settings = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            Settings::from_file(file)
        }
        None => Settings::default(),
    };
    settings.apply_cli(cli);
    settings.validate()?;
    tracing::debug!("Effective settings: {:?}", settings);

    let planner = PricingPlanner::new(settings);

    match planner.config().output_directory() {
        Some(directory) => {
            let storage = LocalStorage::new(directory.to_string());
            let written = planner.run_to_storage(&storage)?;
            println!("📁 Report saved to: {}", written);
        }
        None => {
            let rendered = planner.run()?;
            print!("{}", rendered);
        }
    }

    Ok(())
}
