use clap::Parser;
use imei_gen::domain::ports::{ConfigProvider, RandomDigits};
use imei_gen::utils::{logger, validation::Validate};
use imei_gen::{CliConfig, ImeiError, ImeiSession, LocalStorage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting imei-gen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let rng = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source ({})", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let batch_round = config.batch_round()?;
    let storage = LocalStorage::new(config.output_dir().to_path_buf());
    let mut session = ImeiSession::new(storage, config, RandomDigits::new(rng));

    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = match batch_round {
        Some((prefix, count)) => session
            .run_round(&prefix, count, &mut output)
            .map(|report| vec![report]),
        None => session.run_interactive(&mut io::stdin().lock(), &mut output),
    };

    match result {
        Ok(reports) => {
            tracing::info!("Completed {} round(s)", reports.len());
            Ok(())
        }
        Err(ImeiError::Interrupted) => {
            // Leave the terminal on a fresh line.
            writeln!(output)?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("imei-gen failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
