pub mod cli;

use crate::domain::model::Prefix;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ImeiError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "imei-gen")]
#[command(about = "Generate Luhn-valid IMEI numbers from a TAC/serial prefix")]
pub struct CliConfig {
    /// Directory the generated files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Output filename stem; files are named <BASE_NAME>_<N>.<EXTENSION>
    #[arg(long, default_value = "generated_imeis")]
    pub base_name: String,

    #[arg(long, default_value = "txt")]
    pub extension: String,

    /// First 8 - 12 digits; together with --count runs a single round without prompts
    #[arg(long, requires = "count")]
    pub prefix: Option<String>,

    /// Number of IMEIs to generate in the non-interactive round
    #[arg(long, requires = "prefix")]
    pub count: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The prefix and count of a non-interactive round, if one was requested.
    pub fn batch_round(&self) -> Result<Option<(Prefix, usize)>> {
        match (&self.prefix, &self.count) {
            (Some(prefix), Some(count)) => {
                let prefix = Prefix::parse(prefix.trim())?;
                let count = validation::parse_count(count.trim())?;
                Ok(Some((prefix, count)))
            }
            (None, None) => Ok(None),
            _ => Err(ImeiError::InvalidInputError {
                field: "prefix/count".to_string(),
                value: String::new(),
                reason: "--prefix and --count must be given together".to_string(),
            }),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn base_name(&self) -> &str {
        &self.base_name
    }

    fn extension(&self) -> &str {
        &self.extension
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validation::validate_file_component("base_name", &self.base_name)?;
        validation::validate_file_component("extension", &self.extension)?;
        self.batch_round()?;
        Ok(())
    }
}
