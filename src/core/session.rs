//! Interactive generation session.
//!
//! The session cycles through
//! `PromptPrefix -> PromptCount -> Generate -> Persist -> PromptRepeat`
//! until the repeat answer is anything but `y`. Invalid answers are reported
//! and asked again; a closed input stream aborts with [`ImeiError::Interrupted`].

use crate::core::generator::ImeiGenerator;
use crate::core::output;
use crate::domain::model::{Imei, Prefix, RoundReport};
use crate::domain::ports::{ConfigProvider, DigitSource, Storage};
use crate::utils::error::{ImeiError, Result};
use crate::utils::validation;
use std::io::{BufRead, Write};

pub const PREFIX_PROMPT: &str = "Enter the first 8 - 12 digits: ";
pub const COUNT_PROMPT: &str = "Enter the number of IMEI numbers to generate: ";
pub const REPEAT_PROMPT: &str = "Generate lagi? (y/n): ";

#[derive(Debug)]
enum SessionState {
    PromptPrefix,
    PromptCount(Prefix),
    Generate(Prefix, usize),
    Persist(Vec<Imei>),
    PromptRepeat,
    Finished,
}

pub struct ImeiSession<S: Storage, C: ConfigProvider, D: DigitSource> {
    storage: S,
    config: C,
    generator: ImeiGenerator<D>,
}

impl<S: Storage, C: ConfigProvider, D: DigitSource> ImeiSession<S, C, D> {
    pub fn new(storage: S, config: C, digits: D) -> Self {
        Self {
            storage,
            config,
            generator: ImeiGenerator::new(digits),
        }
    }

    /// Runs prompt rounds until the user declines to continue.
    pub fn run_interactive<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<Vec<RoundReport>> {
        let mut reports = Vec::new();
        let mut state = SessionState::PromptPrefix;

        loop {
            tracing::trace!("Session state: {:?}", state);
            state = match state {
                SessionState::PromptPrefix => {
                    let answer = prompt(input, output, PREFIX_PROMPT)?;
                    match retry_on_invalid(output, Prefix::parse(&answer))? {
                        Some(prefix) => SessionState::PromptCount(prefix),
                        None => SessionState::PromptPrefix,
                    }
                }
                SessionState::PromptCount(prefix) => {
                    let answer = prompt(input, output, COUNT_PROMPT)?;
                    match retry_on_invalid(output, validation::parse_count(&answer))? {
                        Some(count) => SessionState::Generate(prefix, count),
                        None => SessionState::PromptCount(prefix),
                    }
                }
                SessionState::Generate(prefix, count) => {
                    SessionState::Persist(self.generate_records(&prefix, count, output)?)
                }
                SessionState::Persist(records) => {
                    reports.push(self.persist(records, output)?);
                    SessionState::PromptRepeat
                }
                SessionState::PromptRepeat => {
                    let answer = prompt(input, output, REPEAT_PROMPT)?;
                    if answer.eq_ignore_ascii_case("y") {
                        SessionState::PromptPrefix
                    } else {
                        writeln!(output, "Thank you! Program finished.")?;
                        SessionState::Finished
                    }
                }
                SessionState::Finished => break,
            };
        }

        tracing::info!("Session finished after {} round(s)", reports.len());
        Ok(reports)
    }

    /// Generates and persists one round without prompting.
    pub fn run_round<O: Write>(
        &mut self,
        prefix: &Prefix,
        count: usize,
        output: &mut O,
    ) -> Result<RoundReport> {
        let records = self.generate_records(prefix, count, output)?;
        self.persist(records, output)
    }

    fn generate_records<O: Write>(
        &mut self,
        prefix: &Prefix,
        count: usize,
        output: &mut O,
    ) -> Result<Vec<Imei>> {
        tracing::debug!("Generating {} IMEI(s) with prefix {}", count, prefix);
        writeln!(output, "\nGenerating IMEIs...\n")?;

        // Grows as records arrive; `count` is user input and may be huge.
        let mut records = Vec::new();
        for _ in 0..count {
            let imei = self.generator.generate(prefix)?;
            tracing::trace!(
                "Generated {} (TAC {}, serial {}, check {})",
                imei,
                imei.tac(),
                imei.serial(),
                imei.check_digit()
            );
            writeln!(output, "{}", imei)?;
            records.push(imei);
        }
        writeln!(output)?;

        Ok(records)
    }

    fn persist<O: Write>(&self, records: Vec<Imei>, output: &mut O) -> Result<RoundReport> {
        let name = output::next_available_name(
            &self.storage,
            self.config.base_name(),
            self.config.extension(),
        )?;
        let output_path = self
            .storage
            .write_file(&name, output::render_records(&records).as_bytes())?;

        tracing::info!("Wrote {} IMEI(s) to {}", records.len(), output_path.display());
        writeln!(
            output,
            "{} IMEI saved to '{}'\n",
            records.len(),
            output_path.display()
        )?;

        Ok(RoundReport {
            records,
            output_path,
        })
    }
}

/// Writes `question`, reads one line and returns it trimmed.
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ImeiError::Interrupted);
    }
    Ok(line.trim().to_string())
}

/// Reports a recoverable error and yields `None` so the caller asks again.
fn retry_on_invalid<T, O: Write>(output: &mut O, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            tracing::debug!("Rejected input: {}", e);
            writeln!(output, "*** {}\n", e.user_friendly_message())?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
