use crate::utils::error::Result;
use rand::Rng;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn exists(&self, name: &str) -> Result<bool>;
    /// Writes `data` under `name` and returns the full path written.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &Path;
    fn base_name(&self) -> &str;
    fn extension(&self) -> &str;
}

/// Supplies the random padding digits of an IMEI body.
pub trait DigitSource {
    /// Returns a value in `0..radix`.
    fn next_digit(&mut self, radix: usize) -> usize;
}

/// Uniform digits drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomDigits<R> {
    rng: R,
}

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self, radix: usize) -> usize {
        self.rng.random_range(0..radix)
    }
}
