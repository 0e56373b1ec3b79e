use crate::utils::error::{ImeiError, Result};
use crate::utils::validation;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

pub const IMEI_LEN: usize = 15;
pub const BODY_LEN: usize = IMEI_LEN - 1;
pub const TAC_LEN: usize = 8;

/// Ordered set of symbols; a symbol's index is its digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub const DECIMAL: &'static str = "0123456789";

    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(ImeiError::InvalidAlphabetError {
                reason: "alphabet cannot be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for symbol in symbols.chars() {
            if !seen.insert(symbol) {
                return Err(ImeiError::InvalidAlphabetError {
                    reason: format!("symbol '{}' appears more than once", symbol),
                });
            }
        }

        Ok(Self {
            symbols: symbols.chars().collect(),
        })
    }

    pub fn decimal() -> Self {
        Self {
            symbols: Self::DECIMAL.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Panics if `index >= self.len()`.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn zero(&self) -> char {
        self.symbols[0]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::decimal()
    }
}

/// The user-supplied leading digits of an IMEI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn parse(value: &str) -> Result<Self> {
        validation::validate_prefix(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete 15 digit IMEI whose last digit is the Luhn check digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imei(String);

impl Imei {
    pub(crate) fn from_body(mut body: String, check_digit: char) -> Self {
        debug_assert_eq!(body.len(), BODY_LEN);
        body.push(check_digit);
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Type Allocation Code, digits 1-8.
    pub fn tac(&self) -> &str {
        &self.0[..TAC_LEN]
    }

    /// Serial number, digits 9-14.
    pub fn serial(&self) -> &str {
        &self.0[TAC_LEN..BODY_LEN]
    }

    pub fn check_digit(&self) -> char {
        self.0.as_bytes()[BODY_LEN] as char
    }
}

impl fmt::Display for Imei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct RoundReport {
    pub records: Vec<Imei>,
    pub output_path: PathBuf,
}
