//! Luhn checksum over an arbitrary positional alphabet.
//!
//! With the default decimal alphabet this is the classic mod-10 Luhn check used
//! for IMEIs and card numbers. Any alphabet of N distinct symbols gives the
//! mod-N generalization: doubled values are folded by summing their base-N digits.

use crate::domain::model::Alphabet;
use crate::utils::error::{ImeiError, Result};

/// Returns the Luhn checksum of `number`, a value in `0..alphabet.len()`.
///
/// A checksum of 0 means `number` already ends in a valid check digit.
pub fn checksum(number: &str, alphabet: &Alphabet) -> Result<usize> {
    let n = alphabet.len();
    let values = number
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            alphabet
                .index_of(symbol)
                .ok_or(ImeiError::InvalidSymbolError { symbol, position })
        })
        .collect::<Result<Vec<usize>>>()?;

    let total: usize = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &value)| {
            if i % 2 == 0 {
                value
            } else {
                let doubled = value * 2;
                doubled / n + doubled % n
            }
        })
        .sum();

    Ok(total % n)
}

/// Returns the symbol that, appended to `number`, makes its checksum 0.
pub fn calc_check_digit(number: &str, alphabet: &Alphabet) -> Result<char> {
    let mut padded = String::with_capacity(number.len() + 1);
    padded.push_str(number);
    padded.push(alphabet.zero());

    let n = alphabet.len();
    let sum = checksum(&padded, alphabet)?;
    Ok(alphabet.symbol((n - sum) % n))
}

/// True when `number` carries a correct check digit. Foreign symbols make it invalid.
pub fn is_valid(number: &str, alphabet: &Alphabet) -> bool {
    matches!(checksum(number, alphabet), Ok(0))
}
