pub mod generator;
pub mod luhn;
pub mod output;
pub mod session;

pub use crate::domain::model::{Alphabet, Imei, Prefix, RoundReport};
pub use crate::domain::ports::{ConfigProvider, DigitSource, RandomDigits, Storage};
pub use crate::utils::error::Result;
