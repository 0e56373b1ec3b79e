pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{generator::ImeiGenerator, session::ImeiSession};
pub use utils::error::{ImeiError, Result};
