use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImeiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Symbol '{symbol}' at position {position} is not in the alphabet")]
    InvalidSymbolError { symbol: char, position: usize },

    #[error("Invalid alphabet: {reason}")]
    InvalidAlphabetError { reason: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input stream closed")]
    Interrupted,
}

impl ImeiError {
    /// Invalid input is recovered by asking again; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ImeiError::InvalidInputError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ImeiError::IoError(e) => format!("Could not read or write a file: {}", e),
            ImeiError::InvalidSymbolError { symbol, position } => {
                format!("'{}' at position {} is not a valid digit", symbol, position)
            }
            ImeiError::InvalidAlphabetError { reason } => format!("Bad digit alphabet: {}", reason),
            ImeiError::InvalidInputError { reason, .. } => format!("Invalid input: {}", reason),
            ImeiError::Interrupted => "Input closed before an answer was given".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImeiError::IoError(_) => "Check that the output directory exists and is writable",
            ImeiError::InvalidSymbolError { .. } | ImeiError::InvalidAlphabetError { .. } => {
                "Only use symbols from the configured alphabet"
            }
            ImeiError::InvalidInputError { .. } => "Re-run with corrected values (see --help)",
            ImeiError::Interrupted => "Run again and answer every prompt",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImeiError>;
