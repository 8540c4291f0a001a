//! Error types for numeral conversion and normalization

use thiserror::Error;

/// Errors raised while converting or normalizing numerals
#[derive(Debug, Error)]
pub enum Error {
    /// The numeral string is structurally invalid (e.g. two decimal points)
    #[error("malformed numeral '{input}': {reason}")]
    MalformedNumeral {
        /// The offending input
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// Numbering type outside of `low`, `mid` and `high`
    #[error("numbering type should be one of low, mid, high ('{0}' provided)")]
    InvalidNumberingType(String),

    /// A character in a Chinese numeral matches no digit, unit or math symbol
    #[error("unrecognized symbol '{symbol}' at position {position} in '{input}'")]
    UnrecognizedSymbol {
        /// The unmatched character
        symbol: char,
        /// Char index of the symbol within the input
        position: usize,
        /// The offending input
        input: String,
    },

    /// A fractional value beyond the range of `f64`
    #[error("numeral '{0}' is too large for a floating-point value")]
    Overflow(String),

    /// Invalid unit table definition
    #[error("unit table error: {0}")]
    UnitTable(String),

    /// I/O error while loading external tables
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Error::MalformedNumeral {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_numeral_display() {
        let error = Error::malformed("1.2.3", "more than one decimal point");
        assert_eq!(
            error.to_string(),
            "malformed numeral '1.2.3': more than one decimal point"
        );
    }

    #[test]
    fn test_unrecognized_symbol_display() {
        let error = Error::UnrecognizedSymbol {
            symbol: '个',
            position: 2,
            input: "一百个".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unrecognized symbol '个' at position 2 in '一百个'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("I/O error:"));
    }
}
