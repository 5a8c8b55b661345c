use thiserror::Error;

/// Why a hex string was not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexParseError {
    #[error("empty hex color")]
    Empty,

    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

#[derive(Error, Debug)]
pub enum TintError {
    #[error("invalid hex color: {0}")]
    InvalidHex(#[from] HexParseError),

    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, TintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_messages() {
        assert_eq!(HexParseError::Empty.to_string(), "empty hex color");
        assert_eq!(
            HexParseError::InvalidLength(2).to_string(),
            "hex color must have 3 or 6 digits, got 2"
        );
        assert_eq!(HexParseError::InvalidDigit('z').to_string(), "invalid hex digit 'z'");
    }

    #[test]
    fn test_invalid_hex_from() {
        let err = TintError::from(HexParseError::InvalidLength(4));
        assert_eq!(err.to_string(), "invalid hex color: hex color must have 3 or 6 digits, got 4");
    }

    #[test]
    fn test_unknown_palette() {
        let err = TintError::UnknownPalette("Sunset".to_string());
        assert_eq!(err.to_string(), "unknown palette: Sunset");
    }

    #[test]
    fn test_clipboard_error() {
        let err = TintError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "clipboard error: no display");
    }
}
