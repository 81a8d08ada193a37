use std::path::PathBuf;

/// Errors raised by the board engine and the search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is off the board")]
    InvalidColumn(usize),

    #[error("both colours occupy the same cells (mask {overlap:#x})")]
    CorruptState { overlap: u64 },

    #[error("column {column} has an empty cell below a disc at row {row}")]
    FloatingDisc { column: usize, row: usize },

    #[error("no legal move, the board is full")]
    NoLegalMove,

    #[error("a definite disc colour is required")]
    InvalidColor,

    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveChar(char),

    #[error("invalid position, game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_error_display() {
        assert_eq!(ConnectError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            ConnectError::CorruptState { overlap: 0x11 }.to_string(),
            "both colours occupy the same cells (mask 0x11)"
        );
        assert_eq!(
            ConnectError::FloatingDisc { column: 2, row: 1 }.to_string(),
            "column 2 has an empty cell below a disc at row 1"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("search.max_depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.max_depth must be >= 1"
        );
    }
}
