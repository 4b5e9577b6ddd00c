use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two histories an operation needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Undo,
    Redo,
}

impl std::fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryKind::Undo => f.write_str("undo"),
            HistoryKind::Redo => f.write_str("redo"),
        }
    }
}

/// Errors raised by commands and the history manager.
///
/// Every operation that returns one of these has left the text and both
/// histories untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("nothing to {0}: the {0} history is empty")]
    EmptyHistory(HistoryKind),
    #[error("index {index} is out of range for text of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot delete a letter from empty text")]
    EmptyString,
    #[error("expected exactly one letter, got {0:?}")]
    InvalidLetter(String),
}
