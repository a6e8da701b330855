use thiserror::Error;

use crate::min_heap::HeapError;

/// Errors produced while compressing or decompressing.
///
/// Every variant is terminal for the operation in progress; nothing here is
/// worth retrying.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// The input held zero symbols, so there is nothing to build a tree from.
    #[error("cannot build a code from an empty input")]
    EmptyInput,

    /// The header is missing, malformed or lacks a required field.
    #[error("invalid header: {message}")]
    Format { message: String },

    /// The payload is truncated or does not describe a walk through the tree.
    #[error("corrupt stream: {message}")]
    CorruptStream { message: String },

    /// A symbol was handed to the encoder that the code table does not know.
    #[error("symbol {symbol:?} is not in the code table")]
    UnsupportedSymbol { symbol: char },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::CorruptStream {
            message: message.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for HuffmanError {
    fn from(e: serde_json::Error) -> Self {
        Self::format(e.to_string())
    }
}

impl From<HeapError> for HuffmanError {
    fn from(e: HeapError) -> Self {
        match e {
            // the builder only pops while two or more nodes are queued
            HeapError::Underflow => Self::EmptyInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            HuffmanError::UnsupportedSymbol { symbol: 'x' }.to_string(),
            "symbol 'x' is not in the code table"
        );
        assert_eq!(
            HuffmanError::corrupt("ran out of bits").to_string(),
            "corrupt stream: ran out of bits"
        );
    }

    #[test]
    fn json_errors_become_format_errors() {
        let err: HuffmanError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, HuffmanError::Format { .. }));
    }
}
