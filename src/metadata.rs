use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// Byte that ends the JSON header. Compact JSON escapes control characters
/// inside strings, so it never occurs in the header text itself.
pub const HEADER_DELIMITER: u8 = b'\n';

/// Everything the decoder needs besides the packed bits.
///
/// No code table is stored: the decoder rebuilds the tree from `frequency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub frequency: FrequencyTable,
    /// Extension of the source file including the dot, or empty.
    pub original_extension: String,
}

impl Header {
    pub fn new(frequency: FrequencyTable, original_extension: impl Into<String>) -> Self {
        Header {
            frequency,
            original_extension: original_extension.into(),
        }
    }

    /// Writes the header as compact JSON followed by [`HEADER_DELIMITER`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec(self)?;
        if bytes.contains(&HEADER_DELIMITER) {
            return Err(HuffmanError::format(
                "serialized header contains the delimiter byte",
            ));
        }
        bytes.push(HEADER_DELIMITER);
        Ok(bytes)
    }

    /// Parses header text (without the delimiter).
    pub fn from_json(text: &[u8]) -> Result<Self> {
        let header: Header = serde_json::from_slice(text)?;
        if header.frequency.is_empty() {
            return Err(HuffmanError::format("frequency table is empty"));
        }
        if let Some((symbol, _)) = header.frequency.iter().find(|&(_, count)| count == 0) {
            return Err(HuffmanError::format(format!(
                "symbol {symbol:?} has a count of 0"
            )));
        }
        header.frequency.total()?;
        Ok(header)
    }
}
