use log::debug;

use crate::error::{HuffmanError, Result};
use crate::metadata::{Header, HEADER_DELIMITER};

/// A compressed artifact: JSON header, delimiter, then the padded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    pub header: Header,
    /// Padding count byte followed by the packed code bits.
    pub payload: Vec<u8>,
}

impl CompressedData {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut bytes = self.header.to_bytes()?;
        debug!(
            "header {} bytes, payload {} bytes",
            bytes.len(),
            self.payload.len()
        );
        bytes.extend_from_slice(&self.payload);
        Ok(bytes)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<CompressedData> {
        let end = bytes
            .iter()
            .position(|&b| b == HEADER_DELIMITER)
            .ok_or_else(|| HuffmanError::format("no header delimiter found"))?;

        let header = Header::from_json(&bytes[..end])?;
        Ok(CompressedData {
            header,
            payload: bytes[end + 1..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    #[test]
    fn payload_may_contain_the_delimiter() {
        let data = CompressedData {
            header: Header::new(FrequencyTable::analyze("ab".chars()).unwrap(), ""),
            payload: vec![6, b'\n', b'\n'],
        };
        let bytes = data.serialize().unwrap();
        assert_eq!(CompressedData::deserialize(&bytes).unwrap(), data);
    }

    #[test]
    fn missing_delimiter_is_a_format_error() {
        assert!(matches!(
            CompressedData::deserialize(br#"{"frequency":{"a":1},"original_extension":""}"#),
            Err(HuffmanError::Format { .. })
        ));
    }

    #[test]
    fn undecodable_header_is_a_format_error() {
        assert!(matches!(
            CompressedData::deserialize(b"\xff\xfe\n\x08\x00"),
            Err(HuffmanError::Format { .. })
        ));
    }
}
