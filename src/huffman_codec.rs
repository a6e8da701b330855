use log::debug;

use crate::bit_vec::BitVec;
use crate::compressed_data::CompressedData;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;
use crate::metadata::Header;

/// Text recovered from an artifact, with the extension recorded at compress time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompressed {
    pub text: String,
    pub original_extension: String,
}

/// Compressor and decompressor.
///
/// Holds no state: every call derives its own frequency table, tree and
/// code table, so one value can serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    pub fn encode(text: &str, original_extension: &str) -> Result<CompressedData> {
        let frequency = FrequencyTable::analyze(text.chars())?;
        let tree = HuffmanTree::from_frequencies(&frequency)?;
        let codes = tree.generate_table();

        let bits = codes.encode(text)?;
        let payload = bits.to_padded_bytes();
        debug!(
            "encoded {} symbols ({} distinct) into {} bits, padding {}",
            text.chars().count(),
            frequency.len(),
            bits.len(),
            payload[0]
        );

        Ok(CompressedData {
            header: Header::new(frequency, original_extension),
            payload,
        })
    }

    pub fn decode(compressed: &CompressedData) -> Result<Decompressed> {
        let frequency = &compressed.header.frequency;
        let total = frequency.total()?;
        let tree = HuffmanTree::from_frequencies(frequency)?;

        let bits = BitVec::from_padded_bytes(&compressed.payload)?;
        let text = tree.decode(&bits)?;

        let decoded = text.chars().count() as u64;
        if decoded != total {
            return Err(HuffmanError::corrupt(format!(
                "expected {total} symbols, got {decoded}"
            )));
        }

        Ok(Decompressed {
            text,
            original_extension: compressed.header.original_extension.clone(),
        })
    }

    /// Encodes `text` straight to artifact bytes.
    pub fn compress(&self, text: &str, original_extension: &str) -> Result<Vec<u8>> {
        Self::encode(text, original_extension)?.serialize()
    }

    /// Parses artifact bytes and decodes them.
    pub fn decompress(&self, bytes: &[u8]) -> Result<Decompressed> {
        Self::decode(&CompressedData::deserialize(bytes)?)
    }
}
