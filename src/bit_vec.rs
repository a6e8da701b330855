use crate::error::{HuffmanError, Result};

/// Growable sequence of bits stored MSB-first in bytes.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn extend_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).filter_map(move |i| self.get(i))
    }

    /// Packs the bits behind a one byte padding count.
    ///
    /// The padding count is `8 - len % 8`, so it is always in `1..=8`: an
    /// already aligned stream still gets a full zero byte appended.
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        let padding = 8 - self.bit_count % 8;
        let mut packed = Vec::with_capacity(self.bits.len() + 2);
        packed.push(padding as u8);
        packed.extend_from_slice(&self.bits);
        if padding == 8 {
            packed.push(0);
        }
        packed
    }

    /// Inverse of [`BitVec::to_padded_bytes`]: reads the padding count from
    /// the first byte and drops that many bits from the tail.
    pub fn from_padded_bytes(bytes: &[u8]) -> Result<Self> {
        let (&padding, bits) = bytes
            .split_first()
            .ok_or_else(|| HuffmanError::corrupt("payload is empty"))?;

        if !(1..=8).contains(&padding) {
            return Err(HuffmanError::corrupt(format!(
                "padding count {padding} is outside 1..=8"
            )));
        }
        let available = bits.len() * 8;
        let padding = padding as usize;
        if padding > available {
            return Err(HuffmanError::corrupt(format!(
                "padding count {padding} exceeds the {available} payload bits"
            )));
        }

        let bit_count = available - padding;
        let mut bits = bits.to_vec();
        bits.truncate(bit_count.div_ceil(8));
        if bit_count % 8 != 0 {
            if let Some(last) = bits.last_mut() {
                // keep stray padding bits out of later pushes
                *last &= 0xff << (8 - bit_count % 8);
            }
        }
        Ok(BitVec { bits, bit_count })
    }
}

impl From<&[bool]> for BitVec {
    fn from(bits: &[bool]) -> Self {
        let mut bit_vec = BitVec::new();
        bit_vec.extend_bits(bits);
        bit_vec
    }
}
