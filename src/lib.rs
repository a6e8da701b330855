//! # rust_huffman
//!
//! Huffman compression for text. An artifact is a one-line JSON header
//! holding the symbol frequencies, followed by the packed code bits. The
//! decoder rebuilds the same tree from the frequencies, so no code table is
//! stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec;
//! let bytes = codec.compress("abracadabra", ".txt")?;
//! let decoded = codec.decompress(&bytes)?;
//! assert_eq!(decoded.text, "abracadabra");
//! assert_eq!(decoded.original_extension, ".txt");
//! # Ok::<(), rust_huffman::HuffmanError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod compressed_data;
pub mod config;
pub mod error;
pub mod files;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod metadata;

// Internal modules - not part of public API
mod min_heap;

// Re-export main types for convenience
pub use code_table::{Code, CodeTable};
pub use compressed_data::CompressedData;
pub use config::Config;
pub use error::{HuffmanError, Result};
pub use files::{compress_file, decompress_file, CompressionReport};
pub use frequency::FrequencyTable;
pub use huffman_codec::{Decompressed, HuffmanCodec};
pub use hufftree::{HuffNode, HuffmanTree};
pub use metadata::Header;
