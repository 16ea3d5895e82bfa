//! # byte_huffman
//!
//! Static, byte-oriented Huffman compression. One pass counts byte
//! frequencies, builds a Huffman tree and derives a prefix-free code table;
//! the table is stored in a compact header grouped by code length, followed
//! by the bit-packed payload.
//!
//! Codes are limited to 8 bits, since the header stores each code in a single
//! byte. Inputs whose Huffman tree is deeper than that are rejected with
//! [`HuffmanError::UnsupportedCodeLength`].
//!
//! ## Quick Start
//!
//! ```rust
//! let compressed = byte_huffman::compress(b"abracadabra")?;
//! let restored = byte_huffman::decompress(&compressed)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), byte_huffman::HuffmanError>(())
//! ```

pub mod code_table;
pub mod config;
pub mod container;
pub mod error;
pub mod frequency;
pub mod header;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod bit_vec;
mod decoder;
mod min_heap;

// Re-export main types for convenience
pub use code_table::{Code, CodeTable, MAX_CODE_LENGTH};
pub use config::{CodecConfig, DecodeStrategy};
pub use container::Container;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::HuffmanCodec;
pub use hufftree::HuffmanTree;
pub use min_heap::HeapErr;

/// Compresses `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::default().compress(data)
}

/// Decompresses container bytes produced by [`compress`].
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::default().decompress(container)
}
