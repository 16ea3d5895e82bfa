use std::io;

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Errors returned by the codec.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A symbol's code is longer than a header byte can hold.
    #[error("code for symbol {symbol:#04x} is {length} bits long, at most 8 are supported")]
    UnsupportedCodeLength { symbol: u8, length: usize },
    /// The code table header is cut short or inconsistent.
    #[error("malformed header at byte {offset}: {reason}")]
    MalformedHeader { offset: usize, reason: &'static str },
    /// Payload bits ran out in the middle of a code.
    #[error("truncated payload: {leftover_bits} bits do not form a complete code")]
    TruncatedPayload { leftover_bits: usize },
    /// No symbols to build a tree from.
    #[error("empty input has no Huffman tree")]
    EmptyInput,
    /// The code table has no entry for a byte being encoded.
    #[error("byte {0:#04x} not in code table")]
    UnknownSymbol(u8),
    #[error("priority queue: {0}")]
    Heap(#[from] HeapErr),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;

impl HuffmanError {
    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        HuffmanError::MalformedHeader { offset, reason }
    }
}
