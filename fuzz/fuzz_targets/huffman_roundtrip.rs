#![no_main]

use byte_huffman::{compress, decompress, HuffmanError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match compress(data) {
        Ok(compressed) => assert_eq!(data, decompress(&compressed).unwrap()),
        Err(HuffmanError::UnsupportedCodeLength { .. }) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
