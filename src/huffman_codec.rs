use std::io::{Read, Write};

use log::{debug, trace};

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::config::{CodecConfig, DecodeStrategy};
use crate::container::Container;
use crate::decoder::{LinearDecoder, TrieDecoder};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;

#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    pub fn new(config: CodecConfig) -> Self {
        HuffmanCodec { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Builds the code table for `data`.
    ///
    /// Fails with `EmptyInput` for empty data and `UnsupportedCodeLength`
    /// when the tree is deeper than 8 levels.
    pub fn code_table(data: &[u8]) -> Result<CodeTable> {
        let frequencies = FrequencyTable::from_bytes(data);
        debug!(
            "{} distinct symbols across {} bytes",
            frequencies.distinct(),
            frequencies.total()
        );

        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        trace!("huffman tree:\n{tree}");

        let table = tree.code_table()?;
        for (symbol, code) in table.iter() {
            trace!("{symbol:#04x} -> {code}");
        }
        Ok(table)
    }

    /// Compresses `data` into container bytes. Empty input gives an empty container.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            debug!("empty input, writing empty container");
            return Ok(Vec::new());
        }

        let table = Self::code_table(data)?;
        let container = self.encode(data, table)?;
        let bytes = container.serialize()?;

        debug!(
            "compressed {} bytes into {} ({} codes, {} payload bits, {} padding)",
            data.len(),
            bytes.len(),
            container.table.len(),
            container.payload_bit_count(),
            container.padding_bits
        );
        Ok(bytes)
    }

    /// Restores the original bytes from container bytes.
    pub fn decompress(&self, container: &[u8]) -> Result<Vec<u8>> {
        if container.is_empty() {
            debug!("empty container, nothing to decode");
            return Ok(Vec::new());
        }

        let container = Container::deserialize(container)?;
        let result = self.decode(&container)?;
        debug!(
            "decompressed {} payload bytes into {}",
            container.payload.len(),
            result.len()
        );
        Ok(result)
    }

    /// Encodes `data` with an existing table.
    pub fn encode(&self, data: &[u8], table: CodeTable) -> Result<Container> {
        let mut bit_vec = BitVec::with_capacity(table.encoded_bit_len(data));
        for &byte in data {
            let code = table.get(byte).ok_or(HuffmanError::UnknownSymbol(byte))?;
            bit_vec.push_code(code);
        }
        Ok(Container::new(table, bit_vec))
    }

    pub fn decode(&self, container: &Container) -> Result<Vec<u8>> {
        let bits = container.payload_bits()?;

        match self.config.decode_strategy {
            DecodeStrategy::Trie => TrieDecoder::new(&container.table)?.decode(&bits),
            DecodeStrategy::LinearScan => LinearDecoder::new(&container.table).decode(&bits),
        }
    }

    /// Reads all of `input`, compresses it and writes the container to `output`.
    ///
    /// Returns the number of bytes written.
    pub fn compress_from_reader<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<usize> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;

        let compressed = self.compress(&data)?;
        output.write_all(&compressed)?;
        output.flush()?;
        Ok(compressed.len())
    }

    /// Reads a whole container from `input` and writes the restored bytes to `output`.
    ///
    /// Returns the number of bytes written.
    pub fn decompress_from_reader<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<usize> {
        let mut container = Vec::new();
        input.read_to_end(&mut container)?;

        let decompressed = self.decompress(&container)?;
        output.write_all(&decompressed)?;
        output.flush()?;
        Ok(decompressed.len())
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor};

    use super::*;
    use crate::code_table::Code;

    const SAMPLE: &[u8] = b"Hello, world! This is a sample text for Huffman compression.";

    fn codecs() -> [HuffmanCodec; 2] {
        [
            HuffmanCodec::default(),
            HuffmanCodec::new(CodecConfig::new().with_decode_strategy(DecodeStrategy::LinearScan)),
        ]
    }

    #[test]
    fn roundtrip_with_both_strategies() {
        for codec in codecs() {
            let compressed = codec.compress(SAMPLE).unwrap();
            assert_eq!(codec.decompress(&compressed).unwrap(), SAMPLE);
        }
    }

    #[test]
    fn abc_container_bytes() {
        let codec = HuffmanCodec::default();
        let compressed = codec.compress(&[0x41, 0x41, 0x42, 0x43]).unwrap();
        assert_eq!(
            compressed,
            vec![0x02, 0x03, 0x01, 0x01, 0x41, 0x00, 0x02, 0x02, 0x42, 0x80, 0x43, 0xc0, 0x2c]
        );
        assert_eq!(codec.decompress(&compressed).unwrap(), vec![0x41, 0x41, 0x42, 0x43]);
    }

    #[test]
    fn empty_input_and_empty_container() {
        for codec in codecs() {
            assert!(codec.compress(&[]).unwrap().is_empty());
            assert!(codec.decompress(&[]).unwrap().is_empty());
        }
    }

    #[test]
    fn encode_with_foreign_table() {
        let codec = HuffmanCodec::default();
        let table = HuffmanCodec::code_table(b"abc").unwrap();

        let container = codec.encode(b"cab", table.clone()).unwrap();
        assert_eq!(codec.decode(&container).unwrap(), b"cab");

        let err = codec.encode(b"abd", table).unwrap_err();
        assert!(matches!(err, HuffmanError::UnknownSymbol(b'd')));
    }

    #[test]
    fn decode_reports_unmatched_bits() {
        let mut table = CodeTable::new();
        table.insert(0x41, Code::new(0b00, 2).unwrap());
        table.insert(0x42, Code::new(0b01, 2).unwrap());
        table.insert(0x43, Code::new(0b1, 1).unwrap());

        // "00 01 0" followed by two fill bits
        let container = Container {
            padding_bits: 3,
            table,
            payload: vec![0b0001_0000],
        };
        for codec in codecs() {
            assert!(matches!(
                codec.decode(&container),
                Err(HuffmanError::TruncatedPayload { leftover_bits: 1 })
            ));
        }
    }

    #[test]
    fn decode_rejects_oversized_padding() {
        let mut table = CodeTable::new();
        table.insert(0x41, Code::one_bit(false));
        let container = Container {
            padding_bits: 16,
            table,
            payload: vec![0, 0, 0],
        };
        for codec in codecs() {
            assert!(matches!(
                codec.decode(&container),
                Err(HuffmanError::MalformedHeader { offset: 0, .. })
            ));
        }
    }

    #[test]
    fn reader_helpers_roundtrip() {
        let codec = HuffmanCodec::default();

        let mut compressed = Vec::new();
        let written = codec
            .compress_from_reader(Cursor::new(SAMPLE), &mut compressed)
            .unwrap();
        assert_eq!(written, compressed.len());

        let mut restored = Vec::new();
        let written = codec
            .decompress_from_reader(Cursor::new(&compressed), &mut restored)
            .unwrap();
        assert_eq!(written, SAMPLE.len());
        assert_eq!(restored, SAMPLE);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn reader_failure_is_io_error() {
        let codec = HuffmanCodec::default();
        let err = codec
            .compress_from_reader(FailingReader, Vec::new())
            .unwrap_err();
        assert!(matches!(err, HuffmanError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
