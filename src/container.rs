use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::header::{self, HeaderInfo};

/// A compressed stream: padding count, code table header, packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub padding_bits: u8,
    pub table: CodeTable,
    pub payload: Vec<u8>,
}

impl Container {
    pub(crate) fn new(table: CodeTable, bits: BitVec) -> Self {
        let (payload, padding_bits) = bits.into_packed();
        Container {
            padding_bits,
            table,
            payload,
        }
    }

    /// Total bits the payload carries, padding excluded.
    pub fn payload_bit_count(&self) -> usize {
        (self.payload.len() * 8).saturating_sub(self.padding_bits as usize)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(header::header_len(&self.table) + self.payload.len());
        header::write_header(&mut bytes, self.padding_bits, &self.table)?;
        bytes.extend_from_slice(&self.payload);
        Ok(bytes)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Container> {
        let HeaderInfo {
            padding_bits,
            table,
            payload_offset,
        } = header::read_header(bytes)?;

        Ok(Container {
            padding_bits,
            table,
            payload: bytes[payload_offset..].to_vec(),
        })
    }

    /// Unpacked payload. Any non-empty table encodes at least one bit, so an
    /// empty payload under a table means the payload was cut off.
    pub(crate) fn payload_bits(&self) -> Result<BitVec> {
        let bits = BitVec::unpack(&self.payload, self.padding_bits)?;
        if bits.bit_count() == 0 && !self.table.is_empty() {
            return Err(HuffmanError::TruncatedPayload { leftover_bits: 0 });
        }
        Ok(bits)
    }
}
