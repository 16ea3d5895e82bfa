use crate::code_table::Code;
use crate::error::{HuffmanError, Result};

/// Growable bit string packed MSB-first into bytes.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn with_capacity(bit_capacity: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_capacity.div_ceil(8)),
            bit_count: 0,
        }
    }

    /// Reverses packing: drops the trailing `padding` fill bits of `bytes`.
    ///
    /// Fails if `padding` is above 7, if there are fewer bits than `padding`,
    /// or if any fill bit is set, since the packer only ever writes zeros there.
    pub fn unpack(bytes: &[u8], padding: u8) -> Result<Self> {
        if padding > 7 {
            return Err(HuffmanError::malformed(0, "padding count above 7"));
        }
        let padding = padding as usize;
        let total = bytes.len() * 8;
        if padding > total {
            return Err(HuffmanError::TruncatedPayload {
                leftover_bits: total,
            });
        }
        if let Some(&last) = bytes.last() {
            let fill_mask = (1u8 << padding) - 1;
            if last & fill_mask != 0 {
                return Err(HuffmanError::TruncatedPayload {
                    leftover_bits: padding,
                });
            }
        }
        Ok(BitVec {
            bits: bytes.to_vec(),
            bit_count: total - padding,
        })
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Zero bits filling out the last byte, 0 through 7.
    pub fn padding(&self) -> u8 {
        ((8 - self.bit_count % 8) % 8) as u8
    }

    /// Packed bytes and the padding count.
    pub fn into_packed(self) -> (Vec<u8>, u8) {
        let padding = self.padding();
        (self.bits, padding)
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            // set bit with OR  and mask
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for bit in code.iter() {
            self.push_bit(bit);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| (self.bits[i / 8] >> (7 - i % 8)) & 1 == 1)
    }
}
