use std::collections::BTreeMap;
use std::fmt;

/// Longest code a header byte can store.
pub const MAX_CODE_LENGTH: usize = 8;

/// A Huffman code of 1 to 8 bits, held right-aligned in `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    bits: u8,
    len: u8,
}

impl Code {
    /// Returns `None` if `len` is outside 1..=8 or `bits` has bits above `len`.
    pub fn new(bits: u8, len: usize) -> Option<Self> {
        if len == 0 || len > MAX_CODE_LENGTH {
            return None;
        }
        if (bits as u16) >> len != 0 {
            return None;
        }
        Some(Code { bits, len: len as u8 })
    }

    /// A single-bit code.
    pub const fn one_bit(bit: bool) -> Self {
        Code {
            bits: bit as u8,
            len: 1,
        }
    }

    /// Takes the top `len` bits of a left-justified header byte.
    pub fn from_packed(byte: u8, len: usize) -> Option<Self> {
        if len == 0 || len > MAX_CODE_LENGTH {
            return None;
        }
        Code::new(byte >> (MAX_CODE_LENGTH - len), len)
    }

    /// Left-justified, zero-filled form stored in the header.
    pub fn packed(&self) -> u8 {
        self.bits << (MAX_CODE_LENGTH - self.len())
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// The `i`th bit counting from the first one emitted.
    pub fn bit(&self, i: usize) -> bool {
        (self.bits >> (self.len() - 1 - i)) & 1 == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping produced from one input, ordered by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code previously held by `symbol`, if any.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes.iter().map(|(&symbol, &code)| (symbol, code))
    }

    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Codes grouped by length, shortest first; symbols ascend within a group.
    pub fn by_length(&self) -> BTreeMap<usize, Vec<(u8, Code)>> {
        let mut groups: BTreeMap<usize, Vec<(u8, Code)>> = BTreeMap::new();
        for (symbol, code) in self.iter() {
            groups.entry(code.len()).or_default().push((symbol, code));
        }
        groups
    }

    /// Total payload bits needed to encode `data` with this table.
    pub fn encoded_bit_len(&self, data: &[u8]) -> usize {
        data.iter()
            .filter_map(|byte| self.get(*byte))
            .map(Code::len)
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<Code> = self.codes.values().copied().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}
