/// How the decoder matches payload bits against the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeStrategy {
    /// Walk a binary trie built from the table, one step per bit.
    #[default]
    Trie,
    /// Compare the accumulated candidate against every table entry after each bit.
    LinearScan,
}

#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    pub decode_strategy: DecodeStrategy,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decode_strategy(mut self, strategy: DecodeStrategy) -> Self {
        self.decode_strategy = strategy;
        self
    }
}
