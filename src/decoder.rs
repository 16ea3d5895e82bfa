use log::warn;

use crate::bit_vec::BitVec;
use crate::code_table::{Code, CodeTable, MAX_CODE_LENGTH};
use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone, Copy)]
enum TrieNode {
    Branch { zero: Option<usize>, one: Option<usize> },
    Leaf(u8),
}

/// Binary trie over the code table, nodes stored in one arena.
#[derive(Debug, Clone)]
pub struct TrieDecoder {
    nodes: Vec<TrieNode>,
}

impl TrieDecoder {
    const ROOT: usize = 0;

    pub fn new(table: &CodeTable) -> Result<Self> {
        let mut nodes = vec![TrieNode::Branch {
            zero: None,
            one: None,
        }];

        for (symbol, code) in table.iter() {
            let mut current = Self::ROOT;
            for (i, bit) in code.iter().enumerate() {
                let last = i + 1 == code.len();
                let next = match nodes[current] {
                    TrieNode::Leaf(_) => None,
                    TrieNode::Branch { zero, one } => {
                        if bit {
                            one
                        } else {
                            zero
                        }
                    }
                };

                current = match (next, last) {
                    (None, _) => {
                        let child = nodes.len();
                        nodes.push(if last {
                            TrieNode::Leaf(symbol)
                        } else {
                            TrieNode::Branch {
                                zero: None,
                                one: None,
                            }
                        });
                        match &mut nodes[current] {
                            TrieNode::Branch { zero, one } => {
                                if bit {
                                    *one = Some(child);
                                } else {
                                    *zero = Some(child);
                                }
                            }
                            TrieNode::Leaf(_) => return Err(Self::prefix_clash()),
                        }
                        child
                    }
                    (Some(child), false) if matches!(nodes[child], TrieNode::Branch { .. }) => {
                        child
                    }
                    (Some(_), _) => return Err(Self::prefix_clash()),
                };
            }
        }

        Ok(TrieDecoder { nodes })
    }

    fn prefix_clash() -> HuffmanError {
        HuffmanError::malformed(0, "codes are not prefix-free")
    }

    pub fn decode(&self, bits: &BitVec) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(bits.bit_count() / MAX_CODE_LENGTH);
        let mut current = Self::ROOT;
        let mut pending = 0;

        for bit in bits.iter() {
            let next = match self.nodes[current] {
                TrieNode::Branch { zero, one } => {
                    if bit {
                        one
                    } else {
                        zero
                    }
                }
                TrieNode::Leaf(_) => None,
            };
            pending += 1;

            // no code continues this way, so these bits can never match
            let Some(next) = next else {
                warn!("no code matches the next {pending} payload bits");
                return Err(HuffmanError::TruncatedPayload {
                    leftover_bits: pending,
                });
            };

            match self.nodes[next] {
                TrieNode::Leaf(symbol) => {
                    result.push(symbol);
                    current = Self::ROOT;
                    pending = 0;
                }
                TrieNode::Branch { .. } => current = next,
            }
        }

        finish(result, pending)
    }
}

/// Matches the growing candidate against every entry after each bit.
#[derive(Debug, Clone, Copy)]
pub struct LinearDecoder<'a> {
    table: &'a CodeTable,
}

impl<'a> LinearDecoder<'a> {
    pub fn new(table: &'a CodeTable) -> Self {
        LinearDecoder { table }
    }

    pub fn decode(&self, bits: &BitVec) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(bits.bit_count() / MAX_CODE_LENGTH);
        let mut candidate: u8 = 0;
        let mut pending = 0;

        for bit in bits.iter() {
            if pending == MAX_CODE_LENGTH {
                warn!("no code matches the next {} payload bits", pending + 1);
                return Err(HuffmanError::TruncatedPayload {
                    leftover_bits: pending + 1,
                });
            }
            candidate = (candidate << 1) | bit as u8;
            pending += 1;

            let matched = Code::new(candidate, pending).and_then(|code| {
                self.table
                    .iter()
                    .find(|(_, entry)| *entry == code)
                    .map(|(symbol, _)| symbol)
            });
            if let Some(symbol) = matched {
                result.push(symbol);
                candidate = 0;
                pending = 0;
            }
        }

        finish(result, pending)
    }
}

fn finish(result: Vec<u8>, pending: usize) -> Result<Vec<u8>> {
    if pending != 0 {
        warn!("payload ended {pending} bits into a code");
        return Err(HuffmanError::TruncatedPayload {
            leftover_bits: pending,
        });
    }
    Ok(result)
}
