//! Code table header.
//!
//! ```text
//! [0]   padding bit count (0-7)
//! [1]   total code count
//!       per code length, shortest first:
//!         count, length, then `count` x (symbol, code left-justified in a byte)
//! ```
//!
//! A count byte of 0 stands for 256, which only a full alphabet of 8-bit
//! codes can reach.

use std::io::{Cursor, Read, Write};

use crate::code_table::{Code, CodeTable, MAX_CODE_LENGTH};
use crate::error::{HuffmanError, Result};

/// Everything the header tells the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub padding_bits: u8,
    pub table: CodeTable,
    /// Offset of the first payload byte from the start of the container.
    pub payload_offset: usize,
}

fn count_to_byte(count: usize) -> u8 {
    (count % 256) as u8
}

fn count_from_byte(byte: u8) -> usize {
    if byte == 0 {
        256
    } else {
        byte as usize
    }
}

/// Bytes taken by the padding byte plus the serialized table.
pub fn header_len(table: &CodeTable) -> usize {
    2 + table
        .by_length()
        .values()
        .map(|group| 2 + 2 * group.len())
        .sum::<usize>()
}

pub fn write_header<W: Write>(writer: &mut W, padding_bits: u8, table: &CodeTable) -> Result<()> {
    if table.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }
    if padding_bits > 7 {
        return Err(HuffmanError::malformed(0, "padding count above 7"));
    }

    writer.write_all(&[padding_bits, count_to_byte(table.len())])?;
    for (length, group) in table.by_length() {
        writer.write_all(&[count_to_byte(group.len()), length as u8])?;
        for (symbol, code) in group {
            writer.write_all(&[symbol, code.packed()])?;
        }
    }
    Ok(())
}

fn read_u8(cursor: &mut Cursor<&[u8]>, reason: &'static str) -> Result<u8> {
    let offset = cursor.position() as usize;
    let mut byte = [0u8; 1];
    cursor
        .read_exact(&mut byte)
        .map_err(|_| HuffmanError::malformed(offset, reason))?;
    Ok(byte[0])
}

/// Parses the header at the start of `container`.
pub fn read_header(container: &[u8]) -> Result<HeaderInfo> {
    let mut cursor = Cursor::new(container);

    let padding_bits = read_u8(&mut cursor, "missing padding count")?;
    if padding_bits > 7 {
        return Err(HuffmanError::malformed(0, "padding count above 7"));
    }
    let total = count_from_byte(read_u8(&mut cursor, "missing code count")?);

    let mut table = CodeTable::new();
    let mut recovered = 0;
    while recovered < total {
        let group_offset = cursor.position() as usize;
        let count = count_from_byte(read_u8(&mut cursor, "missing group count")?);
        let length = read_u8(&mut cursor, "missing code length")? as usize;

        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(HuffmanError::malformed(
                group_offset + 1,
                "code length outside 1..=8",
            ));
        }
        if recovered + count > total {
            return Err(HuffmanError::malformed(
                group_offset,
                "group exceeds declared code count",
            ));
        }

        for _ in 0..count {
            let entry_offset = cursor.position() as usize;
            let symbol = read_u8(&mut cursor, "missing symbol")?;
            let packed = read_u8(&mut cursor, "missing code")?;
            let code = Code::from_packed(packed, length)
                .ok_or_else(|| HuffmanError::malformed(entry_offset + 1, "invalid code"))?;
            if table.insert(symbol, code).is_some() {
                return Err(HuffmanError::malformed(entry_offset, "duplicate symbol"));
            }
        }
        recovered += count;
    }

    let payload_offset = cursor.position() as usize;
    if !table.is_prefix_free() {
        return Err(HuffmanError::malformed(
            payload_offset,
            "codes are not prefix-free",
        ));
    }

    Ok(HeaderInfo {
        padding_bits,
        table,
        payload_offset,
    })
}
