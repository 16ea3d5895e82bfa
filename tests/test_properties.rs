#[cfg(test)]
mod tests {
    use byte_huffman::header::read_header;
    use byte_huffman::{
        compress, decompress, CodecConfig, DecodeStrategy, HuffmanCodec, HuffmanError,
        HuffmanTree, MAX_CODE_LENGTH,
    };
    use proptest::prelude::*;

    fn small_alphabet() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..12, 1..4096)
    }

    fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 1..2048)
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in small_alphabet()) {
            match compress(&data) {
                Ok(compressed) => {
                    prop_assert_eq!(decompress(&compressed).unwrap(), data)
                }
                Err(HuffmanError::UnsupportedCodeLength { length, .. }) => {
                    prop_assert!(length > MAX_CODE_LENGTH)
                }
                Err(e) => {
                    prop_assert!(false, "unexpected error {e:?}")
                }
            }
        }

        #[test]
        fn prop_roundtrip_or_reject_deep_tree(data in any_bytes()) {
            let depth = HuffmanTree::from_bytes(&data).unwrap().depth();
            match compress(&data) {
                Ok(compressed) => {
                    prop_assert!(depth <= MAX_CODE_LENGTH);
                    prop_assert_eq!(decompress(&compressed).unwrap(), data);
                }
                Err(HuffmanError::UnsupportedCodeLength { .. }) => {
                    prop_assert!(depth > MAX_CODE_LENGTH)
                }
                Err(e) => {
                    prop_assert!(false, "unexpected error {e:?}")
                }
            }
        }

        #[test]
        fn prop_codes_are_prefix_free(data in any_bytes()) {
            if let Ok(table) = HuffmanCodec::code_table(&data) {
                let codes: Vec<_> = table.iter().collect();
                for (i, (_, a)) in codes.iter().enumerate() {
                    for (j, (_, b)) in codes.iter().enumerate() {
                        if i != j {
                            prop_assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_header_size_accounting(data in small_alphabet()) {
            if let Ok(compressed) = compress(&data) {
                let info = read_header(&compressed).unwrap();
                let expected = 2 + info
                    .table
                    .by_length()
                    .values()
                    .map(|group| 2 + 2 * group.len())
                    .sum::<usize>();
                prop_assert_eq!(info.payload_offset, expected);

                let bit_len = info.table.encoded_bit_len(&data);
                prop_assert_eq!(compressed.len() - info.payload_offset, bit_len.div_ceil(8));
            }
        }

        #[test]
        fn prop_padding_bound(data in small_alphabet()) {
            if let Ok(compressed) = compress(&data) {
                let table = HuffmanCodec::code_table(&data).unwrap();
                let bit_len = table.encoded_bit_len(&data);
                prop_assert!(compressed[0] <= 7);
                prop_assert_eq!(compressed[0] as usize, (8 - bit_len % 8) % 8);
            }
        }

        #[test]
        fn prop_strategies_agree(data in small_alphabet()) {
            let linear = HuffmanCodec::new(
                CodecConfig::new().with_decode_strategy(DecodeStrategy::LinearScan),
            );
            if let Ok(compressed) = compress(&data) {
                prop_assert_eq!(
                    linear.decompress(&compressed).unwrap(),
                    HuffmanCodec::default().decompress(&compressed).unwrap()
                );
            }
        }

        #[test]
        fn prop_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = decompress(&bytes);
        }
    }
}
