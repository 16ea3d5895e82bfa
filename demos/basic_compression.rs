use byte_huffman::HuffmanCodec;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let sample_path = dir.path().join("sample.txt");
    let compressed_path = dir.path().join("sample.huff");
    let restored_path = dir.path().join("restored.txt");

    // Create a sample file
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";

    std::fs::write(&sample_path, sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let codec = HuffmanCodec::default();

    // Compress the file
    let compressed_size =
        codec.compress_from_reader(File::open(&sample_path)?, File::create(&compressed_path)?)?;
    let compression_ratio = compressed_size as f64 / sample_text.len() as f64;

    println!(
        "Compressed to: {} bytes ({:.1}% of original)",
        compressed_size,
        compression_ratio * 100.0
    );

    // Decompress the file
    codec.decompress_from_reader(File::open(&compressed_path)?, File::create(&restored_path)?)?;

    // Verify the result
    let decompressed_text = std::fs::read_to_string(&restored_path)?;

    if sample_text == decompressed_text {
        println!("Decompression successful! Data matches exactly.");
    } else {
        println!("Decompression failed! Data mismatch.");
        return Err("Decompression verification failed".into());
    }

    Ok(())
}
