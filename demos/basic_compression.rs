use rust_huffman::{compress_file, decompress_file, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = std::env::temp_dir().join("rust_huffman_demo");
    std::fs::create_dir_all(&workdir)?;

    // Create a sample file
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";

    let sample_path = workdir.join("sample.txt");
    std::fs::write(&sample_path, sample_text)?;

    println!("📝 Created sample file: {} bytes", sample_text.len());

    let config = Config {
        compressed_dir: workdir.join("compressed"),
        decompressed_dir: workdir.join("decompressed"),
    };

    // Compress the file
    let report = compress_file(&sample_path, &config)?;

    println!(
        "🗜️  Compressed to: {} bytes ({:.1}% saved, ratio {})",
        report.output_bytes, report.percentage_saved, report.compression_ratio
    );

    // Decompress the file
    let restored_path = decompress_file(&report.output_path, &config)?;

    // Verify the result
    let decompressed_text = std::fs::read_to_string(&restored_path)?;

    if sample_text == decompressed_text {
        println!("✅ Decompression successful! Data matches exactly.");
    } else {
        println!("❌ Decompression failed! Data mismatch.");
        return Err("Decompression verification failed".into());
    }

    // Cleanup
    std::fs::remove_dir_all(&workdir)?;

    println!("🧹 Cleaned up temporary files");

    Ok(())
}
