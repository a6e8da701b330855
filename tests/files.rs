use std::fs;

use rust_huffman::{compress_file, decompress_file, Config, HuffmanError};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config {
        compressed_dir: dir.path().join("compressed"),
        decompressed_dir: dir.path().join("decompressed"),
    }
}

#[test]
fn file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let source = dir.path().join("notes.md");
    let text = "# Notes\n\nabracadabra abracadabra abracadabra\n".repeat(20);
    fs::write(&source, &text).unwrap();

    let report = compress_file(&source, &config).unwrap();
    assert_eq!(report.output_path, config.compressed_dir.join("notes_compressed.bin"));
    assert_eq!(report.input_bytes, text.len() as u64);
    assert_eq!(report.output_bytes, fs::metadata(&report.output_path).unwrap().len());
    assert!(report.compression_ratio < 1.0);
    assert!(report.percentage_saved > 0.0);

    let restored = decompress_file(&report.output_path, &config).unwrap();
    assert_eq!(
        restored,
        config.decompressed_dir.join("notes_compressed_decompressed.md")
    );
    assert_eq!(fs::read_to_string(restored).unwrap(), text);
}

#[test]
fn file_without_extension() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let source = dir.path().join("README");
    fs::write(&source, "read me").unwrap();

    let report = compress_file(&source, &config).unwrap();
    let restored = decompress_file(&report.output_path, &config).unwrap();
    assert_eq!(restored.file_name().unwrap(), "README_compressed_decompressed");
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let source = dir.path().join("binary.txt");
    fs::write(&source, b"ok\xffok").unwrap();

    let report = compress_file(&source, &config).unwrap();
    let restored = decompress_file(&report.output_path, &config).unwrap();
    assert_eq!(fs::read_to_string(restored).unwrap(), "ok\u{fffd}ok");
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("empty.txt");
    fs::write(&source, "").unwrap();

    assert!(matches!(
        compress_file(&source, &config_in(&dir)),
        Err(HuffmanError::EmptyInput)
    ));
}

#[test]
fn failed_compression_leaves_no_output_dir() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        compress_file(&missing, &config),
        Err(HuffmanError::Io(_))
    ));

    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();
    assert!(compress_file(&empty, &config).is_err());

    assert!(!config.compressed_dir.exists());
}

#[test]
fn extension_cannot_escape_the_output_dir() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let artifact = dir.path().join("evil.bin");
    fs::write(
        &artifact,
        b"{\"frequency\":{\"a\":1},\"original_extension\":\"/../../x\"}\n\x07\x00",
    )
    .unwrap();

    assert!(matches!(
        decompress_file(&artifact, &config),
        Err(HuffmanError::Format { .. })
    ));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huff.json");
    fs::write(&path, r#"{"decompressed_dir":"restored"}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.compressed_dir, Config::default().compressed_dir);
    assert_eq!(config.decompressed_dir.to_str(), Some("restored"));

    fs::write(&path, r#"{"compressed_dir":""}"#).unwrap();
    assert!(matches!(
        Config::from_file(&path),
        Err(HuffmanError::Configuration { .. })
    ));
}
