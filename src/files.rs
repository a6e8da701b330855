//! File front end: reads sources, names outputs, and measures the result.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::Config;
use crate::error::{HuffmanError, Result};
use crate::huffman_codec::HuffmanCodec;

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub output_path: PathBuf,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Output size over input size, rounded to 4 decimals.
    pub compression_ratio: f64,
    /// `(1 - ratio) * 100`, rounded to 2 decimals.
    pub percentage_saved: f64,
    pub elapsed: Duration,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            HuffmanError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            ))
        })
}

fn extension_with_dot(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Compresses the text file at `path` into `config.compressed_dir`.
///
/// Bytes that are not valid UTF-8 are replaced, so such files do not
/// round-trip byte for byte.
pub fn compress_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<CompressionReport> {
    let path = path.as_ref();
    let start = Instant::now();

    let stem = file_stem(path)?;
    let original_extension = extension_with_dot(path);
    let output_path = config.compressed_dir.join(format!("{stem}_compressed.bin"));

    let raw = fs::read(path)?;
    let text = String::from_utf8_lossy(&raw);
    if let Cow::Owned(_) = text {
        warn!(
            "{} is not valid UTF-8; invalid sequences were replaced",
            path.display()
        );
    }

    let bytes = HuffmanCodec.compress(&text, &original_extension)?;
    fs::create_dir_all(&config.compressed_dir)?;
    fs::write(&output_path, &bytes)?;
    let elapsed = start.elapsed();

    let input_bytes = raw.len() as u64;
    let output_bytes = bytes.len() as u64;
    let compression_ratio = output_bytes as f64 / input_bytes as f64;
    info!(
        "compressed {} -> {} ({input_bytes} -> {output_bytes} bytes)",
        path.display(),
        output_path.display()
    );

    Ok(CompressionReport {
        output_path,
        input_bytes,
        output_bytes,
        compression_ratio: round_to(compression_ratio, 4),
        percentage_saved: round_to((1.0 - compression_ratio) * 100.0, 2),
        elapsed,
    })
}

/// Decompresses the artifact at `path` into `config.decompressed_dir` and
/// returns the path written.
pub fn decompress_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<PathBuf> {
    let path = path.as_ref();
    let stem = file_stem(path)?;

    let bytes = fs::read(path)?;
    let decompressed = HuffmanCodec.decompress(&bytes)?;

    let ext = &decompressed.original_extension;
    if !(ext.is_empty() || ext.starts_with('.')) || ext.contains(['/', '\\']) {
        return Err(HuffmanError::format(format!(
            "original_extension {ext:?} is not a file extension"
        )));
    }

    fs::create_dir_all(&config.decompressed_dir)?;
    let output_path = config
        .decompressed_dir
        .join(format!("{stem}_decompressed{ext}"));
    fs::write(&output_path, decompressed.text.as_bytes())?;
    info!("decompressed {} -> {}", path.display(), output_path.display());

    Ok(output_path)
}
