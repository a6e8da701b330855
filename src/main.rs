use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};

use rust_huffman::{compress_file, decompress_file, CompressedData, Config, HuffmanTree};

#[derive(Parser)]
#[command(name = "huff", version, about = "Huffman compression for text files")]
struct Cli {
    /// JSON file with output directory settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Turn log output off
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a text file into <out-dir>/<stem>_compressed.bin
    Compress {
        file: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Restore a file written by `compress`
    Decompress {
        file: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the header, rebuilt tree and codes of a compressed file
    Inspect { file: PathBuf },
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                Level::Info => eprintln!("{}", record.args()),
                level => eprintln!("[{level}] {}", record.args()),
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Off,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = log_level(verbose, quiet);
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("installing logger: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

fn inspect(file: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(file).context(format!("reading from {}", file.display()))?;
    let compressed = CompressedData::deserialize(&bytes).context("parsing compressed file")?;
    let header = &compressed.header;

    println!("Original extension: {:?}", header.original_extension);
    println!(
        "Symbols: {} ({} distinct)",
        header.frequency.total()?,
        header.frequency.len()
    );
    println!(
        "Payload: {} bytes, padding {} bits",
        compressed.payload.len(),
        compressed.payload.first().copied().unwrap_or(0)
    );

    let tree = HuffmanTree::from_frequencies(&header.frequency)
        .context("rebuilding the tree from the frequency table")?;
    print!("{tree}");
    for (symbol, code) in tree.generate_table().iter() {
        println!("{symbol:?}\t{}\t{code}", header.frequency.get(symbol).unwrap_or(0));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .context(format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Command::Compress { file, out_dir } => {
            if let Some(dir) = out_dir {
                config.compressed_dir = dir;
            }
            config.validate()?;
            let report = compress_file(&file, &config)
                .context(format!("compressing {}", file.display()))?;
            println!("File path: {}", report.output_path.display());
            println!("Compression ratio: {}", report.compression_ratio);
            println!("Percentage saved: {}%", report.percentage_saved);
            println!("Time taken: {:.4}s", report.elapsed.as_secs_f64());
        }
        Command::Decompress { file, out_dir } => {
            if let Some(dir) = out_dir {
                config.decompressed_dir = dir;
            }
            config.validate()?;
            let output = decompress_file(&file, &config)
                .context(format!("decompressing {}", file.display()))?;
            println!("File path: {}", output.display());
        }
        Command::Inspect { file } => inspect(&file)?,
    }
    Ok(())
}
