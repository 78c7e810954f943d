use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser};
use progress_report::{read_records, Progress, ReadOptions};

mod io_pipe;
use io_pipe::IoPipe;

/// Show how many items are solved per category, per tag and overall.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    io: IoArgs,

    /// Field delimiter of the input rows.
    #[arg(short, long, default_value = ",", value_parser = ascii_byte)]
    delimiter: u8,

    /// Quote character for fields that contain the delimiter.
    #[arg(short, long, default_value = "|", value_parser = ascii_byte)]
    quote: u8,

    /// Skip rows with fewer than five fields instead of failing.
    #[arg(long)]
    skip_malformed: bool,
}

/// Input and output locations of the report.
#[derive(Debug, Args, Clone)]
pub struct IoArgs {
    /// Input file path, use '-' for stdin.
    #[arg(default_value = "crc32s.txt")]
    input: PathBuf,

    /// Output file path, defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn ascii_byte(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("expected a single ASCII character, got {s:?}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let io = IoPipe::try_from(&cli.io)?;
    let options = ReadOptions {
        delimiter: cli.delimiter,
        quote: cli.quote,
        skip_malformed: cli.skip_malformed,
    };

    let progress: Progress = read_records(io.read_text(), &options)?
        .into_iter()
        .collect();

    log::debug!(
        "{} categories, {} tags over {} records",
        progress.categories().len(),
        progress.tags().len(),
        progress.total().total
    );

    io.write_text(progress.to_string())
}
