//! h8ray - An H8S/2000 disassembler
//!
//! Usage:
//!   h8ray <file>                  Disassemble a raw binary image
//!   h8ray <file> --base 0x4000    Place the image at an address
//!   h8ray <file> --skip-raw-words Hide undecodable words

use anyhow::{Context, Result};
use clap::Parser;
use h8ray_core::InstructionRecord;
use h8ray_disasm::{render_line, H8Disassembler};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "h8ray")]
#[command(about = "An H8S/2000 disassembler", long_about = None)]
struct Cli {
    /// Path to the raw binary image
    file: PathBuf,

    /// Load address of the image
    #[arg(short, long, value_parser = parse_hex, default_value = "0")]
    base: usize,

    /// Omit `.word` lines emitted for undecodable byte pairs
    #[arg(long)]
    skip_raw_words: bool,
}

fn parse_hex(s: &str) -> Result<usize, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    usize::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.file)
        .with_context(|| format!("Failed to read image: {}", cli.file.display()))?;

    let disasm = H8Disassembler::new();
    let records = disasm
        .split(&data, cli.base)
        .context("Failed to disassemble image")?;

    print_listing(&records, cli.skip_raw_words);

    Ok(())
}

fn print_listing(records: &[InstructionRecord], skip_raw_words: bool) {
    for record in records {
        if skip_raw_words && record.is_sentinel() {
            continue;
        }
        println!("{}", render_line(record));
    }
}
