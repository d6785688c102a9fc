use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use bijoy_rs::converter::BijoyConverter;
use bijoy_rs::glyph_map::GlyphMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Converted text, line breaks preserved
    Text,
    /// One JSON record per non-empty input line
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON object of extra or replacement glyph mappings
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Limit number of records (jsonl only)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    output: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();

    let start_load = Instant::now();
    let converter = BijoyConverter::new(match &args.map {
        Some(path) => GlyphMap::with_overrides_from_path(path)?,
        None => GlyphMap::builtin(),
    });
    let glyph_map = converter.glyph_map();
    info!(
        "Glyph map ready: {} entries, longest key {} codepoints ({:.2}ms)",
        glyph_map.len(),
        glyph_map.max_key_length(),
        start_load.elapsed().as_secs_f64() * 1000.0
    );

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            let sink: Box<dyn Write> = Box::new(file);
            BufWriter::with_capacity(262144, sink)
        }
        None => {
            let sink: Box<dyn Write> = Box::new(io::stdout().lock());
            BufWriter::new(sink)
        }
    };

    let start_process = Instant::now();
    match args.format {
        Format::Text => {
            writeln!(writer, "{}", converter.convert(&text))?;
        }
        Format::Jsonl => {
            // Records are trimmed lines, blanks skipped
            let mut lines: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();

            if let Some(limit) = args.limit {
                lines.truncate(limit);
            }

            let results = lines
                .par_iter()
                .enumerate()
                .map(|(id, line)| {
                    let record = Record { id, input: line, output: converter.convert(line) };
                    serde_json::to_string(&record)
                })
                .collect::<Result<Vec<String>, _>>()?;

            for result in &results {
                writeln!(writer, "{}", result)?;
            }
            info!("Converted {} records", results.len());
        }
    }
    writer.flush()?;

    info!("Time taken: {:.2}s", start_process.elapsed().as_secs_f32());
    Ok(())
}
