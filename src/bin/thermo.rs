use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use log::{info, warn};
use thermo_codec::utils::bit_io::{load_bitstream, store_bitstream};
use thermo_codec::utils::efficiency::efficiency;
use thermo_codec::{Decoder, Encoder, Normalizer, NormalizerConfig, SymbolTableBuilder, SymbolTables};

#[derive(Parser, Debug)]
#[command(about = "Encodes texts with delimiter-framed thermometer codewords", long_about = None)]
struct Args {
    /// Raises the log verbosity; can be repeated.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encodes a text file into a bitstream file.
    Encode {
        /// The text to encode.
        input: PathBuf,

        /// Where to write the bitstream.
        output: PathBuf,

        /// Where to write the symbol tables [default: OUTPUT with extension "tables"].
        #[clap(short, long)]
        tables: Option<PathBuf>,

        /// The characters removed from the text before encoding [default: space , . ! : ; – and line breaks].
        #[clap(short, long)]
        separators: Option<String>,

        /// Keeps the case of the text instead of lower-casing it.
        #[clap(long)]
        keep_case: bool,

        /// Encodes with the tables already stored at TABLES instead of building new ones.
        #[clap(long)]
        reuse_tables: bool,
    },

    /// Decodes a bitstream file back to text.
    Decode {
        /// The bitstream to decode.
        input: PathBuf,

        /// The symbol tables used to encode the stream [default: INPUT with extension "tables"].
        #[clap(short, long)]
        tables: Option<PathBuf>,

        /// Where to write the decoded text [default: standard output].
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    match args.command {
        Command::Encode {
            input,
            output,
            tables,
            separators,
            keep_case,
            reuse_tables,
        } => {
            let mut config = NormalizerConfig {
                lowercase: !keep_case,
                ..Default::default()
            };
            if let Some(separators) = separators {
                config.separators = separators.chars().collect();
            }
            let tables_path = tables.unwrap_or_else(|| output.with_extension("tables"));
            encode(input, output, tables_path, reuse_tables, Normalizer::new(config))
        }
        Command::Decode {
            input,
            tables,
            output,
        } => {
            let tables_path = tables.unwrap_or_else(|| input.with_extension("tables"));
            decode(input, tables_path, output)
        }
    }
}

fn encode(
    input: PathBuf,
    output: PathBuf,
    tables_path: PathBuf,
    reuse_tables: bool,
    normalizer: Normalizer,
) -> Result<()> {
    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Could not read {}", input.display()))?;
    let text = normalizer.normalize(&raw);
    let symbols = text.chars().count();

    let mut pl = ProgressLogger::default();

    let tables = if reuse_tables {
        SymbolTables::load(&tables_path)?
    } else {
        pl.item_name("symbol").expected_updates(Some(symbols));
        pl.start("Counting symbol frequencies...");

        let mut builder = SymbolTableBuilder::new();
        for symbol in text.chars() {
            builder.push_symbol(symbol);
            pl.update();
        }
        pl.done();

        let tables = builder.build();
        tables.store(&tables_path)?;
        tables
    };

    pl.item_name("symbol").expected_updates(Some(symbols));
    pl.start("Encoding symbols...");

    let mut encoder = Encoder::new(tables.encoding());
    for symbol in text.chars() {
        encoder
            .encode(symbol)
            .with_context(|| format!("Could not encode {}", input.display()))?;
        pl.update();
    }
    pl.done();

    let bitstream = encoder.into_bitstream();
    store_bitstream(&bitstream, &output)?;

    match efficiency(&text, bitstream.len()) {
        Some(ratio) => info!("Encoding efficiency: {:.4}", ratio),
        None => info!("Nothing to encode"),
    }
    Ok(())
}

fn decode(input: PathBuf, tables_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let tables = SymbolTables::load(&tables_path)?;
    let bitstream = load_bitstream(&input)?;

    let report = Decoder::new(tables.decoding())
        .decode(&bitstream)
        .with_context(|| format!("Could not decode {}", input.display()))?;

    if report.is_exact() {
        info!("Decoded {} symbols", report.symbols.chars().count());
    } else {
        warn!(
            "Decoded {} symbols, {} of which by prefix matching: the result may be wrong",
            report.symbols.chars().count(),
            report.degraded.len()
        );
    }

    match output {
        Some(path) => fs::write(&path, report.symbols)
            .with_context(|| format!("Could not write {}", path.display()))?,
        None => io::stdout().write_all(report.symbols.as_bytes())?,
    }
    Ok(())
}
