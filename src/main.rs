use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rsfield::field::{FieldTable, PRIMITIVE_POLY_11D};
use rsfield::util::render_hex_rows;

#[derive(Parser, Debug)]
#[command(name = "gftables", about = "Print GF(2^8) exp/log tables as hexadecimal literals")]
struct Cli {
    /// Primitive polynomial, in hex (0x11D) or decimal (285).
    #[arg(long, default_value = "0x11D", value_parser = parse_poly)]
    poly: u16,
    /// Which table to print.
    #[arg(long, value_enum, default_value_t = Which::Both)]
    table: Which,
    /// Literals per output line.
    #[arg(long, default_value_t = 16)]
    per_row: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Which {
    Exp,
    Log,
    Both,
}

fn parse_poly(raw: &str) -> Result<u16, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|e| format!("invalid polynomial {raw:?}: {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = FieldTable::try_build(cli.poly)
        .with_context(|| format!("cannot build GF(2^8) tables for {:#05x}", cli.poly))?;
    if cli.poly != PRIMITIVE_POLY_11D {
        info!("using non-default polynomial {:#05x}", cli.poly);
    }

    if matches!(cli.table, Which::Exp | Which::Both) {
        println!("exp");
        print!("{}", render_hex_rows(table.exp(), cli.per_row));
    }
    if matches!(cli.table, Which::Log | Which::Both) {
        println!("log");
        print!("{}", render_hex_rows(table.log(), cli.per_row));
    }

    Ok(())
}
