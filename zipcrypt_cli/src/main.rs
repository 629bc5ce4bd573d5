use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use zipcrypt::Style;

#[derive(Parser, Debug)]
struct ActionEmit {
    /// Output path. Defaults to stdout
    #[arg(index = 1)]
    output: Option<String>,

    /// Source style to emit: plain, c or rust
    #[arg(short, long, default_value = "plain")]
    style: String,
}

#[derive(Parser, Debug)]
struct ActionGet {
    /// Table index in [0, 16384)
    #[arg(index = 1)]
    index: usize,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Emit the keystream table as source literals
    Emit(ActionEmit),
    /// Print a single table entry
    Get(ActionGet),
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

fn main() -> Result<(), zipcrypt::Error> {
    let args = Args::parse();

    match args.action {
        Action::Emit(args) => emit(args),
        Action::Get(args) => get(args),
    }
}

fn emit(args: ActionEmit) -> Result<(), zipcrypt::Error> {
    let style = Style::from_str(&args.style)?;
    match args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            zipcrypt::write_table(&mut writer, style)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            zipcrypt::write_table(&mut stdout.lock(), style)?;
        }
    }
    Ok(())
}

fn get(args: ActionGet) -> Result<(), zipcrypt::Error> {
    println!("0x{:02x}", zipcrypt::lookup(args.index)?);
    Ok(())
}
