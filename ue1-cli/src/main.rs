//! UE1 assembler.
//!
//! Usage: `ue1asm [--listing] <INPUT> <OUTPUT>`

use std::path::PathBuf;
use std::process;

use clap::Parser;

use ue1_assembler::AssemblerOptions;
use ue1_cli::{commands, init_logging};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble UE1 source into a raw binary tape")]
struct Cli {
    /// Print an address/byte listing of every source line
    #[arg(short, long)]
    listing: bool,
    /// Assembly source file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Binary output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let options = AssemblerOptions {
        listing: cli.listing,
    };
    if let Err(code) = commands::assemble(&cli.input, &cli.output, options) {
        process::exit(code);
    }
}
