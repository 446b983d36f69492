//! UE1 emulator and disassembler.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use ue1_cli::{commands, init_logging};
use ue1_vm::VmConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run or disassemble UE1 binary tapes")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a tape and print the final output word
    Run {
        /// Binary tape file
        #[arg(value_name = "TAPE")]
        tape: PathBuf,
        /// Input register values in binary, IR7 first. Repeat the flag once
        /// per input request. Without any, input requests prompt on stdin.
        #[arg(
            long,
            value_name = "BITS",
            action = ArgAction::Append,
            value_parser = commands::parse_bits
        )]
        inputs: Vec<u8>,
        /// Give up after this many instructions
        #[arg(long, default_value_t = VmConfig::default().max_steps)]
        max_steps: u64,
    },
    /// Print a tape as canonical assembly text
    Disassemble {
        /// Binary tape file
        #[arg(value_name = "TAPE")]
        tape: PathBuf,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Command::Run {
            tape,
            inputs,
            max_steps,
        } => commands::run(&tape, &inputs, VmConfig { max_steps }),
        Command::Disassemble { tape } => commands::disassemble(&tape),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
