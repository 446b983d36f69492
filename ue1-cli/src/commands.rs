//! CLI command implementations.
//!
//! Each command reports its own errors on stderr and returns the process
//! exit code on failure.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use ue1_assembler::AssemblerOptions;
use ue1_common::Program;
use ue1_vm::{InputSource, ScriptedInputs, StopReason, VmConfig};

/// Assemble a text file to a raw binary.
///
/// The output file is only written when every line assembled.
pub fn assemble(input: &Path, output: &Path, options: AssemblerOptions) -> Result<(), i32> {
    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", input.display());
        1
    })?;

    let assembly = ue1_assembler::assemble_with(&text, options).map_err(|errors| {
        for e in &errors {
            eprintln!("error: {e}");
        }
        eprintln!("{} error(s); no output written", errors.len());
        1
    })?;

    let bytes = assembly.bytes();
    write_atomic(output, &bytes).map_err(|e| {
        eprintln!("error: cannot write '{}': {e}", output.display());
        1
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = bytes.len(),
        "assembled"
    );

    for line in &assembly.listing {
        println!("{line}");
    }
    if let Some(report) = assembly.histogram.report() {
        print!("{report}");
    }

    eprintln!(
        "assembled {} instructions -> {}",
        assembly.program.len(),
        output.display()
    );
    Ok(())
}

/// Run a binary tape on the emulator and print the output word.
///
/// With no scripted inputs, each input request prompts on stdin.
pub fn run(tape: &Path, inputs: &[u8], config: VmConfig) -> Result<(), i32> {
    let program = read_binary(tape)?;

    let mut source: Box<dyn InputSource> = if inputs.is_empty() {
        Box::new(StdinInputs::new(io::stdin().lock()))
    } else {
        Box::new(ScriptedInputs::new(inputs.iter().copied()))
    };

    let outcome = ue1_vm::run_with(&program, source.as_mut(), config).map_err(|e| {
        eprintln!("runtime error: {e}");
        3
    })?;
    debug!(steps = outcome.steps, stop = ?outcome.stop, "run finished");

    if outcome.stop == StopReason::InputExhausted {
        eprintln!("stopped: no more inputs");
    }
    println!("Result  : {}", outcome.machine);
    Ok(())
}

/// Disassemble a binary tape to text on stdout.
pub fn disassemble(tape: &Path) -> Result<(), i32> {
    let program = read_binary(tape)?;
    print!("{}", ue1_assembler::disassemble(&program));
    Ok(())
}

/// Parse an input register value written in binary, IR7 first.
///
/// At most seven digits, one per input register.
pub fn parse_bits(s: &str) -> Result<u8, String> {
    let digits = s.trim();
    if digits.is_empty() || digits.len() > 7 {
        return Err(format!("expected 1 to 7 binary digits, got '{s}'"));
    }
    if !digits.bytes().all(|b| matches!(b, b'0' | b'1')) {
        return Err(format!("not a binary number: '{s}'"));
    }
    u8::from_str_radix(digits, 2).map_err(|_| format!("not a binary number: '{s}'"))
}

/// Prompts for input register values on stdout and reads them from a
/// line-oriented reader.
pub struct StdinInputs<R> {
    reader: R,
}

impl<R: BufRead> StdinInputs<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinInputs<R> {
    fn next_inputs(&mut self) -> Option<u8> {
        loop {
            print!("Enter IR: ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => match parse_bits(&line) {
                    Ok(bits) => return Some(bits),
                    Err(msg) => eprintln!("error: {msg}"),
                },
                Err(e) => {
                    warn!(error = %e, "cannot read inputs");
                    return None;
                }
            }
        }
    }
}

// --- Helpers ---

/// Read a binary tape file.
fn read_binary(path: &Path) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;
    Ok(Program::decode(&bytes))
}

/// Write `bytes` to `path` through a temporary file in the same directory,
/// so the target is either the complete output or untouched.
///
/// An existing target keeps its permissions. A new file gets the mode a
/// plain create would give it under the current umask.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut file = temp_file_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        file.as_file().set_permissions(meta.permissions())?;
    }
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The create mode is masked by the umask, as with `File::create`.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
