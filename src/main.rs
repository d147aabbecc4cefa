use clap::Parser;
use colorize::AnsiColor;
use ipu_as::assembler::assemble;
use ipu_as::constant::NAME;
use ipu_as::data::{AssemblyError, AssemblyErrorCode};
use ipu_as::emitter::emit;
use std::{fs, fs::File, io::Write, path::PathBuf, process::exit};

#[derive(Parser, Debug)]
#[command(name = "ipu-as", about = "assembler for the IPU 32-bit instruction stream")]
struct Args {
    /// input assembly file, one instruction per line
    input: PathBuf,
    /// output binary file, big-endian 32-bit words
    output: PathBuf,
    /// print the encoded instruction listing after assembly
    #[arg(short, long)]
    verbose: bool,
}

fn handle_fatal_assembly_err(err: AssemblyError) -> ! {
    eprintln!("{err}");
    exit(1)
}

fn read_source(path: &PathBuf) -> Result<String, AssemblyError> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(err) => Err(AssemblyError::new(
            AssemblyErrorCode::SourceFileReadError,
            format!("could not read input file {} :: {err}", path.display()),
        )),
    }
}

fn write_file(image: &[u8], path: &PathBuf) -> Result<(), AssemblyError> {
    let mut outf = match File::create(path) {
        Ok(f) => f,
        Err(err) => {
            return Err(AssemblyError::new(
                AssemblyErrorCode::OutputWriteError,
                format!("error opening file {} :: {err}", path.display()),
            ))
        }
    };
    match outf.write_all(image) {
        Ok(()) => Ok(()),
        Err(err) => Err(AssemblyError::new(
            AssemblyErrorCode::OutputWriteError,
            format!("error writing to file {} :: {err}", path.display()),
        )),
    }
}

fn main() {
    let args = Args::parse();

    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => handle_fatal_assembly_err(err),
    };

    // any line failure aborts here, before the output file is created
    let program = match assemble(&source) {
        Ok(program) => program,
        Err(err) => handle_fatal_assembly_err(err),
    };

    if args.verbose {
        for (n, instruction) in program.iter().enumerate() {
            eprintln!("{NAME}: {} {n:04} {instruction}", "listing:".yellow());
        }
    }

    let image = emit(&program);
    match write_file(&image, &args.output) {
        Ok(()) => (),
        Err(err) => handle_fatal_assembly_err(err),
    }
    println!("wrote binary file {}", args.output.display());
}
