use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Parser, ValueEnum};
use core_lang::{
    error::CoreError,
    interpreter::{evaluator::core::Context, symbol_table::SymbolTable},
    parse_source, print_source, tokenize_source,
};
use tracing::{Level, debug, info};

/// core-lang tokenizes, pretty-prints or runs programs written in the CORE
/// teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the CORE program.
    file: PathBuf,

    /// What to do with the program.
    #[arg(short, long, value_enum, default_value_t = Mode::Interpret)]
    mode: Mode,

    /// Takes values for `read` statements from this file instead of stdin.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Print one token code per line.
    Tokenize,
    /// Print the program in canonical form.
    Print,
    /// Run the program.
    Interpret,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.mode {
        Mode::Tokenize => tokenize(&args.file),
        Mode::Print => print(&args.file),
        Mode::Interpret => match &args.data {
            Some(data) => {
                let file = File::open(data).unwrap_or_else(|e| {
                                               fail(&format!("Failed to open the data file '{}': {e}",
                                                             data.display()))
                                           });
                interpret(&args.file, BufReader::new(file))
            },
            None => interpret(&args.file, io::stdin().lock()),
        },
    };

    if let Err(e) = result {
        debug!(line = e.line(), code = e.exit_code(), "run failed");
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}

fn read_program(path: &Path) -> String {
    info!(path = %path.display(), "reading program");
    fs::read_to_string(path).unwrap_or_else(|e| {
                                fail(&format!("Failed to read the input file '{}': {e}",
                                              path.display()))
                            })
}

fn fail(message: &str) -> ! {
    debug!("{message}");
    eprintln!("{message}");
    process::exit(1);
}

fn tokenize(path: &Path) -> Result<(), CoreError> {
    let tokens = tokenize_source(&read_program(path))?;
    for token in tokens {
        println!("{token}");
    }
    Ok(())
}

fn print(path: &Path) -> Result<(), CoreError> {
    print!("{}", print_source(&read_program(path))?);
    Ok(())
}

fn interpret(path: &Path, input: impl BufRead) -> Result<(), CoreError> {
    let mut symbols = SymbolTable::new();
    let program = {
        let source = read_program(path);
        parse_source(&source, &mut symbols)?
    };

    Context::new(&mut symbols, input, io::stdout().lock()).exec_program(&program)?;
    Ok(())
}
