use std::{env, fs::read_to_string, io, path::PathBuf, process::ExitCode, time::Instant};

use interpreter::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::interpret,
    render_error,
};

struct Options {
    file: PathBuf,
    verbose: bool,
    dump_tokens: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut file = None;
    let mut verbose = false;
    let mut dump_tokens = false;

    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--tokens" => dump_tokens = true,
            flag if flag.starts_with('-') => return Err(format!("Unrecognized flag {}", flag)),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            _ => return Err(String::from("Only one file name is allowed")),
        }
    }

    let file = file.ok_or_else(|| String::from("No file name provided"))?;
    Ok(Options {
        file,
        verbose,
        dump_tokens,
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: interpreter <file> [--verbose] [--tokens]");
            return ExitCode::FAILURE;
        }
    };

    let file_name = options.file.to_string_lossy().into_owned();
    let source = match read_to_string(&options.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Cannot open the input file {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
    };

    if options.dump_tokens {
        for token in tokenize(source.as_str()) {
            token.debug();
        }
        return ExitCode::SUCCESS;
    }

    let start = Instant::now();
    let (parser, result) = interpret(Box::new(Lexer::new(source.as_str())), io::stdout(), io::stdout());
    let errors = parser.into_errors();

    if options.verbose {
        eprintln!("Interpreted in {:?}", start.elapsed());
        if let Some(error) = errors.first() {
            eprint!("{}", render_error(error, &source, &file_name));
        }
    }

    if result.is_ok() && errors.is_empty() {
        println!();
        println!("Successful Execution");
        ExitCode::SUCCESS
    } else {
        println!();
        println!("Unsuccessful Interpretation");
        println!("Number of Errors {}", errors.len());
        ExitCode::FAILURE
    }
}
