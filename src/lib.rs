#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::interpret,
};

pub mod environment;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod values;

extern crate regex;

/// Outcome of running a program held in memory.
#[derive(Debug, Clone)]
pub struct Execution {
    pub output: String,
    pub errors: Vec<Error>,
}

impl Execution {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The diagnostic lines, one per reported error.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }
}

/// Parses and runs `source`, capturing PRINT output instead of writing it.
pub fn run(source: &str) -> Execution {
    let mut output = Vec::new();

    let errors = {
        let (parser, _) = interpret(Box::new(Lexer::new(source)), &mut output, std::io::sink());
        parser.into_errors()
    };

    Execution {
        output: String::from_utf8_lossy(&output).into_owned(),
        errors,
    }
}

/// Returns the text of the 1-based line `line`, if it exists.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}


/// Formats an error with the source line it was reported on.
///
/// ```text
/// Error: VariableRedefinition (a variable can only be declared once per program)
/// -> circle.prog
///   |
/// 2 | INT x, x;
///   |
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    rendered.push_str(&format!("-> {}\n", file));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(line_text) = get_source_line(source, error.get_line()) {
        rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    }
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    rendered
}
