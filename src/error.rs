use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CompilerError {
    FileNotFound(String),
    Io(std::io::Error),
}

impl Error for CompilerError {}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::Io(err) => writeln!(f, "IOError: {}", err),
            CompilerError::FileNotFound(err) => writeln!(f, "FileNotFoundError: {}", err),
        }
    }
}

/// The closed set of lexical faults a scan can report. These are data handed
/// to the error sink, never panics; the sink decides what the user sees.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScanError {
    UnterminatedString,
    InvalidNumber,
    UnexpectedCharacter,
    UnterminatedComment,
}

impl Error for ScanError {}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            ScanError::UnterminatedString => "unterminated string",
            ScanError::InvalidNumber => "invalid number literal",
            ScanError::UnexpectedCharacter => "unexpected character",
            ScanError::UnterminatedComment => "unterminated multiline comment",
        };
        write!(f, "{}", message)
    }
}
