use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ConsoleError {
    Io(std::io::Error),
    /// Input stream closed while a prompt was waiting.
    EndOfInput,
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Io(err) => write!(f, "IO error: {}", err),
            ConsoleError::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(err) => Some(err),
            ConsoleError::EndOfInput => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}
