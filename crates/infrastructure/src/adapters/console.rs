//! Console adapter - terminal I/O over stdin/stdout

use std::io::{self, BufRead, Write};

use application::error::ApplicationError;
use application::ports::ConsolePort;

/// Console over standard input and output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    /// Create a console adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[allow(clippy::print_stdout)]
impl ConsolePort for StdConsole {
    fn say(&self, message: &str) {
        println!("{message}");
    }

    fn prompt(&self, message: &str) -> Result<String, ApplicationError> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(ApplicationError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            )));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
