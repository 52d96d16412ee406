use std::io::{BufRead, Stderr, StdinLock, Write};

/// Blocking request for a password before a gated action.
pub trait PasswordPrompt {
    /// Returns `None` if the operator dismissed the prompt.
    fn ask(&mut self, title: &str) -> Option<String>;
}

/// Reads the answer as one line of input. End of input counts as
/// dismissing the prompt.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<StdinLock<'static>, Stderr> {
    /// Prompts on stderr and reads stdin, leaving stdout for command output.
    pub fn terminal() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> PasswordPrompt for LinePrompt<R, W> {
    fn ask(&mut self, title: &str) -> Option<String> {
        let _ = write!(self.output, "{title}: ");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
