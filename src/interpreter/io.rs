use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

/// An append-only sink for the lines a program produces.
///
/// The interpreter owns two of these, one for `ecrire` output and one for
/// rendered diagnostics. Lines are kept in call order.
#[derive(Debug, Default, Clone)]
pub struct Output {
    lines: Vec<String>,
}

impl Output {
    /// Appends one line to the sink.
    pub fn print(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The lines printed so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Discards everything printed so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Where `lire` gets its lines from.
pub trait InputSource {
    /// Presents `prompt` and reads one line, without its line terminator.
    ///
    /// Returns `None` when the source is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// An input source fed from a preloaded queue of lines.
///
/// Used by tests and by programs run over piped input; the prompt is
/// discarded.
#[derive(Debug, Default)]
pub struct QueuedInput {
    lines: VecDeque<String>,
}

impl QueuedInput {
    /// Creates a queue serving `lines` in order.
    #[must_use]
    pub fn new(lines: &[&str]) -> Self {
        Self { lines: lines.iter().map(ToString::to_string).collect() }
    }
}

impl InputSource for QueuedInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.pop_front()
    }
}

/// An input source reading from standard input.
///
/// The prompt goes to stderr so that piping stdout still yields clean program
/// output.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{prompt}");
        let _ = stderr.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_keeps_lines_in_order() {
        let mut output = Output::default();
        output.print("un");
        output.print("deux");

        assert_eq!(output.lines(), ["un", "deux"]);

        output.clear();
        assert!(output.lines().is_empty());
    }

    #[test]
    fn queued_input_serves_lines_then_runs_dry() {
        let mut input = QueuedInput::new(&["premier", "second"]);

        assert_eq!(input.read_line("? "), Some("premier".to_string()));
        assert_eq!(input.read_line("? "), Some("second".to_string()));
        assert_eq!(input.read_line("? "), None);
    }
}
