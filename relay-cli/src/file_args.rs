//! Input/output file argument parser.
//!
//! Recognizes `--input`/`-i` and `--output`/`-o` followed by a path, and a
//! bare leading token as an implicit input path. Duplicate paths are
//! rejected; a missing output falls back to [`DEFAULT_OUTPUT`] at finalize
//! time and a missing input fails the parse.

use relay_core::{ArgParser, Error, Result};

/// Output path used when `--output` was never given.
pub const DEFAULT_OUTPUT: &str = "a.out";

/// What the parser is looking for next.
enum State {
    /// Could be a switch, could be an implicit input path.
    Idle,
    /// The token after an explicit input switch.
    WantInput,
    /// The token after an explicit output switch.
    WantOutput,
}

pub struct FileArgs {
    input: Option<String>,
    output: Option<String>,
    state: State,
}

impl FileArgs {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            state: State::Idle,
        }
    }

    /// The parsed input path, if any. Guaranteed set after a successful
    /// dispatch.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// The parsed output path. Filled with [`DEFAULT_OUTPUT`] at finalize
    /// time when no output switch was given.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Default for FileArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgParser for FileArgs {
    fn submit(&mut self, token: &str) -> Result<bool> {
        // Empty tokens are never meaningful here.
        if token.is_empty() {
            return Ok(false);
        }

        match self.state {
            State::WantInput => {
                if self.input.is_some() {
                    return Err(Error::Validation("Input path already specified.".to_string()));
                }

                self.input = Some(token.to_string());
                self.state = State::Idle;
                Ok(true)
            }
            State::WantOutput => {
                if self.output.is_some() {
                    return Err(Error::Validation("Output path already specified.".to_string()));
                }

                self.output = Some(token.to_string());
                self.state = State::Idle;
                Ok(true)
            }
            State::Idle => match token {
                "--input" | "-i" => {
                    self.state = State::WantInput;
                    Ok(true)
                }
                "--output" | "-o" => {
                    self.state = State::WantOutput;
                    Ok(true)
                }
                _ if self.input.is_none() && !token.starts_with('-') => {
                    self.input = Some(token.to_string());
                    Ok(true)
                }
                _ => Ok(false),
            },
        }
    }

    fn finalize(&mut self) -> Result<()> {
        if self.output.is_none() {
            self.output = Some(DEFAULT_OUTPUT.to_string());
        }

        if self.input.is_none() {
            return Err(Error::Validation("No input file specified.".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::dispatch;

    fn run(tokens: &[&str]) -> (Result<()>, FileArgs) {
        let mut files = FileArgs::new();
        let outcome = dispatch(tokens, &mut [&mut files]);
        (outcome, files)
    }

    #[test]
    fn test_explicit_input_and_output() {
        let (outcome, files) = run(&["-i", "a.txt", "-o", "b.out"]);
        outcome.unwrap();
        assert_eq!(files.input(), Some("a.txt"));
        assert_eq!(files.output(), Some("b.out"));
    }

    #[test]
    fn test_long_switches() {
        let (outcome, files) = run(&["--input", "a.txt", "--output", "b.out"]);
        outcome.unwrap();
        assert_eq!(files.input(), Some("a.txt"));
        assert_eq!(files.output(), Some("b.out"));
    }

    #[test]
    fn test_bare_token_is_implicit_input() {
        let (outcome, files) = run(&["a.txt"]);
        outcome.unwrap();
        assert_eq!(files.input(), Some("a.txt"));
        assert_eq!(files.output(), Some(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_duplicate_input_is_rejected() {
        let (outcome, _) = run(&["-i", "a.txt", "-i", "c.txt"]);
        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "Input path already specified.");
    }

    #[test]
    fn test_duplicate_output_is_rejected() {
        let (outcome, _) = run(&["-o", "a.out", "-o", "b.out"]);
        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "Output path already specified.");
    }

    #[test]
    fn test_unknown_flag_is_unrecognized() {
        let (outcome, _) = run(&["--weird"]);
        let err = outcome.unwrap_err();
        assert!(matches!(err, Error::Unrecognized(token) if token == "--weird"));
    }

    #[test]
    fn test_no_arguments_fails_at_finalize() {
        let (outcome, _) = run(&[]);
        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "No input file specified.");
    }

    #[test]
    fn test_second_bare_token_is_not_consumed() {
        // Only the first bare token is an implicit input; a second one has
        // no taker and aborts the parse.
        let (outcome, _) = run(&["a.txt", "b.txt"]);
        let err = outcome.unwrap_err();
        assert!(matches!(err, Error::Unrecognized(token) if token == "b.txt"));
    }

    #[test]
    fn test_empty_token_is_refused() {
        let mut files = FileArgs::new();
        assert!(!files.submit("").unwrap());
    }

    #[test]
    fn test_rerun_with_fresh_parser_is_identical() {
        let tokens = ["-i", "a.txt", "-o", "b.out"];
        let (first, files_first) = run(&tokens);
        let (second, files_second) = run(&tokens);

        first.unwrap();
        second.unwrap();
        assert_eq!(files_first.input(), files_second.input());
        assert_eq!(files_first.output(), files_second.output());
    }
}
