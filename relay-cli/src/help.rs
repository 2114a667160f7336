//! Help flag parser and usage text.

use relay_core::{ArgParser, Result};

/// Parser that records a `-h`/`--help` request.
///
/// Configured first so the flag is recognized before anything else gets a
/// look at it. The entry point checks [`HelpFlag::requested`] after dispatch
/// and prints the usage screen instead of surfacing a parse failure.
pub struct HelpFlag {
    requested: bool,
}

impl HelpFlag {
    pub fn new() -> Self {
        Self { requested: false }
    }

    pub fn requested(&self) -> bool {
        self.requested
    }
}

impl Default for HelpFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgParser for HelpFlag {
    fn submit(&mut self, token: &str) -> Result<bool> {
        match token {
            "-h" | "--help" => {
                self.requested = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Print the usage screen to stderr.
pub fn print_usage() {
    let executable = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "relay-cli".to_string());

    eprintln!(
        "\
        Usage: {executable} [OPTION]... [INPUT]\n\
        \n\
        Options:\n  \
          -h, --help             Shows this help message\n  \
          -i, --input <FILE>     Sets the input file\n  \
          -o, --output <FILE>    Sets the output file (default: a.out)\
        "
    );
}
