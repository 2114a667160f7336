use anyhow::{anyhow, Result};
use relay_core::dispatch_argv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod file_args;
mod help;

use file_args::FileArgs;
use help::{print_usage, HelpFlag};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relay=warn")),
        )
        .init();

    let argv: Vec<String> = std::env::args().collect();

    // Help first so the flag wins over the implicit-input rule; the file
    // parser takes everything else.
    let mut help = HelpFlag::new();
    let mut files = FileArgs::new();

    let outcome = dispatch_argv(&argv, &mut [&mut help, &mut files]);

    // A lone --help fails the file parser's finalize; the usage screen takes
    // precedence over that failure.
    if help.requested() {
        print_usage();
        return Ok(());
    }

    outcome?;

    let input = files
        .input()
        .ok_or_else(|| anyhow!("no input path recorded after a successful parse"))?;
    let output = files.output().unwrap_or(file_args::DEFAULT_OUTPUT);

    debug!("Parsed input: {}, output: {}", input, output);
    println!("input: {input}");
    println!("output: {output}");

    Ok(())
}
