//! The routing loop that drives parsers across the argument vector.
//!
//! One parser at a time may be "sticky": it consumed the previous token and
//! gets first refusal on the next one. When it refuses, the dispatcher probes
//! the full parser list in configured order, skipping only the parser that
//! just refused, and for this token only. A token no parser accepts aborts
//! the dispatch.

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::ArgParser;

/// Dispatch a list of argument tokens across the configured parsers.
///
/// Every element of `tokens` is treated as a real argument. Parsers are
/// probed in slice order, so a catch-all belongs at the end. On success every
/// parser's `finalize` has run exactly once, in slice order; results are read
/// back through each parser's own accessors. The first submit or finalize
/// error aborts the whole call, and an unrecognized token aborts before any
/// finalize runs.
pub fn dispatch<T: AsRef<str>>(tokens: &[T], parsers: &mut [&mut dyn ArgParser]) -> Result<()> {
    let mut active: Option<usize> = None;

    for token in tokens {
        let token = token.as_ref();

        // A parser that consumed the previous token gets first refusal.
        if let Some(idx) = active {
            if parsers[idx].submit(token)? {
                debug!("Parser {} kept token: {}", idx, token);
                continue;
            }
        }

        // The sticky parser rejected this token; it must not be offered the
        // same token again during the probe. The exclusion lasts for this
        // token only.
        let rejected = active.take();

        for (idx, parser) in parsers.iter_mut().enumerate() {
            if rejected == Some(idx) {
                continue;
            }

            if parser.submit(token)? {
                debug!("Parser {} claimed token: {}", idx, token);
                active = Some(idx);
                break;
            }
        }

        if active.is_none() {
            return Err(Error::Unrecognized(token.to_string()));
        }
    }

    // Input exhausted; let every parser validate and apply defaults.
    for parser in parsers.iter_mut() {
        parser.finalize()?;
    }

    Ok(())
}

/// Dispatch a full process argument vector.
///
/// The first element is the program name and is skipped; the rest go through
/// [`dispatch`].
pub fn dispatch_argv<T: AsRef<str>>(argv: &[T], parsers: &mut [&mut dyn ArgParser]) -> Result<()> {
    let tokens = if argv.is_empty() { argv } else { &argv[1..] };
    dispatch(tokens, parsers)
}
