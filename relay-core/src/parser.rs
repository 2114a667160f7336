//! Parser capability contract used by the dispatcher.
//!
//! Anything that wants to claim tokens from the argument vector implements
//! [`ArgParser`]. A parser keeps whatever state it needs between calls; the
//! dispatcher only ever asks whether a token was consumed.

use crate::error::Result;

/// Core interface for all argument parsers
pub trait ArgParser {
    /// Offer one token to the parser.
    ///
    /// Returns `Ok(true)` when the token was consumed; the dispatcher will
    /// then offer this parser the next token first. Returns `Ok(false)` when
    /// the token means nothing to this parser in its current state, in which
    /// case no internal state may change and the same token will not be
    /// resubmitted here. Returns a validation error when the token clearly
    /// belongs to this parser but is semantically invalid (a duplicate
    /// value, say); that error aborts the whole dispatch.
    fn submit(&mut self, token: &str) -> Result<bool>;

    /// Called once after the argument vector is exhausted.
    ///
    /// Parsers apply defaults for unset optional fields here and fail if a
    /// required field was never set.
    fn finalize(&mut self) -> Result<()>;
}

/// Closure-backed implementation of [`ArgParser`].
///
/// Useful for catch-all parsers and tests where a named struct is overkill.
pub struct BaseParser {
    submit: Box<dyn FnMut(&str) -> Result<bool>>,
    finalize: Box<dyn FnMut() -> Result<()>>,
}

impl BaseParser {
    pub fn new(
        submit: impl FnMut(&str) -> Result<bool> + 'static,
        finalize: impl FnMut() -> Result<()> + 'static,
    ) -> Self {
        Self {
            submit: Box::new(submit),
            finalize: Box::new(finalize),
        }
    }

    /// Parser that consumes every token it is offered and never fails.
    ///
    /// Place it last in the configured order; anything earlier never sees a
    /// token once this one is reached.
    pub fn catch_all() -> Self {
        Self::new(|_| Ok(true), || Ok(()))
    }
}

impl ArgParser for BaseParser {
    fn submit(&mut self, token: &str) -> Result<bool> {
        (self.submit)(token)
    }

    fn finalize(&mut self) -> Result<()> {
        (self.finalize)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_parser_delegates_to_closures() {
        let mut seen = Vec::new();
        let mut parser = BaseParser::new(
            move |token| {
                seen.push(token.to_string());
                Ok(token == "yes")
            },
            || Ok(()),
        );

        assert!(parser.submit("yes").unwrap());
        assert!(!parser.submit("no").unwrap());
        assert!(parser.finalize().is_ok());
    }

    #[test]
    fn test_catch_all_consumes_anything() {
        let mut parser = BaseParser::catch_all();
        assert!(parser.submit("--whatever").unwrap());
        assert!(parser.submit("").unwrap());
        assert!(parser.finalize().is_ok());
    }
}
