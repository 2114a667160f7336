//! Pluggable command-line argument dispatch.
//!
//! Callers hand [`dispatch`] the argument tokens and an ordered list of
//! [`ArgParser`] implementations. Each token is routed to the parser best
//! able to consume it: the parser that took the previous token is asked
//! first, then the rest in configured order. Once input runs out every
//! parser is finalized so it can validate required fields and fill in
//! defaults, after which results are read back from the parsers themselves.

mod error;

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{dispatch, dispatch_argv};
pub use error::{Error, Result};
pub use parser::{ArgParser, BaseParser};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{dispatch, dispatch_argv, ArgParser, BaseParser, Error, Result};
}
