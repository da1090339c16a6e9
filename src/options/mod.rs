//! Option-string parsing for grid configuration.
//!
//! Parses strings like `width=25%&space=1%&speed=300` into
//! [`GridOptions`], which merge onto [`GridConfig`](crate::GridConfig)
//! defaults. Useful when the configuration arrives as a data attribute or a
//! URL fragment.
//!
//! # Example
//!
//! ```
//! use zensquare::{Dimension, options};
//!
//! let result = options::parse("target=tile&width=25%&space=10&speed=300");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.options.to_config();
//! assert_eq!(config.target, "tile");
//! assert_eq!(config.width, Dimension::Percent(25.0));
//! assert_eq!(config.space, Dimension::Fixed(10.0));
//! assert_eq!(config.speed_ms, 300);
//! ```

mod parse;
pub mod settings;

pub use settings::GridOptions;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing an option string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed options.
    pub options: GridOptions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse an option string (with or without a leading `?` or `#`).
pub fn parse(query: &str) -> ParseResult {
    let (options, warnings) = parse::parse_options(query);
    ParseResult { options, warnings }
}
