//! Cell spans and class-name parsing.
//!
//! A box declares how many grid cells it covers through a class token such
//! as `square_2` (2×2) or `square_3_1` (3 wide, 1 tall). Anything that does
//! not parse falls back to a single cell.
//!
//! # Example
//!
//! ```
//! use zensquare::span::{Span, parse_class_attr};
//!
//! assert_eq!(parse_class_attr("card square_2_3 featured", "_"), Span::new(2, 3));
//! assert_eq!(parse_class_attr("card square_2", "_"), Span::square(2));
//! assert_eq!(parse_class_attr("card", "_"), Span::UNIT);
//! ```

/// Number of grid cells a box covers on each axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Columns covered.
    pub x: u32,
    /// Rows covered.
    pub y: u32,
}

impl Span {
    /// A single cell.
    pub const UNIT: Self = Self { x: 1, y: 1 };

    /// Create a span.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Square span covering `n`×`n` cells.
    pub const fn square(n: u32) -> Self {
        Self { x: n, y: n }
    }

    /// Whether both axes cover at least one cell.
    pub const fn is_valid(&self) -> bool {
        self.x > 0 && self.y > 0
    }

    /// Number of cells covered.
    pub const fn area(&self) -> u64 {
        self.x as u64 * self.y as u64
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Parse a span from a sequence of class tokens.
///
/// The first token that contains `separator` and whose second field parses
/// as a positive integer wins. A third field that also parses becomes the
/// row span; otherwise the span is square.
pub fn parse_span<'a, I>(class_names: I, separator: &str) -> Span
where
    I: IntoIterator<Item = &'a str>,
{
    if separator.is_empty() {
        return Span::UNIT;
    }
    class_names
        .into_iter()
        .find_map(|token| span_from_token(token, separator))
        .unwrap_or(Span::UNIT)
}

/// Parse a span from a whitespace-separated class attribute.
pub fn parse_class_attr(class_attr: &str, separator: &str) -> Span {
    parse_span(class_attr.split_ascii_whitespace(), separator)
}

/// Whether an element with this class attribute is a grid box.
///
/// Matches the way boxes are discovered: the raw attribute must start with
/// `prefix`, so `"square_2 card"` matches `square` but `"card square_2"` does
/// not.
pub fn is_target(class_attr: &str, prefix: &str) -> bool {
    !prefix.is_empty() && class_attr.starts_with(prefix)
}

fn span_from_token(token: &str, separator: &str) -> Option<Span> {
    if !token.contains(separator) {
        return None;
    }
    let mut fields = token.split(separator).skip(1);
    let x = fields.next().and_then(parse_multiplier)?;
    let y = fields.next().and_then(parse_multiplier).unwrap_or(x);
    Some(Span::new(x, y))
}

fn parse_multiplier(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|&v| v > 0)
}
