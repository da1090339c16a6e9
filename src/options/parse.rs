//! Option string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::settings::GridOptions;
use crate::geometry::Dimension;
use crate::pack::Overflow;

/// Parse an option string into options + warnings.
pub(crate) fn parse_options(query: &str) -> (GridOptions, Vec<ParseWarning>) {
    let mut opts = GridOptions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut opts, &mut warnings);
    }

    (opts, warnings)
}

fn dispatch_key(key: &str, value: &str, opts: &mut GridOptions, warnings: &mut Vec<ParseWarning>) {
    match key {
        // Selectors
        "target" => match parse_token(value) {
            Some(t) => set_or_warn(&mut opts.target, Some(t), key, value, warnings),
            None => warnings.push(empty_selector("target", value)),
        },
        "inner" => match parse_token(value) {
            Some(t) => set_or_warn(&mut opts.inner, Some(t), key, value, warnings),
            None => warnings.push(empty_selector("inner", value)),
        },
        "scalesplit" | "scale_split" => match parse_token(value) {
            Some(t) => set_or_warn(&mut opts.scale_split, Some(t), key, value, warnings),
            None => warnings.push(empty_selector("scalesplit", value)),
        },

        // Cell geometry
        "width" | "w" => match parse_dimension(value) {
            Some(d) => set_or_warn(&mut opts.width, Some(d), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "width",
                value: String::from(value),
                reason: "expected pixels or a percentage like 25%",
            }),
        },
        "space" => match parse_dimension(value) {
            Some(d) => set_or_warn(&mut opts.space, Some(d), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "space",
                value: String::from(value),
                reason: "expected pixels or a percentage like 2%",
            }),
        },
        "height" | "h" => match parse_pixels(value) {
            Some(px) => set_or_warn(&mut opts.height, Some(px), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "height",
                value: String::from(value),
                reason: "expected non-negative pixels",
            }),
        },

        // Timing
        "speed" => match parse_ms(value) {
            Some(ms) => set_or_warn(&mut opts.speed, Some(ms), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "speed",
                value: String::from(value),
                reason: "expected milliseconds",
            }),
        },
        "duration" => match parse_ms(value).filter(|&ms| ms > 0) {
            Some(ms) => set_or_warn(&mut opts.duration, Some(ms), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "duration",
                value: String::from(value),
                reason: "expected a positive number of milliseconds",
            }),
        },

        "overflow" => match parse_overflow(value) {
            Some(o) => set_or_warn(&mut opts.overflow, Some(o), key, value, warnings),
            None => warnings.push(ParseWarning::ValueInvalid {
                key: "overflow",
                value: String::from(value),
                reason: "expected reject|clamp",
            }),
        },

        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn empty_selector(key: &'static str, value: &str) -> ParseWarning {
    ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason: "expected a non-empty value",
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

/// Non-empty token, whitespace trimmed.
fn parse_token(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| String::from(s))
}

/// Pixels (`150`, `150px`) or a percentage (`25%`).
fn parse_dimension(s: &str) -> Option<Dimension> {
    let s = s.trim();
    match s.strip_suffix('%') {
        Some(pct) => pct
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(Dimension::Percent),
        None => parse_pixels(s).map(Dimension::Fixed),
    }
}

fn parse_pixels(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix("px").unwrap_or(s);
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Milliseconds, with an optional `ms` suffix.
fn parse_ms(s: &str) -> Option<u32> {
    let s = s.trim();
    let s = s.strip_suffix("ms").unwrap_or(s);
    s.trim().parse::<u32>().ok()
}

fn parse_overflow(s: &str) -> Option<Overflow> {
    match s.trim().to_ascii_lowercase().as_str() {
        "reject" | "error" => Some(Overflow::Reject),
        "clamp" => Some(Overflow::Clamp),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split on '&', dropping a leading '?' or '#'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query
        .strip_prefix('?')
        .or_else(|| query.strip_prefix('#'))
        .unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a component. Also handles '+' as space.
///
/// A '%' not followed by two hex digits is kept literally, so `25%` survives.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match (
                    bytes.get(i + 1).copied().and_then(hex_digit),
                    bytes.get(i + 2).copied().and_then(hex_digit),
                ) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
