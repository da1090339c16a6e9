//! Option strings must produce the same layouts as the equivalent builder
//! calls.

#![cfg(feature = "options")]

use zensquare::options::{self, ParseWarning};
use zensquare::*;

fn items(spans: &[Span]) -> Vec<GridItem<usize>> {
    spans
        .iter()
        .enumerate()
        .map(|(i, &s)| GridItem::new(i, s))
        .collect()
}

fn assert_same_layout(query: &str, built: GridConfig, spans: &[Span], width: f64) {
    let result = options::parse(query);
    assert!(result.warnings.is_empty(), "{query}: {:?}", result.warnings);
    let parsed = result.options.to_config();
    let items = items(spans);
    assert_eq!(
        parsed.compute(&items, width),
        built.compute(&items, width),
        "{query} at {width}px"
    );
}

#[test]
fn fixed_cells() {
    let built = GridConfig::default()
        .width(Dimension::Fixed(100.0))
        .height(80.0)
        .space(Dimension::Fixed(10.0));
    let spans = [Span::square(2), Span::UNIT, Span::UNIT, Span::new(3, 1)];
    for width in [230.0, 340.0, 560.0] {
        assert_same_layout("width=100&height=80&space=10", built.clone(), &spans, width);
    }
}

#[test]
fn percent_cells() {
    let built = GridConfig::default()
        .width(Dimension::Percent(22.0))
        .space(Dimension::Percent(2.0))
        .height(120.0);
    let spans = [Span::UNIT; 9];
    for width in [400.0, 1000.0] {
        assert_same_layout("w=22%25&space=2%&h=120px", built.clone(), &spans, width);
    }
}

#[test]
fn clamp_policy() {
    let built = GridConfig::default()
        .width(Dimension::Fixed(100.0))
        .space(Dimension::Fixed(10.0))
        .overflow(Overflow::Clamp);
    let spans = [Span::square(5), Span::UNIT];
    assert_same_layout("width=100&space=10&overflow=clamp", built, &spans, 340.0);
}

#[test]
fn custom_separator_reaches_span_parsing() {
    let config = options::parse("target=tile&scalesplit=-").options.to_config();
    assert_eq!(config.span_of("tile-2-1 featured"), Span::new(2, 1));
    assert_eq!(config.span_of("tile_2_1"), Span::UNIT);
}

#[test]
fn apply_overrides_only_given_keys() {
    let base = GridConfig::default().speed(0).height(64.0);
    let config = options::parse("width=50").options.apply(base);
    assert_eq!(config.width, Dimension::Fixed(50.0));
    assert_eq!(config.speed_ms, 0);
    assert_eq!(config.height, 64.0);
}

#[test]
fn bad_values_fall_back_to_defaults() {
    let result = options::parse("width=wide&speed=300");
    assert!(matches!(
        result.warnings.as_slice(),
        [ParseWarning::ValueInvalid { key: "width", .. }]
    ));
    let config = result.options.to_config();
    assert_eq!(config.width, GridConfig::default().width);
    assert_eq!(config.speed_ms, 300);
}
