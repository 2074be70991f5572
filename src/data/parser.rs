use crate::state::data_series::DataSeries;

/// Characters that separate values. Any run of them counts as one separator.
///
/// Whitespace follows the JavaScript `\s` class: Unicode whitespace plus the
/// byte order mark U+FEFF, but not NEL (U+0085).
pub fn is_delimiter(c: char) -> bool {
    match c {
        ',' | '\u{FEFF}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Split the raw input into non-empty tokens.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(is_delimiter).filter(|t| !t.is_empty())
}

/// Coerce one token to a finite number.
/// Returns `None` for text that is not a number, and for `NaN`, `inf`
/// and literals that overflow to infinity.
pub fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a free-form list of numbers separated by commas and/or whitespace.
///
/// Never fails: tokens that are not finite numbers are skipped. Surviving
/// values are labeled "Point 1", "Point 2", ... by their position in the
/// output, so `"a, 3, b, 5"` gives `Point 1 = 3` and `Point 2 = 5`.
pub fn parse_series(input: &str) -> DataSeries {
    let mut seen = 0usize;
    let series = DataSeries::from_values(tokens(input).filter_map(|t| {
        seen += 1;
        parse_value(t)
    }));

    let dropped = seen - series.point_count();
    if dropped > 0 {
        tracing::debug!(tokens = seen, dropped, "ignored non-numeric entries");
    } else {
        tracing::trace!(tokens = seen, "parsed series");
    }
    series
}
