use serde::{Deserialize, Serialize};

/// Shown in place of the summary when there is nothing to summarize.
pub const EMPTY_SUMMARY_PROMPT: &str = "Add at least one numeric value to see insights.";

/// Decimal places kept for the average.
pub const AVG_DECIMALS: i32 = 2;

/// Statistics for a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    /// Arithmetic mean rounded to [`AVG_DECIMALS`] places.
    pub avg: f64,
}

impl SeriesSummary {
    /// Compute the summary, or `None` when `values` holds no finite number.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if vals.is_empty() {
            return None;
        }

        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(SeriesSummary {
            min,
            max,
            avg: round_to(mean(&vals), AVG_DECIMALS),
        })
    }

    /// Summary panel rows in display order, with `count` shown last.
    pub fn rows(&self, count: usize) -> [(&'static str, String); 4] {
        [
            ("Minimum", format_number(self.min)),
            ("Average", format_number(self.avg)),
            ("Maximum", format_number(self.max)),
            ("Count", count.to_string()),
        ]
    }

    /// Format as a multi-line report string.
    pub fn report(&self, count: usize) -> String {
        let mut out = String::from("Summary:\n");
        for (label, value) in self.rows(count) {
            out.push_str(&format!("  {label}: {value}\n"));
        }
        out
    }
}

/// Report for an optional summary: the panel rows, or the prompt.
pub fn summary_report(summary: Option<&SeriesSummary>, count: usize) -> String {
    match summary {
        Some(s) => s.report(count),
        None => format!("Summary:\n  {EMPTY_SUMMARY_PROMPT}\n"),
    }
}

/// Mean of finite values. Falls back to summing `v / n` when the plain sum
/// overflows, so the result stays finite.
fn mean(vals: &[f64]) -> f64 {
    let n = vals.len() as f64;
    let sum: f64 = vals.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        vals.iter().map(|v| v / n).sum()
    }
}

/// Round half away from zero to `decimals` places.
/// Values too large to scale are already integral and come back unchanged.
/// A result of zero is always `+0.0`, never `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor + 0.0
}

/// Shortest form of a number: `5` rather than `5.0`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
