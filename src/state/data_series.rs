use serde::{Deserialize, Serialize};

use crate::processing::statistics::SeriesSummary;

/// One plotted value. Serializes as `{"label": ..., "value": ...}`, the shape
/// line and bar chart renderers key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    /// Build the point at 0-based output `position`, labeled "Point N".
    pub(crate) fn at(position: usize, value: f64) -> Self {
        Self {
            label: point_label(position),
            value,
        }
    }
}

/// 1-indexed label for the 0-based output position.
pub fn point_label(position: usize) -> String {
    format!("Point {}", position + 1)
}

/// Ordered points produced by one parse. Never mutated after parsing;
/// every edit of the input produces a new series. Every value is finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSeries {
    points: Vec<ChartPoint>,
}

impl DataSeries {
    /// Keep the finite values and label them by their position in the
    /// result.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let points = values
            .into_iter()
            .filter(|v| v.is_finite())
            .enumerate()
            .map(|(i, v)| ChartPoint::at(i, v))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartPoint> {
        self.points.iter()
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        SeriesSummary::compute(&self.values())
    }
}

impl<'a> IntoIterator for &'a DataSeries {
    type Item = &'a ChartPoint;
    type IntoIter = std::slice::Iter<'a, ChartPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
