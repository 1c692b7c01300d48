//! Plot data built from statistics samples
//!
//! Four panels arranged in a 2×2 grid:
//!
//! | cell | panel                      | x        | y        |
//! |------|----------------------------|----------|----------|
//! | 1    | speed vs time              | time     | speed    |
//! | 2    | speed vs distance to star  | distance | speed    |
//! | 3    | distance to star vs time   | time     | distance |
//! | 4    | time vs time               | time     | time     |
//!
//! The fourth panel is a straight diagonal; it is kept so the grid matches
//! the historical chart layout. Viewers may leave its cell empty.

use crate::statistics::Sample;

/// Quantity plotted along an axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Speed,
    Distance,
    Time,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::Speed => "speed",
            Axis::Distance => "distance to star",
            Axis::Time => "time",
        }
    }

    fn value(self, sample: &Sample) -> f64 {
        match self {
            Axis::Speed => sample.speed,
            Axis::Distance => sample.distance,
            Axis::Time => sample.time,
        }
    }
}

/// Axis-aligned data range of a panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotBounds {
    /// Smallest box containing every finite point
    ///
    /// Returns `None` when no point has finite coordinates.
    pub fn from_points(points: &[[f64; 2]]) -> Option<Self> {
        let mut finite = points
            .iter()
            .filter(|[x, y]| x.is_finite() && y.is_finite());
        let [x, y] = *finite.next()?;
        let mut bounds = PlotBounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        for &[x, y] in finite {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        Some(bounds)
    }

    /// Widens zero-width ranges so a single point still maps to a box
    ///
    /// The widened bounds stay finite and strictly ordered for every finite
    /// input, subnormal and near-`f64::MAX` values included.
    pub fn padded(self) -> Self {
        fn widen(min: f64, max: f64) -> (f64, f64) {
            if max > min {
                return (min, max);
            }
            let half = if min == 0.0 {
                1.0
            } else {
                (min.abs() * 0.5).max(f64::MIN_POSITIVE)
            };
            ((min - half).max(f64::MIN), (max + half).min(f64::MAX))
        }
        let (min_x, max_x) = widen(self.min_x, self.max_x);
        let (min_y, max_y) = widen(self.min_y, self.max_y);
        PlotBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Maps a data point into the unit square, y pointing up
    pub fn normalize(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [
            unit(x, self.min_x, self.max_x),
            unit(y, self.min_y, self.max_y),
        ]
    }
}

/// Position of `value` within `[min, max]`
fn unit(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_finite() {
        (value - min) / span
    } else {
        // Range wider than f64::MAX; halving keeps every difference finite
        (value * 0.5 - min * 0.5) / (max * 0.5 - min * 0.5)
    }
}

/// One line plot
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPanel {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Points in sample order
    pub points: Vec<[f64; 2]>,
}

impl PlotPanel {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis, samples: &[Sample]) -> Self {
        let points = samples
            .iter()
            .map(|sample| [x_axis.value(sample), y_axis.value(sample)])
            .collect();
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            points,
        }
    }

    pub fn bounds(&self) -> Option<PlotBounds> {
        PlotBounds::from_points(&self.points)
    }
}

/// The four statistics panels in grid order (row-major, 2×2)
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsPlots {
    pub panels: [PlotPanel; 4],
    pub sample_count: usize,
}

impl StatisticsPlots {
    pub const ROWS: usize = 2;
    pub const COLUMNS: usize = 2;
    /// Index of the time-vs-time panel
    pub const TIME_VS_TIME: usize = 3;

    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            panels: [
                PlotPanel::new("Speed vs time", Axis::Time, Axis::Speed, samples),
                PlotPanel::new(
                    "Speed vs distance to star",
                    Axis::Distance,
                    Axis::Speed,
                    samples,
                ),
                PlotPanel::new(
                    "Distance to star vs time",
                    Axis::Time,
                    Axis::Distance,
                    samples,
                ),
                PlotPanel::new("Time vs time", Axis::Time, Axis::Time, samples),
            ],
            sample_count: samples.len(),
        }
    }

    /// Grid cell `(row, column)` of the panel at `index`
    pub fn cell(index: usize) -> (usize, usize) {
        (index / Self::COLUMNS, index % Self::COLUMNS)
    }

}
