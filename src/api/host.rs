use tracing::warn;

use crate::core::AxisKey;
use crate::error::AxesError;

use super::ChartOptions;

/// Read access the axes core needs from the host chart.
///
/// Covers per-axis option resolution, chart-level options and the
/// data-to-percent coordinate conversion used by "draw axes at zero".
pub trait ChartHost {
    fn axis_options(&self, axis: AxisKey) -> super::AxisOptions;
    /// Explicit x-axis band height, if configured.
    fn x_axis_height(&self) -> Option<f64>;
    fn draw_axes_at_zero(&self) -> bool;
    /// Number of configured value axes (may exceed four; extras are ignored).
    fn num_axes(&self) -> usize;
    /// Fraction of the plot width at which x `value` sits (0 = left edge).
    fn to_percent_x_coord(&self, value: f64) -> f64;
    /// Fraction of the plot height at which `value` on value axis `axis` sits (0 = top edge).
    fn to_percent_y_coord(&self, value: f64, axis: usize) -> f64;
}

/// Sink for non-fatal configuration errors.
pub trait ErrorSink {
    fn report_error(&mut self, error: AxesError);
}

impl ErrorSink for Vec<AxesError> {
    fn report_error(&mut self, error: AxesError) {
        self.push(error);
    }
}

/// Error sink that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report_error(&mut self, error: AxesError) {
        warn!(error = %error, "chart configuration error");
    }
}

/// Linear data ranges for the x axis and each value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCoordinates {
    pub x_range: (f64, f64),
    pub y_ranges: Vec<(f64, f64)>,
}

impl LinearCoordinates {
    #[must_use]
    pub fn new(x_range: (f64, f64), y_ranges: Vec<(f64, f64)>) -> Self {
        Self { x_range, y_ranges }
    }

    #[must_use]
    pub fn percent_x(&self, value: f64) -> f64 {
        let (low, high) = self.x_range;
        (value - low) / (high - low)
    }

    /// Percent from the top edge; `NaN` for an unknown axis or empty range.
    #[must_use]
    pub fn percent_y(&self, value: f64, axis: usize) -> f64 {
        match self.y_ranges.get(axis) {
            Some(&(low, high)) => (high - value) / (high - low),
            None => f64::NAN,
        }
    }
}

impl Default for LinearCoordinates {
    fn default() -> Self {
        Self::new((0.0, 1.0), vec![(0.0, 1.0)])
    }
}

/// `ChartHost` backed by static options and linear ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticHost {
    pub options: ChartOptions,
    pub coordinates: LinearCoordinates,
}

impl StaticHost {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            coordinates: LinearCoordinates::default(),
        }
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: LinearCoordinates) -> Self {
        self.coordinates = coordinates;
        self
    }
}

impl ChartHost for StaticHost {
    fn axis_options(&self, axis: AxisKey) -> super::AxisOptions {
        self.options.resolve(axis)
    }

    fn x_axis_height(&self) -> Option<f64> {
        self.options.x_axis_height
    }

    fn draw_axes_at_zero(&self) -> bool {
        self.options.draw_axes_at_zero
    }

    fn num_axes(&self) -> usize {
        self.options.y_axes.len()
    }

    fn to_percent_x_coord(&self, value: f64) -> f64 {
        self.coordinates.percent_x(value)
    }

    fn to_percent_y_coord(&self, value: f64, axis: usize) -> f64 {
        self.coordinates.percent_y(value, axis)
    }
}
