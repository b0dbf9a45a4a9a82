use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::{AxisKey, AxisRole};
use crate::error::{AxesError, AxesResult};
use crate::render::Color;

/// Resolved option values for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub draw_axis: bool,
    pub axis_label_width: f64,
    pub axis_tick_size: f64,
    pub axis_label_font_size: f64,
    /// Caption drawn once per value axis, distinct from tick labels.
    pub axis_label_header: Option<String>,
    /// Background of tick labels; header text and border color.
    pub tick_text_color: Color,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self::default_y()
    }
}

impl AxisOptions {
    #[must_use]
    pub fn default_y() -> Self {
        Self {
            draw_axis: true,
            axis_label_width: 50.0,
            axis_tick_size: 3.0,
            axis_label_font_size: 14.0,
            axis_label_header: None,
            tick_text_color: Color::WHITE,
            axis_line_color: Color::BLACK,
            axis_line_width: 0.3,
        }
    }

    #[must_use]
    pub fn default_x() -> Self {
        Self {
            axis_label_width: 60.0,
            ..Self::default_y()
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.draw_axis = false;
        self
    }

    #[must_use]
    pub fn with_label_width(mut self, width: f64) -> Self {
        self.axis_label_width = width;
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.axis_tick_size = tick_size;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.axis_label_font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.axis_label_header = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_tick_text_color(mut self, color: Color) -> Self {
        self.tick_text_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_line(mut self, color: Color, width: f64) -> Self {
        self.axis_line_color = color;
        self.axis_line_width = width;
        self
    }

    /// Header text, treating an empty caption as absent.
    #[must_use]
    pub fn header_text(&self) -> Option<&str> {
        self.axis_label_header
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Width requested from the area allocator for a drawn value axis.
    #[must_use]
    pub fn reserved_width(&self) -> f64 {
        self.axis_label_width + 2.0 * self.axis_tick_size
    }

    pub fn validate(&self, axis: AxisKey) -> AxesResult<()> {
        let namespace = axis.namespace();
        for (name, value) in [
            ("axis_label_width", self.axis_label_width),
            ("axis_tick_size", self.axis_tick_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AxesError::InvalidData(format!(
                    "`{namespace}.{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_label_font_size", self.axis_label_font_size),
            ("axis_line_width", self.axis_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AxesError::InvalidData(format!(
                    "`{namespace}.{name}` must be finite and > 0"
                )));
            }
        }
        self.tick_text_color.validate()?;
        self.axis_line_color.validate()
    }
}

/// Static chart-level option set: one entry per configured value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Category axis. Fields missing from a partial JSON object keep the
    /// x-axis defaults.
    #[serde(deserialize_with = "deserialize_x_axis")]
    pub x: AxisOptions,
    pub y_axes: Vec<AxisOptions>,
    /// Explicit x-axis band height; `None` or `0` derives it from font and tick size.
    pub x_axis_height: Option<f64>,
    pub draw_axes_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x: AxisOptions::default_x(),
            y_axes: vec![AxisOptions::default_y()],
            x_axis_height: None,
            draw_axes_at_zero: false,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_x_axis(mut self, options: AxisOptions) -> Self {
        self.x = options;
        self
    }

    /// Replaces all value axes.
    #[must_use]
    pub fn with_y_axes(mut self, axes: Vec<AxisOptions>) -> Self {
        self.y_axes = axes;
        self
    }

    /// Appends one more value axis (y2, y3, ...).
    #[must_use]
    pub fn with_y_axis(mut self, options: AxisOptions) -> Self {
        self.y_axes.push(options);
        self
    }

    #[must_use]
    pub fn with_x_axis_height(mut self, height: f64) -> Self {
        self.x_axis_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_draw_axes_at_zero(mut self, enabled: bool) -> Self {
        self.draw_axes_at_zero = enabled;
        self
    }

    /// Options for `axis`; value axes beyond the configured ones resolve to defaults.
    #[must_use]
    pub fn resolve(&self, axis: AxisKey) -> AxisOptions {
        match axis {
            AxisKey::X => self.x.clone(),
            AxisKey::Y(role) => self
                .y_axes
                .get(role.index())
                .cloned()
                .unwrap_or_else(AxisOptions::default_y),
        }
    }

    /// Validates every axis. More than four value axes is not an error here; it
    /// is reported during layout and the extra axes are ignored.
    pub fn validate(&self) -> AxesResult<()> {
        self.x.validate(AxisKey::X)?;
        for (index, options) in self.y_axes.iter().enumerate() {
            match AxisRole::from_index(index as i64) {
                Some(role) => options.validate(AxisKey::Y(role))?,
                None => break,
            }
        }
        if let Some(height) = self.x_axis_height {
            if !height.is_finite() || height < 0.0 {
                return Err(AxesError::InvalidData(
                    "`x_axis_height` must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Parses and validates options from JSON.
    pub fn from_json_str(input: &str) -> AxesResult<Self> {
        let options: Self = serde_json::from_str(input)
            .map_err(|err| AxesError::InvalidData(format!("failed to parse chart options: {err}")))?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_string_pretty(&self) -> AxesResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            AxesError::InvalidData(format!("failed to serialize chart options: {err}"))
        })
    }
}

/// Overlays the given fields on `AxisOptions::default_x()`.
fn deserialize_x_axis<'de, D>(deserializer: D) -> Result<AxisOptions, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = Map::<String, Value>::deserialize(deserializer)?;
    let mut merged = serde_json::to_value(AxisOptions::default_x()).map_err(D::Error::custom)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(overrides);
    }
    serde_json::from_value(merged).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::{AxisOptions, ChartOptions};
    use crate::core::{AxisKey, AxisRole};
    use crate::error::AxesError;
    use crate::render::Color;

    #[test]
    fn defaults_match_documented_values() {
        let options = ChartOptions::default();
        assert_eq!(options.y_axes.len(), 1);
        assert_eq!(options.x.axis_label_width, 60.0);
        let y = options.resolve(AxisKey::Y(AxisRole::Y1));
        assert!(y.draw_axis);
        assert_eq!(y.axis_label_width, 50.0);
        assert_eq!(y.axis_tick_size, 3.0);
        assert_eq!(y.axis_label_font_size, 14.0);
        assert_eq!(y.reserved_width(), 56.0);
        assert_eq!(options.x_axis_height, None);
        assert!(!options.draw_axes_at_zero);
    }

    #[test]
    fn unconfigured_value_axes_resolve_to_defaults() {
        let options = ChartOptions::default();
        assert_eq!(
            options.resolve(AxisKey::Y(AxisRole::Y4)),
            AxisOptions::default_y()
        );
    }

    #[test]
    fn empty_header_counts_as_absent() {
        assert_eq!(AxisOptions::default_y().with_header("").header_text(), None);
        assert_eq!(
            AxisOptions::default_y().with_header("USD").header_text(),
            Some("USD")
        );
    }

    #[test]
    fn json_options_fill_missing_fields_with_defaults() {
        let options = ChartOptions::from_json_str(
            r##"{
                "y_axes": [
                    {"axis_label_width": 40, "tick_text_color": "#336699"},
                    {"draw_axis": false}
                ],
                "x_axis_height": 24
            }"##,
        )
        .expect("valid options");

        assert_eq!(options.y_axes.len(), 2);
        assert_eq!(options.y_axes[0].axis_label_width, 40.0);
        assert_eq!(options.y_axes[0].axis_tick_size, 3.0);
        assert_eq!(
            options.y_axes[0].tick_text_color,
            Color::from_rgb8(0x33, 0x66, 0x99)
        );
        assert!(!options.y_axes[1].draw_axis);
        assert_eq!(options.x_axis_height, Some(24.0));
        assert_eq!(options.x, AxisOptions::default_x());
    }

    #[test]
    fn partial_x_axis_keeps_x_defaults() {
        let options = ChartOptions::from_json_str(r#"{"x": {"axis_tick_size": 4}}"#)
            .expect("valid options");
        assert_eq!(options.x.axis_label_width, 60.0);
        assert_eq!(options.x.axis_tick_size, 4.0);
        assert_eq!(options.x, AxisOptions::default_x().with_tick_size(4.0));
    }

    #[test]
    fn invalid_values_are_rejected_on_load() {
        let err = ChartOptions::from_json_str(r#"{"x": {"axis_label_font_size": 0}}"#)
            .expect_err("zero font size");
        assert!(matches!(err, AxesError::InvalidData(message) if message.contains("x.axis_label_font_size")));

        let err = ChartOptions::from_json_str(r#"{"y_axes": [{"tick_text_color": "blue"}]}"#)
            .expect_err("named color");
        assert!(matches!(err, AxesError::InvalidData(_)));
    }

    #[test]
    fn options_survive_json_round_trip() {
        let options = ChartOptions::default()
            .with_y_axis(AxisOptions::default_y().with_header("volume"))
            .with_draw_axes_at_zero(true);
        let json = options.to_json_string_pretty().expect("serialize");
        assert_eq!(ChartOptions::from_json_str(&json), Ok(options));
    }
}
