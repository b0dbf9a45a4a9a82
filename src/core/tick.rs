use serde::{Deserialize, Serialize};

use crate::core::AxisRole;
use crate::error::{AxesError, AxesResult};

/// One tick produced by the tick-computation collaborator.
///
/// `pos` is the fractional position along the axis extent (0 = left/top,
/// 1 = right/bottom). A tick without label only carries a gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pos: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<i64>,
}

impl Tick {
    #[must_use]
    pub fn labeled(pos: f64, label: impl Into<String>) -> Self {
        Self {
            pos,
            label: Some(label.into()),
            axis: None,
        }
    }

    #[must_use]
    pub fn gridline(pos: f64) -> Self {
        Self {
            pos,
            label: None,
            axis: None,
        }
    }

    #[must_use]
    pub fn on_axis(mut self, axis: i64) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Resolves the value-axis role referenced by this tick.
    pub fn value_axis_role(&self) -> AxesResult<AxisRole> {
        match self.axis {
            Some(axis) => AxisRole::from_index(axis).ok_or(AxesError::UnknownTickAxis { axis }),
            None => Err(AxesError::MissingTickAxis {
                label: self.label.clone().unwrap_or_default(),
            }),
        }
    }
}
