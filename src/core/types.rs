use serde::{Deserialize, Serialize};

use crate::error::{AxesError, AxesResult};

/// Canvas size in CSS pixels (not device pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> AxesResult<Self> {
        if !self.is_valid() {
            return Err(AxesError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Pixel rectangle in which series are drawn, finalized after margin reservation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    pub fn validate(self) -> AxesResult<()> {
        if ![self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite()) {
            return Err(AxesError::InvalidData(
                "plot area coordinates must be finite".to_owned(),
            ));
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(AxesError::InvalidData(format!(
                "plot area size must be >= 0 (w={}, h={})",
                self.w, self.h
            )));
        }
        Ok(())
    }
}
