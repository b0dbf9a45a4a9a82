use crate::core::{PlotArea, Viewport};
use crate::error::{AxesError, AxesResult};

/// Receives margin requests issued during the `layout` hook.
pub trait SpaceReserver {
    fn reserve_space_left(&mut self, px: f64);
    fn reserve_space_right(&mut self, px: f64);
    fn reserve_space_bottom(&mut self, px: f64);
}

/// Accumulated margins per side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarginReservation {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Allocator that shrinks the canvas by the reserved margins.
///
/// Requests on the same side accumulate; the plot area is what remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotAreaAllocator {
    canvas: Viewport,
    reserved: MarginReservation,
}

impl PlotAreaAllocator {
    pub fn new(canvas: Viewport) -> AxesResult<Self> {
        Ok(Self {
            canvas: canvas.ensure_valid()?,
            reserved: MarginReservation::default(),
        })
    }

    #[must_use]
    pub fn reserved(&self) -> MarginReservation {
        self.reserved
    }

    /// Final plot area; fails when the margins leave no room.
    pub fn finalize(&self) -> AxesResult<PlotArea> {
        let w = self.canvas.width_px() - self.reserved.left - self.reserved.right;
        let h = self.canvas.height_px() - self.reserved.bottom;
        if w <= 0.0 || h <= 0.0 {
            return Err(AxesError::InvalidData(format!(
                "reserved margins leave no plot area (w={w}, h={h})"
            )));
        }
        let area = PlotArea::new(self.reserved.left, 0.0, w, h);
        area.validate()?;
        Ok(area)
    }
}

impl SpaceReserver for PlotAreaAllocator {
    fn reserve_space_left(&mut self, px: f64) {
        self.reserved.left += px;
    }

    fn reserve_space_right(&mut self, px: f64) {
        self.reserved.right += px;
    }

    fn reserve_space_bottom(&mut self, px: f64) {
        self.reserved.bottom += px;
    }
}

impl SpaceReserver for MarginReservation {
    fn reserve_space_left(&mut self, px: f64) {
        self.left += px;
    }

    fn reserve_space_right(&mut self, px: f64) {
        self.right += px;
    }

    fn reserve_space_bottom(&mut self, px: f64) {
        self.bottom += px;
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotAreaAllocator, SpaceReserver};
    use crate::core::{PlotArea, Viewport};

    #[test]
    fn plot_area_is_canvas_minus_reserved_margins() {
        let mut allocator = PlotAreaAllocator::new(Viewport::new(600, 300)).expect("allocator");
        allocator.reserve_space_left(56.0);
        allocator.reserve_space_left(44.0);
        allocator.reserve_space_right(56.0);
        allocator.reserve_space_bottom(18.0);

        let area = allocator.finalize().expect("plot area");
        assert_eq!(area, PlotArea::new(100.0, 0.0, 444.0, 282.0));
    }

    #[test]
    fn margins_wider_than_canvas_are_rejected() {
        let mut allocator = PlotAreaAllocator::new(Viewport::new(100, 100)).expect("allocator");
        allocator.reserve_space_left(60.0);
        allocator.reserve_space_right(60.0);
        assert!(allocator.finalize().is_err());
    }
}
