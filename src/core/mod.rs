pub mod axis;
pub mod tick;
pub mod types;

pub use axis::{AxisKey, AxisRole, AxisRoleSpec, AxisSide, MAX_VALUE_AXES};
pub use tick::Tick;
pub use types::{PlotArea, Viewport};
