mod allocator;
pub mod axes_plugin;
mod axis_context;
pub mod axis_line_painter;
pub mod contrast;
pub mod header_label_placer;
mod host;
pub mod label_lifecycle;
pub mod layout_reservation;
mod options;
mod plugin_registry;
pub mod tick_label_positioner;

pub use allocator::{MarginReservation, PlotAreaAllocator, SpaceReserver};
pub use axes_plugin::{AXES_PLUGIN_ID, AxesPlugin};
pub use axis_context::AxisContext;
pub use axis_line_painter::{half_down, half_up, paint_axis_lines};
pub use contrast::{contrast_text_color, ideal_text_color};
pub use header_label_placer::place_headers;
pub use host::{ChartHost, ErrorSink, LinearCoordinates, LogErrorSink, StaticHost};
pub use label_lifecycle::{AttachedLabel, LabelLifecycleManager, StagedLabels};
pub use layout_reservation::plan_reservations;
pub use options::{AxisOptions, ChartOptions};
pub use plugin_registry::{PluginRegistry, RedrawTicks};
pub use tick_label_positioner::{
    Y_LABEL_BOTTOM_MARGIN_PX, Y_LABEL_CORNER_RADIUS_PX, correct_bottom_overlap,
    position_x_labels, position_y_labels,
};
