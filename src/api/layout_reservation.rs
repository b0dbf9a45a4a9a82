use tracing::{debug, warn};

use crate::core::{AxisKey, AxisRole, AxisSide, MAX_VALUE_AXES};
use crate::error::AxesError;

use super::{ChartHost, ErrorSink, MarginReservation, SpaceReserver};

/// Issues the margin requests for all drawn axes and returns their totals.
///
/// Each drawn value axis asks for its label width plus a tick on both sides
/// of the label. The x axis asks for an explicit band height when one is
/// configured, otherwise for one line of label text plus two ticks. More than
/// four value axes is reported to `errors`; only the first four reserve space.
pub fn plan_reservations(
    host: &dyn ChartHost,
    reserver: &mut dyn SpaceReserver,
    errors: &mut dyn ErrorSink,
) -> MarginReservation {
    let mut planned = MarginReservation::default();
    let num_axes = host.num_axes();

    let y1 = host.axis_options(AxisKey::Y(AxisRole::Y1));
    if y1.draw_axis {
        planned.reserve_space_left(y1.reserved_width());
        reserver.reserve_space_left(y1.reserved_width());
    }

    let x = host.axis_options(AxisKey::X);
    if x.draw_axis {
        let height = match host.x_axis_height() {
            Some(height) if height != 0.0 => height,
            _ => x.axis_label_font_size + 2.0 * x.axis_tick_size,
        };
        planned.reserve_space_bottom(height);
        reserver.reserve_space_bottom(height);
    }

    for role in [AxisRole::Y2, AxisRole::Y3, AxisRole::Y4] {
        if num_axes <= role.index() {
            break;
        }
        let options = host.axis_options(AxisKey::Y(role));
        if !options.draw_axis {
            continue;
        }
        let width = options.reserved_width();
        match role.side() {
            AxisSide::Left => {
                planned.reserve_space_left(width);
                reserver.reserve_space_left(width);
            }
            AxisSide::Right => {
                planned.reserve_space_right(width);
                reserver.reserve_space_right(width);
            }
        }
    }

    if num_axes > MAX_VALUE_AXES {
        let error = AxesError::TooManyAxes {
            requested: num_axes,
        };
        warn!(error = %error, "ignoring value axes beyond the fourth");
        errors.report_error(error);
    }

    debug!(
        left = planned.left,
        right = planned.right,
        bottom = planned.bottom,
        num_axes,
        "planned axis margin reservations"
    );
    planned
}
