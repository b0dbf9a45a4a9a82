use crate::core::{AxisKey, AxisRole, AxisSide, MAX_VALUE_AXES, PlotArea, Viewport};

use super::{AxisOptions, ChartHost};

/// Options resolved once per draw pass, plus the finalized geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisContext {
    pub area: PlotArea,
    pub canvas: Viewport,
    pub num_axes: usize,
    pub draw_axes_at_zero: bool,
    x: AxisOptions,
    y: [AxisOptions; MAX_VALUE_AXES],
}

impl AxisContext {
    #[must_use]
    pub fn resolve(host: &dyn ChartHost, area: PlotArea, canvas: Viewport) -> Self {
        Self {
            area,
            canvas,
            num_axes: host.num_axes(),
            draw_axes_at_zero: host.draw_axes_at_zero(),
            x: host.axis_options(AxisKey::X),
            y: AxisRole::ALL.map(|role| host.axis_options(AxisKey::Y(role))),
        }
    }

    #[must_use]
    pub fn x(&self) -> &AxisOptions {
        &self.x
    }

    #[must_use]
    pub fn y(&self, role: AxisRole) -> &AxisOptions {
        &self.y[role.index()]
    }

    /// Value axes that exist in this chart, capped at four.
    pub fn configured_roles(&self) -> impl Iterator<Item = AxisRole> + '_ {
        AxisRole::ALL
            .into_iter()
            .take(self.num_axes.min(MAX_VALUE_AXES))
    }

    /// `true` when the x axis or any configured value axis is drawn.
    #[must_use]
    pub fn any_axis_drawn(&self) -> bool {
        // y1 always exists, even when the host reports zero axes
        self.x.draw_axis
            || self.y(AxisRole::Y1).draw_axis
            || self.configured_roles().any(|role| self.y(role).draw_axis)
    }

    /// Top edge of the header of `role`: one line above the plot area, or
    /// the canvas top when there is no room. `None` when no header is shown.
    #[must_use]
    pub fn header_top(&self, role: AxisRole) -> Option<f64> {
        let options = self.y(role);
        if !options.draw_axis {
            return None;
        }
        options.header_text()?;
        Some((self.area.y - options.axis_label_font_size).max(0.0))
    }

    /// Smallest top a tick label of `role` may take: the plot area top, pushed
    /// below the axis header when the header occupies that row.
    #[must_use]
    pub fn y_label_floor(&self, role: AxisRole) -> f64 {
        let area_top = self.area.y.max(0.0);
        match self.header_top(role) {
            Some(top) => area_top.max(top + self.y(role).axis_label_font_size),
            None => area_top,
        }
    }

    /// Left edge of the label column for `role`.
    ///
    /// Inner axes sit next to the plot area, separated by their tick size.
    /// Outer axes stack beyond their inner axis when it is drawn, and take
    /// over the inner column when it is not.
    #[must_use]
    pub fn label_column_left(&self, role: AxisRole) -> f64 {
        let own = self.y(role);
        match role.spec().stacks_on {
            None => match role.side() {
                AxisSide::Left => self.area.x - own.axis_label_width - own.axis_tick_size,
                AxisSide::Right => self.area.right() + own.axis_tick_size,
            },
            Some(inner) => {
                let inner_left = self.label_column_left(inner);
                if !self.y(inner).draw_axis {
                    return inner_left;
                }
                match role.side() {
                    AxisSide::Left => inner_left - own.axis_label_width - own.axis_tick_size,
                    AxisSide::Right => inner_left + own.axis_label_width + own.axis_tick_size,
                }
            }
        }
    }
}
