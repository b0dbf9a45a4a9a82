use tracing::{debug, trace};

use crate::error::AxesResult;
use crate::extensions::{
    ChartPlugin, ClearEvent, LayoutEvent, PluginHook, PluginHooks, WillDrawEvent,
};

use super::{
    AxisContext, LabelLifecycleManager, StagedLabels, paint_axis_lines, place_headers,
    plan_reservations, position_x_labels, position_y_labels,
};

pub const AXES_PLUGIN_ID: &str = "axes";

/// Draws axis baselines, tick labels and headers around the plot area.
///
/// Reserves margins on `layout`, removes its labels on `clearChart` and
/// rebuilds everything on `willDrawChart`.
#[derive(Debug, Default)]
pub struct AxesPlugin {
    labels: LabelLifecycleManager,
}

impl AxesPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels currently owned by this plugin.
    #[must_use]
    pub fn labels(&self) -> &LabelLifecycleManager {
        &self.labels
    }
}

impl ChartPlugin for AxesPlugin {
    fn id(&self) -> &str {
        AXES_PLUGIN_ID
    }

    fn activate(&self) -> PluginHooks {
        PluginHooks::new(&[
            PluginHook::Layout,
            PluginHook::ClearChart,
            PluginHook::WillDrawChart,
        ])
    }

    fn on_layout(&mut self, event: &mut LayoutEvent<'_>) -> AxesResult<()> {
        plan_reservations(event.host, event.reserver, event.errors);
        Ok(())
    }

    fn on_clear(&mut self, event: &mut ClearEvent<'_>) {
        let removed = self.labels.detach_all(event.container);
        trace!(removed, "cleared axis labels");
    }

    fn on_will_draw(&mut self, event: &mut WillDrawEvent<'_>) -> AxesResult<()> {
        let leftovers = self.labels.detach_all(event.container);
        if leftovers > 0 {
            debug!(leftovers, "removed axis labels left over from a previous pass");
        }

        let ctx = AxisContext::resolve(event.host, event.plot_area, event.canvas);
        if !ctx.any_axis_drawn() {
            trace!("no axis drawn, skipping axes pass");
            return Ok(());
        }

        // label geometry is computed before anything touches the surface or
        // the container so an unknown tick axis leaves the chart untouched
        let headers = place_headers(&ctx);
        let y_labels = position_y_labels(&ctx, event.y_ticks)?;
        let x_labels = position_x_labels(&ctx, event.x_ticks);

        paint_axis_lines(event.surface, event.host, &ctx, !event.y_ticks.is_empty())?;

        self.labels.attach_all(
            event.container,
            StagedLabels {
                x_labels,
                y_labels,
                headers,
            },
        )
    }
}
