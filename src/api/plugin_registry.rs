use tracing::{debug, warn};

use crate::core::{PlotArea, Tick, Viewport};
use crate::error::{AxesError, AxesResult};
use crate::extensions::{ChartPlugin, ClearEvent, LayoutEvent, PluginHook, WillDrawEvent};
use crate::render::{DrawingSurface, LabelContainer};

use super::{ChartHost, ErrorSink, PlotAreaAllocator};

/// Ticks handed to the `willDrawChart` hooks of one redraw.
#[derive(Debug, Clone, Copy)]
pub struct RedrawTicks<'a> {
    pub x: &'a [Tick],
    /// Bottom-to-top per value axis.
    pub y: &'a [Tick],
}

/// Ordered set of plugins bound to one chart.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ChartPlugin>>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn ChartPlugin>) -> AxesResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(AxesError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(AxesError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    fn bound_to(&mut self, hook: PluginHook) -> impl Iterator<Item = &mut Box<dyn ChartPlugin>> {
        self.plugins
            .iter_mut()
            .filter(move |plugin| plugin.activate().contains(hook))
    }

    pub fn dispatch_layout(&mut self, event: &mut LayoutEvent<'_>) -> AxesResult<()> {
        for plugin in self.bound_to(PluginHook::Layout) {
            plugin.on_layout(event)?;
        }
        Ok(())
    }

    pub fn dispatch_clear(&mut self, event: &mut ClearEvent<'_>) {
        for plugin in self.bound_to(PluginHook::ClearChart) {
            plugin.on_clear(event);
        }
    }

    pub fn dispatch_will_draw(&mut self, event: &mut WillDrawEvent<'_>) -> AxesResult<()> {
        for plugin in self.bound_to(PluginHook::WillDrawChart) {
            plugin.on_will_draw(event)?;
        }
        Ok(())
    }

    /// Runs one full redraw: layout, plot-area allocation, clear, will-draw.
    ///
    /// Hook failures during will-draw go to `errors` and the remaining plugins
    /// still run; the finalized plot area is returned either way.
    pub fn run_redraw_cycle(
        &mut self,
        host: &dyn ChartHost,
        canvas: Viewport,
        ticks: RedrawTicks<'_>,
        surface: &mut dyn DrawingSurface,
        container: &mut dyn LabelContainer,
        errors: &mut dyn ErrorSink,
    ) -> AxesResult<PlotArea> {
        let mut allocator = PlotAreaAllocator::new(canvas)?;
        self.dispatch_layout(&mut LayoutEvent {
            host,
            reserver: &mut allocator,
            errors: &mut *errors,
        })?;
        let plot_area = allocator.finalize()?;
        debug!(
            x = plot_area.x,
            y = plot_area.y,
            w = plot_area.w,
            h = plot_area.h,
            "finalized plot area"
        );

        self.dispatch_clear(&mut ClearEvent {
            container: &mut *container,
        });

        let mut event = WillDrawEvent {
            host,
            surface,
            container,
            plot_area,
            canvas,
            x_ticks: ticks.x,
            y_ticks: ticks.y,
        };
        for plugin in self.bound_to(PluginHook::WillDrawChart) {
            if let Err(error) = plugin.on_will_draw(&mut event) {
                warn!(plugin = plugin.id(), error = %error, "willDrawChart hook failed");
                errors.report_error(error);
            }
        }
        Ok(plot_area)
    }
}
