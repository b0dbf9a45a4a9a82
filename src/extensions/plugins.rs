use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::api::{ChartHost, ErrorSink, SpaceReserver};
use crate::core::{PlotArea, Tick, Viewport};
use crate::error::AxesResult;
use crate::render::{DrawingSurface, LabelContainer};

/// Lifecycle hooks a plugin can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginHook {
    Layout,
    ClearChart,
    WillDrawChart,
}

impl PluginHook {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::ClearChart => "clearChart",
            Self::WillDrawChart => "willDrawChart",
        }
    }
}

/// Hooks bound by a plugin at activation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginHooks {
    hooks: SmallVec<[PluginHook; 3]>,
}

impl PluginHooks {
    #[must_use]
    pub fn new(hooks: &[PluginHook]) -> Self {
        let mut bound = Self::default();
        for hook in hooks {
            if !bound.contains(*hook) {
                bound.hooks.push(*hook);
            }
        }
        bound
    }

    #[must_use]
    pub fn contains(&self, hook: PluginHook) -> bool {
        self.hooks.contains(&hook)
    }

    pub fn iter(&self) -> impl Iterator<Item = PluginHook> + '_ {
        self.hooks.iter().copied()
    }
}

/// Payload of the `layout` hook, dispatched before the plot area exists.
pub struct LayoutEvent<'a> {
    pub host: &'a dyn ChartHost,
    pub reserver: &'a mut dyn SpaceReserver,
    pub errors: &'a mut dyn ErrorSink,
}

/// Payload of the `clearChart` hook.
pub struct ClearEvent<'a> {
    pub container: &'a mut dyn LabelContainer,
}

/// Payload of the `willDrawChart` hook, dispatched with the final plot area.
pub struct WillDrawEvent<'a> {
    pub host: &'a dyn ChartHost,
    pub surface: &'a mut dyn DrawingSurface,
    pub container: &'a mut dyn LabelContainer,
    pub plot_area: PlotArea,
    pub canvas: Viewport,
    pub x_ticks: &'a [Tick],
    /// Value-axis ticks. Producers emit them bottom-to-top; the lowest label
    /// of the pass is the first labelled tick of a drawn axis.
    pub y_ticks: &'a [Tick],
}

/// Extension hook interface bound by the host chart.
pub trait ChartPlugin {
    fn id(&self) -> &str;

    /// Hooks this plugin wants dispatched.
    fn activate(&self) -> PluginHooks;

    fn on_layout(&mut self, _event: &mut LayoutEvent<'_>) -> AxesResult<()> {
        Ok(())
    }

    fn on_clear(&mut self, _event: &mut ClearEvent<'_>) {}

    fn on_will_draw(&mut self, _event: &mut WillDrawEvent<'_>) -> AxesResult<()> {
        Ok(())
    }
}
