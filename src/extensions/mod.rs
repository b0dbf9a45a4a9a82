//! Plugin hook surface shared by the host chart and its extensions.

mod plugins;

pub use plugins::{
    ChartPlugin, ClearEvent, LayoutEvent, PluginHook, PluginHooks, WillDrawEvent,
};
