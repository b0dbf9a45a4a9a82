//! chart-axes: axis rendering for canvas charts.
//!
//! The [`api::AxesPlugin`] binds to a host chart's `layout`, `clearChart`
//! and `willDrawChart` hooks. It reserves margins for up to four value axes
//! and the x axis, strokes the axis baselines on a [`render::DrawingSurface`]
//! and attaches tick labels and axis headers to a [`render::LabelContainer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{AxesPlugin, AxisOptions, ChartHost, ChartOptions, PluginRegistry};
pub use error::{AxesError, AxesResult};
