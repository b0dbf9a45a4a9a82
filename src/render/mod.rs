mod frame;
mod label;
mod null_renderer;
mod primitives;
mod surface;

pub use frame::RenderFrame;
pub use label::{
    LabelContainer, LabelDescriptor, LabelHandle, LabelKind, LabelLayer, LabelStyle,
    VerticalAnchor,
};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use surface::{DrawingSurface, RecordingSurface, SurfaceCommand};

use crate::error::AxesResult;

/// Contract implemented by any backend that paints a captured `RenderFrame`.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxesResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer, CairoSurface};
