use crate::core::Viewport;
use crate::error::{AxesError, AxesResult};
use crate::render::{LabelLayer, LinePrimitive, RecordingSurface, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one axes draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Collects the strokes recorded on `surface` and the labels attached to `layer`.
    pub fn capture(
        viewport: Viewport,
        surface: &RecordingSurface,
        layer: &LabelLayer,
    ) -> AxesResult<Self> {
        let mut frame = Self::new(viewport);
        frame.lines.extend_from_slice(surface.lines());
        layer.append_to_frame(&mut frame)?;
        Ok(frame)
    }

    pub fn validate(&self) -> AxesResult<()> {
        if !self.viewport.is_valid() {
            return Err(AxesError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
