use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRole, Viewport};
use crate::error::AxesResult;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// What a label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    XTick,
    YTick(AxisRole),
    Header(AxisRole),
}

/// Vertical placement relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VerticalAnchor {
    /// Distance from the canvas top to the label's top edge.
    Top(f64),
    /// Distance from the canvas bottom to the label's bottom edge.
    Bottom(f64),
}

impl VerticalAnchor {
    /// Top edge in canvas coordinates for a label of `height` pixels.
    #[must_use]
    pub fn resolve_top(self, height: f64, canvas: Viewport) -> f64 {
        match self {
            Self::Top(top) => top,
            Self::Bottom(bottom) => canvas.height_px() - bottom - height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub font_size_px: f64,
    pub width_px: f64,
    pub text_align: TextHAlign,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius_px: f64,
}

impl LabelStyle {
    #[must_use]
    pub fn new(font_size_px: f64, width_px: f64) -> Self {
        Self {
            font_size_px,
            width_px,
            text_align: TextHAlign::Center,
            color: None,
            background: None,
            border_color: None,
            border_radius_px: 0.0,
        }
    }
}

/// Toolkit-neutral description of one axis label.
///
/// A rendering adapter turns descriptors into actual surface elements; the
/// axes core never touches a UI toolkit directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub kind: LabelKind,
    pub text: String,
    pub left: f64,
    pub vertical: VerticalAnchor,
    pub style: LabelStyle,
}

impl LabelDescriptor {
    /// Top edge when the label is anchored from the top; `None` for bottom anchors.
    #[must_use]
    pub fn top(&self) -> Option<f64> {
        match self.vertical {
            VerticalAnchor::Top(top) => Some(top),
            VerticalAnchor::Bottom(_) => None,
        }
    }

    /// Resolves the label into a background box (if styled) and a text command.
    #[must_use]
    pub fn to_primitives(&self, canvas: Viewport) -> (Option<RectPrimitive>, TextPrimitive) {
        let style = self.style;
        let height = style.font_size_px;
        let top = self.vertical.resolve_top(height, canvas);

        let rect = (style.background.is_some() || style.border_color.is_some()).then_some(
            RectPrimitive {
                x: self.left,
                y: top,
                width: style.width_px,
                height,
                fill_color: style.background,
                border_color: style.border_color,
                corner_radius: style.border_radius_px,
            },
        );

        let anchor_x = match style.text_align {
            TextHAlign::Left => self.left,
            TextHAlign::Center => self.left + style.width_px / 2.0,
            TextHAlign::Right => self.left + style.width_px,
        };
        let text = TextPrimitive {
            text: self.text.clone(),
            x: anchor_x,
            y: top,
            font_size_px: style.font_size_px,
            color: style.color.unwrap_or(Color::BLACK),
            h_align: style.text_align,
        };
        (rect, text)
    }
}

/// Opaque id for a label attached to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelHandle(u64);

impl LabelHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Attachment surface surrounding the chart canvas (the label "container").
pub trait LabelContainer {
    fn attach(&mut self, label: &LabelDescriptor) -> LabelHandle;
    /// Removes a label; returns `false` when the handle is not attached.
    fn detach(&mut self, handle: LabelHandle) -> bool;
}

/// In-memory label container preserving attach order.
#[derive(Debug, Default)]
pub struct LabelLayer {
    next_handle: u64,
    attached: IndexMap<LabelHandle, LabelDescriptor>,
}

impl LabelLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    #[must_use]
    pub fn get(&self, handle: LabelHandle) -> Option<&LabelDescriptor> {
        self.attached.get(&handle)
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.attached.values()
    }

    pub fn labels_of_kind(&self, kind: LabelKind) -> impl Iterator<Item = &LabelDescriptor> {
        self.attached.values().filter(move |label| label.kind == kind)
    }

    /// Appends every attached label to `frame`, boxes before text.
    pub fn append_to_frame(&self, frame: &mut RenderFrame) -> AxesResult<()> {
        for label in self.attached.values() {
            let (rect, text) = label.to_primitives(frame.viewport);
            if let Some(rect) = rect {
                rect.validate()?;
                frame.rects.push(rect);
            }
            text.validate()?;
            frame.texts.push(text);
        }
        Ok(())
    }
}

impl LabelContainer for LabelLayer {
    fn attach(&mut self, label: &LabelDescriptor) -> LabelHandle {
        let handle = LabelHandle::new(self.next_handle);
        self.next_handle += 1;
        self.attached.insert(handle, label.clone());
        handle
    }

    fn detach(&mut self, handle: LabelHandle) -> bool {
        self.attached.shift_remove(&handle).is_some()
    }
}
