use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{AxesError, AxesResult};
use crate::render::{
    Color, DrawingSurface, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const DEFAULT_FONT_FAMILY: &str = "Sans";

/// `DrawingSurface` over an external Cairo context (for example a GTK
/// `DrawingArea` draw callback).
#[derive(Debug)]
pub struct CairoSurface<'a> {
    context: &'a Context,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn save(&mut self) -> AxesResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> AxesResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn set_stroke_color(&mut self, color: Color) {
        apply_color(self.context, color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) -> AxesResult<()> {
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke axis line", err))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Offscreen Cairo + Pango renderer for captured axes frames.
///
/// Axis baselines go first, then label boxes, then label text on top.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> AxesResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(AxesError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: Color::WHITE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn paint_frame(&self, context: &Context, frame: &RenderFrame) -> AxesResult<CairoRenderStats> {
        apply_color(context, self.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let lines_drawn = stroke_baselines(&mut CairoSurface::new(context), &frame.lines)?;
        for rect in &frame.rects {
            paint_label_box(context, *rect)?;
        }

        let layout = pangocairo::functions::create_layout(context);
        let mut font = FontDescription::new();
        font.set_family(&self.font_family);
        for text in &frame.texts {
            font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
            layout.set_font_description(Some(&font));
            layout.set_text(&text.text);
            let (width, _) = layout.pixel_size();
            apply_color(context, text.color);
            context.move_to(aligned_left(text, f64::from(width)), text.y);
            pangocairo::functions::show_layout(context, &layout);
        }

        Ok(CairoRenderStats {
            lines_drawn,
            rects_drawn: frame.rects.len(),
            texts_drawn: frame.texts.len(),
        })
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> AxesResult<()> {
        frame.validate()?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = self.paint_frame(&context, frame)?;
        Ok(())
    }
}

/// Replays captured axis lines through a drawing surface, one path each.
fn stroke_baselines(surface: &mut dyn DrawingSurface, lines: &[LinePrimitive]) -> AxesResult<usize> {
    surface.save()?;
    for line in lines {
        surface.set_stroke_color(line.color);
        surface.set_line_width(line.stroke_width);
        surface.begin_path();
        surface.move_to(line.x1, line.y1);
        surface.line_to(line.x2, line.y2);
        surface.stroke()?;
    }
    surface.restore()?;
    Ok(lines.len())
}

/// Left edge of a rendered text run of `width` pixels.
fn aligned_left(text: &TextPrimitive, width: f64) -> f64 {
    match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    }
}

fn paint_label_box(context: &Context, rect: RectPrimitive) -> AxesResult<()> {
    trace_label_box(context, rect);
    if let Some(fill) = rect.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill label box", err))?;
    }
    if let Some(border) = rect.border_color {
        apply_color(context, border);
        context.set_line_width(1.0);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke label border", err))?;
    }
    context.new_path();
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Adds the label box outline to the current path, rounding the corners
/// when the label style asks for it.
fn trace_label_box(context: &Context, rect: RectPrimitive) {
    let radius = rect.corner_radius.min(rect.width.min(rect.height) / 2.0);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (near_x, far_x) = (rect.x + radius, rect.x + rect.width - radius);
    let (near_y, far_y) = (rect.y + radius, rect.y + rect.height - radius);
    // clockwise from the top-right corner
    let corners = [
        (far_x, near_y, -FRAC_PI_2),
        (far_x, far_y, 0.0),
        (near_x, far_y, FRAC_PI_2),
        (near_x, near_y, PI),
    ];
    context.new_sub_path();
    for (cx, cy, start) in corners {
        context.arc(cx, cy, radius, start, start + FRAC_PI_2);
    }
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AxesError {
    AxesError::Backend(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{aligned_left, stroke_baselines};
    use crate::render::{
        Color, LinePrimitive, RecordingSurface, TextHAlign, TextPrimitive,
    };

    fn text(h_align: TextHAlign) -> TextPrimitive {
        TextPrimitive {
            text: "42".to_owned(),
            x: 100.0,
            y: 10.0,
            font_size_px: 12.0,
            color: Color::BLACK,
            h_align,
        }
    }

    #[test]
    fn text_is_shifted_by_its_alignment() {
        assert_eq!(aligned_left(&text(TextHAlign::Left), 30.0), 100.0);
        assert_eq!(aligned_left(&text(TextHAlign::Center), 30.0), 85.0);
        assert_eq!(aligned_left(&text(TextHAlign::Right), 30.0), 70.0);
    }

    #[test]
    fn baselines_replay_as_separate_strokes() {
        let lines = [
            LinePrimitive::new(56.5, 0.0, 56.5, 281.5, 1.0, Color::BLACK),
            LinePrimitive::new(56.0, 281.5, 600.5, 281.5, 2.0, Color::WHITE),
        ];
        let mut surface = RecordingSurface::new();
        let drawn = stroke_baselines(&mut surface, &lines).expect("stroke");
        assert_eq!(drawn, 2);
        assert_eq!(surface.lines(), &lines);
        assert_eq!(surface.save_depth(), 0);
    }
}
