use crate::error::{AxesError, AxesResult};
use crate::render::{Color, LinePrimitive};

/// Minimal 2D path API the axis line painter draws through.
///
/// Mirrors an immediate-mode canvas: state (stroke color, line width) is
/// scoped by `save`/`restore`, and `stroke` paints the path built since the
/// last `begin_path`.
pub trait DrawingSurface {
    fn save(&mut self) -> AxesResult<()>;
    fn restore(&mut self) -> AxesResult<()>;
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self) -> AxesResult<()>;
}

/// One call received by a `RecordingSurface`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StrokeState {
    color: Color,
    width: f64,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Headless surface that records calls and resolves strokes into line segments.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    lines: Vec<LinePrimitive>,
    state: StrokeState,
    saved: Vec<StrokeState>,
    path: Vec<Vec<(f64, f64)>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Segments painted by `stroke` calls so far, in paint order.
    #[must_use]
    pub fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }

    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) -> AxesResult<()> {
        self.commands.push(SurfaceCommand::Save);
        self.saved.push(self.state);
        Ok(())
    }

    fn restore(&mut self) -> AxesResult<()> {
        self.commands.push(SurfaceCommand::Restore);
        self.state = self.saved.pop().ok_or_else(|| {
            AxesError::Backend("restore called without matching save".to_owned())
        })?;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
        self.state.width = width;
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::MoveTo(x, y));
        self.path.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(SurfaceCommand::LineTo(x, y));
        match self.path.last_mut() {
            Some(subpath) => subpath.push((x, y)),
            // canvas semantics: line_to on an empty path acts as move_to
            None => self.path.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self) -> AxesResult<()> {
        self.commands.push(SurfaceCommand::Stroke);
        let StrokeState { color, width } = self.state;
        for subpath in &self.path {
            for pair in subpath.windows(2) {
                let line =
                    LinePrimitive::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1, width, color);
                line.validate()?;
                self.lines.push(line);
            }
        }
        Ok(())
    }
}
