use crate::core::AxisRole;
use crate::error::AxesResult;
use crate::render::{Color, DrawingSurface};

use super::{AxisContext, ChartHost};

/// Rounds half-way values up (towards +inf), like canvas-oriented `Math.round`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Pixel-center x coordinate for a crisp 1px vertical stroke.
#[must_use]
pub fn half_up(value: f64) -> f64 {
    round_half_up(value) + 0.5
}

/// Pixel-center y coordinate for a crisp 1px horizontal stroke.
#[must_use]
pub fn half_down(value: f64) -> f64 {
    round_half_up(value) - 0.5
}

/// Clamps a zero-crossing fraction into the plot area, using `fallback`
/// when it is outside `[0, 1]` or undefined.
fn zero_crossing_or(fraction: f64, fallback: f64) -> f64 {
    if (0.0..=1.0).contains(&fraction) {
        fraction
    } else {
        fallback
    }
}

/// Strokes the axis baselines.
///
/// - y1: vertical line on the left edge whenever the pass has y ticks.
/// - y2: vertical line on the right edge when exactly two axes exist.
/// - x: horizontal line on the bottom edge when the x axis is drawn.
///
/// With "draw axes at zero" the y1 and x lines move to the data origin.
/// Returns the number of strokes issued.
pub fn paint_axis_lines(
    surface: &mut dyn DrawingSurface,
    host: &dyn ChartHost,
    ctx: &AxisContext,
    has_y_ticks: bool,
) -> AxesResult<usize> {
    surface.save()?;
    let painted = paint_baselines(surface, host, ctx, has_y_ticks);
    let restored = surface.restore();
    let painted = painted?;
    restored?;
    Ok(painted)
}

fn paint_baselines(
    surface: &mut dyn DrawingSurface,
    host: &dyn ChartHost,
    ctx: &AxisContext,
    has_y_ticks: bool,
) -> AxesResult<usize> {
    let area = ctx.area;
    let mut painted = 0;

    if has_y_ticks {
        let axis_x = if ctx.draw_axes_at_zero {
            let fraction = zero_crossing_or(host.to_percent_x_coord(0.0), 0.0);
            half_up(area.x + fraction * area.w)
        } else {
            half_up(area.x)
        };
        let y1 = ctx.y(AxisRole::Y1);
        stroke_segment(
            surface,
            y1.axis_line_color,
            y1.axis_line_width,
            (axis_x, half_down(area.y)),
            (axis_x, half_down(area.bottom())),
        )?;
        painted += 1;

        if ctx.num_axes == 2 {
            let y2 = ctx.y(AxisRole::Y2);
            let axis_x = half_down(area.right());
            stroke_segment(
                surface,
                y2.axis_line_color,
                y2.axis_line_width,
                (axis_x, half_down(area.y)),
                (axis_x, half_down(area.bottom())),
            )?;
            painted += 1;
        }
    }

    let x = ctx.x();
    if x.draw_axis {
        let axis_y = if ctx.draw_axes_at_zero {
            let fraction = zero_crossing_or(host.to_percent_y_coord(0.0, 0), 1.0);
            half_down(area.y + fraction * area.h)
        } else {
            half_down(area.bottom())
        };
        stroke_segment(
            surface,
            x.axis_line_color,
            x.axis_line_width,
            (half_up(area.x), axis_y),
            (half_up(area.right()), axis_y),
        )?;
        painted += 1;
    }

    Ok(painted)
}

fn stroke_segment(
    surface: &mut dyn DrawingSurface,
    color: Color,
    width: f64,
    from: (f64, f64),
    to: (f64, f64),
) -> AxesResult<()> {
    surface.set_stroke_color(color);
    surface.set_line_width(width);
    surface.begin_path();
    surface.move_to(from.0, from.1);
    surface.line_to(to.0, to.1);
    surface.stroke()
}

#[cfg(test)]
mod tests {
    use super::{half_down, half_up, paint_axis_lines};
    use crate::api::{AxisContext, AxisOptions, ChartOptions, LinearCoordinates, StaticHost};
    use crate::core::{PlotArea, Viewport};
    use crate::render::{Color, RecordingSurface, SurfaceCommand};

    const AREA: PlotArea = PlotArea::new(56.0, 0.0, 488.0, 282.0);

    fn paint(host: &StaticHost, has_y_ticks: bool) -> RecordingSurface {
        let ctx = AxisContext::resolve(host, AREA, Viewport::new(600, 300));
        let mut surface = RecordingSurface::new();
        paint_axis_lines(&mut surface, host, &ctx, has_y_ticks).expect("paint");
        surface
    }

    #[test]
    fn half_pixel_rounding_matches_canvas_rounding() {
        assert_eq!(half_up(56.0), 56.5);
        assert_eq!(half_up(56.5), 57.5);
        assert_eq!(half_up(-0.5), 0.5);
        assert_eq!(half_down(282.0), 281.5);
        assert_eq!(half_down(10.4), 9.5);
    }

    #[test]
    fn default_chart_paints_left_and_bottom_lines() {
        let surface = paint(&StaticHost::default(), true);
        let lines = surface.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].x1, lines[0].y1, lines[0].x2, lines[0].y2), (56.5, -0.5, 56.5, 281.5));
        assert_eq!((lines[1].x1, lines[1].y1, lines[1].x2, lines[1].y2), (56.5, 281.5, 544.5, 281.5));
        assert_eq!(surface.commands().first(), Some(&SurfaceCommand::Save));
        assert_eq!(surface.commands().last(), Some(&SurfaceCommand::Restore));
    }

    #[test]
    fn no_y_ticks_means_no_vertical_line() {
        let surface = paint(&StaticHost::default(), false);
        assert_eq!(surface.lines().len(), 1);
        assert_eq!(surface.lines()[0].y1, surface.lines()[0].y2);
    }

    #[test]
    fn secondary_line_only_with_exactly_two_axes() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let two = ChartOptions::default()
            .with_y_axis(AxisOptions::default_y().with_axis_line(red, 2.0));
        let surface = paint(&StaticHost::new(two.clone()), true);
        assert_eq!(surface.lines().len(), 3);
        let y2 = surface.lines()[1];
        assert_eq!(y2.x1, 543.5);
        assert_eq!(y2.color, red);
        assert_eq!(y2.stroke_width, 2.0);

        let three = two.with_y_axis(AxisOptions::default_y());
        assert_eq!(paint(&StaticHost::new(three), true).lines().len(), 2);
    }

    #[test]
    fn axes_at_zero_follow_the_data_origin() {
        let host = StaticHost::new(ChartOptions::default().with_draw_axes_at_zero(true))
            .with_coordinates(LinearCoordinates::new((-1.0, 3.0), vec![(-10.0, 10.0)]));
        let lines = paint(&host, true).lines().to_vec();
        // x = 0 sits a quarter into the width, y = 0 half way down
        assert_eq!(lines[0].x1, half_up(56.0 + 0.25 * 488.0));
        assert_eq!(lines[1].y1, half_down(0.5 * 282.0));
    }

    #[test]
    fn axes_at_zero_clamp_outside_or_undefined_crossings() {
        let host = StaticHost::new(ChartOptions::default().with_draw_axes_at_zero(true))
            .with_coordinates(LinearCoordinates::new((5.0, 10.0), vec![(1.0, 1.0)]));
        let lines = paint(&host, true).lines().to_vec();
        assert_eq!(lines[0].x1, half_up(56.0));
        assert_eq!(lines[1].y1, half_down(282.0));
    }
}
