use tracing::trace;

use crate::core::{AxisRole, Tick, Viewport};
use crate::error::AxesResult;
use crate::render::{LabelDescriptor, LabelKind, LabelStyle, TextHAlign, VerticalAnchor};

use super::AxisContext;
use super::contrast::contrast_text_color;

/// Space kept between a y label and the canvas bottom before it is pinned there.
pub const Y_LABEL_BOTTOM_MARGIN_PX: f64 = 3.0;
pub const Y_LABEL_CORNER_RADIUS_PX: f64 = 2.0;

/// Builds labels for the labelled y ticks of drawn axes.
///
/// `ticks` are expected bottom-to-top so that the first placed label is the
/// lowest one; see [`correct_bottom_overlap`]. A tick referencing an axis
/// outside y1..y4 fails the whole pass.
pub fn position_y_labels(ctx: &AxisContext, ticks: &[Tick]) -> AxesResult<Vec<LabelDescriptor>> {
    let area = ctx.area;
    let canvas_height = ctx.canvas.height_px();
    let mut labels = Vec::with_capacity(ticks.len());

    for tick in ticks {
        let Some(text) = tick.label.as_deref() else {
            continue;
        };
        let role = tick.value_axis_role()?;
        let options = ctx.y(role);
        if !options.draw_axis {
            continue;
        }

        let font_size = options.axis_label_font_size;
        let y = area.y + tick.pos * area.h;
        let top = (y - font_size / 2.0).max(ctx.y_label_floor(role));
        let vertical = if top + font_size + Y_LABEL_BOTTOM_MARGIN_PX > canvas_height {
            VerticalAnchor::Bottom(0.0)
        } else {
            VerticalAnchor::Top(top)
        };

        let background = options.tick_text_color;
        let style = LabelStyle {
            text_align: TextHAlign::Center,
            color: Some(contrast_text_color(background)),
            background: Some(background),
            border_radius_px: Y_LABEL_CORNER_RADIUS_PX,
            ..LabelStyle::new(font_size, options.axis_label_width)
        };

        labels.push(LabelDescriptor {
            kind: LabelKind::YTick(role),
            text: text.to_owned(),
            left: ctx.label_column_left(role),
            vertical,
            style,
        });
    }

    correct_bottom_overlap(
        &mut labels,
        ctx.y(AxisRole::Y1).axis_label_font_size,
        ctx.canvas,
    );
    trace!(count = labels.len(), "positioned y-axis labels");
    Ok(labels)
}

/// Lifts the lowest y label by half a line when it would touch the x-axis band.
///
/// Only the first label is inspected; it is the lowest one when ticks are
/// produced bottom-to-top. `font_size` is the primary (y1) axis font, used
/// for both the proximity test and the shift whatever axis the label is on.
/// Returns `true` when the label moved.
pub fn correct_bottom_overlap(
    labels: &mut [LabelDescriptor],
    font_size: f64,
    canvas: Viewport,
) -> bool {
    let Some(lowest) = labels.first_mut() else {
        return false;
    };
    let VerticalAnchor::Top(top) = lowest.vertical else {
        return false;
    };
    if top + font_size > canvas.height_px() - font_size {
        lowest.vertical = VerticalAnchor::Top(top - font_size / 2.0);
        return true;
    }
    false
}

/// Builds labels for the labelled x ticks; empty when the x axis is hidden.
///
/// Labels are centered on their tick, then pushed back inside the canvas:
/// right-aligned against the right edge, left-aligned against the left edge.
#[must_use]
pub fn position_x_labels(ctx: &AxisContext, ticks: &[Tick]) -> Vec<LabelDescriptor> {
    let options = ctx.x();
    if !options.draw_axis {
        return Vec::new();
    }

    let area = ctx.area;
    let canvas_width = ctx.canvas.width_px();
    let width = options.axis_label_width;
    let top = area.bottom() + options.axis_tick_size;

    let labels: Vec<LabelDescriptor> = ticks
        .iter()
        .filter_map(|tick| {
            let text = tick.label.as_deref()?;
            let x = area.x + tick.pos * area.w;

            let mut left = x - width / 2.0;
            let mut text_align = TextHAlign::Center;
            if left + width > canvas_width {
                left = canvas_width - width;
                text_align = TextHAlign::Right;
            }
            if left < 0.0 {
                left = 0.0;
                text_align = TextHAlign::Left;
            }

            Some(LabelDescriptor {
                kind: LabelKind::XTick,
                text: text.to_owned(),
                left,
                vertical: VerticalAnchor::Top(top),
                style: LabelStyle {
                    text_align,
                    ..LabelStyle::new(options.axis_label_font_size, width)
                },
            })
        })
        .collect();

    trace!(count = labels.len(), "positioned x-axis labels");
    labels
}
