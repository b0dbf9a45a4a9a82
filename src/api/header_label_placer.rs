use tracing::trace;

use crate::render::{LabelDescriptor, LabelKind, LabelStyle, VerticalAnchor};

use super::AxisContext;

/// Builds one caption per configured, drawn value axis that has header text.
///
/// Headers share the tick-label column of their axis and sit one line above
/// the plot area; when the area starts at the canvas top, the axis' tick
/// labels are kept below the header row instead.
#[must_use]
pub fn place_headers(ctx: &AxisContext) -> Vec<LabelDescriptor> {
    let headers: Vec<LabelDescriptor> = ctx
        .configured_roles()
        .filter_map(|role| {
            let top = ctx.header_top(role)?;
            let options = ctx.y(role);
            let text = options.header_text()?;
            let font_size = options.axis_label_font_size;
            Some(LabelDescriptor {
                kind: LabelKind::Header(role),
                text: text.to_owned(),
                left: ctx.label_column_left(role),
                vertical: VerticalAnchor::Top(top),
                style: LabelStyle {
                    color: Some(options.tick_text_color),
                    border_color: Some(options.tick_text_color),
                    ..LabelStyle::new(font_size, options.axis_label_width)
                },
            })
        })
        .collect();

    trace!(count = headers.len(), "placed axis headers");
    headers
}
