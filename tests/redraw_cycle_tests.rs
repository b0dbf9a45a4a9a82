use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chart_axes::AxesError;
use chart_axes::api::{AxesPlugin, AxisOptions, ChartOptions, PluginRegistry, RedrawTicks, StaticHost};
use chart_axes::core::{AxisRole, PlotArea, Tick, Viewport};
use chart_axes::extensions::{
    ChartPlugin, ClearEvent, LayoutEvent, PluginHook, PluginHooks, WillDrawEvent,
};
use chart_axes::render::{
    LabelKind, LabelLayer, NullRenderer, RecordingSurface, RenderFrame, Renderer, TextHAlign,
    VerticalAnchor,
};

const CANVAS: Viewport = Viewport::new(600, 300);

fn single_axis_host() -> StaticHost {
    StaticHost::new(
        ChartOptions::default()
            .with_y_axes(vec![AxisOptions::default_y().with_header("Price")])
            .with_x_axis(AxisOptions::default_x().with_font_size(12.0)),
    )
}

fn y_ticks() -> Vec<Tick> {
    // bottom-to-top
    vec![
        Tick::labeled(1.0, "0").on_axis(0),
        Tick::labeled(0.5, "50").on_axis(0),
        Tick::labeled(0.0, "100").on_axis(0),
    ]
}

fn x_ticks() -> Vec<Tick> {
    vec![
        Tick::labeled(0.0, "Jan"),
        Tick::gridline(0.5),
        Tick::labeled(1.0, "Dec"),
    ]
}

fn registry_with_axes() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry
        .register_plugin(Box::new(AxesPlugin::new()))
        .expect("register axes plugin");
    registry
}

#[test]
fn full_cycle_reserves_paints_and_attaches() {
    let host = single_axis_host();
    let mut registry = registry_with_axes();
    let mut surface = RecordingSurface::new();
    let mut layer = LabelLayer::new();
    let mut errors = Vec::new();
    let (x, y) = (x_ticks(), y_ticks());

    let area = registry
        .run_redraw_cycle(
            &host,
            CANVAS,
            RedrawTicks { x: &x, y: &y },
            &mut surface,
            &mut layer,
            &mut errors,
        )
        .expect("redraw");

    assert!(errors.is_empty());
    assert_eq!(area, PlotArea::new(56.0, 0.0, 544.0, 282.0));

    let lines = surface.lines();
    assert_eq!(lines.len(), 2);
    assert_relative_eq!(lines[0].x1, 56.5);
    assert_relative_eq!(lines[0].y2, 281.5);
    assert_relative_eq!(lines[1].y1, 281.5);
    assert_relative_eq!(lines[1].x2, 600.5);

    let kinds: Vec<LabelKind> = layer.labels().map(|label| label.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LabelKind::Header(AxisRole::Y1),
            LabelKind::YTick(AxisRole::Y1),
            LabelKind::YTick(AxisRole::Y1),
            LabelKind::YTick(AxisRole::Y1),
            LabelKind::XTick,
            LabelKind::XTick,
        ]
    );

    let y_tops: Vec<Option<f64>> = layer
        .labels_of_kind(LabelKind::YTick(AxisRole::Y1))
        .map(|label| label.top())
        .collect();
    // the lowest label is lifted half a line clear of the x-axis band and the
    // highest one sits below the header row
    assert_eq!(y_tops, vec![Some(268.0), Some(134.0), Some(14.0)]);

    let header = layer
        .labels_of_kind(LabelKind::Header(AxisRole::Y1))
        .next()
        .expect("header");
    let header_top = header.top().expect("header top");
    for label in layer.labels_of_kind(LabelKind::YTick(AxisRole::Y1)) {
        let top = label.top().expect("y label top");
        let disjoint = top >= header_top + header.style.font_size_px
            || top + label.style.font_size_px <= header_top;
        assert!(disjoint, "y label at {top} overlaps the header");
    }

    let x_labels: Vec<_> = layer.labels_of_kind(LabelKind::XTick).collect();
    assert_eq!(x_labels[0].left, 26.0);
    assert_eq!(x_labels[0].style.text_align, TextHAlign::Center);
    assert_eq!(x_labels[1].left, 540.0);
    assert_eq!(x_labels[1].style.text_align, TextHAlign::Right);
    assert_eq!(x_labels[1].vertical, VerticalAnchor::Top(285.0));
}

#[test]
fn repeated_cycles_do_not_accumulate_labels() {
    let host = single_axis_host();
    let mut registry = registry_with_axes();
    let mut surface = RecordingSurface::new();
    let mut layer = LabelLayer::new();
    let mut errors = Vec::new();
    let (x, y) = (x_ticks(), y_ticks());

    for _ in 0..3 {
        surface.clear();
        registry
            .run_redraw_cycle(
                &host,
                CANVAS,
                RedrawTicks { x: &x, y: &y },
                &mut surface,
                &mut layer,
                &mut errors,
            )
            .expect("redraw");
        assert_eq!(layer.len(), 6);
        assert_eq!(surface.lines().len(), 2);
    }
}

#[test]
fn unknown_tick_axis_is_reported_and_leaves_no_labels() {
    let host = single_axis_host();
    let mut registry = registry_with_axes();
    let mut surface = RecordingSurface::new();
    let mut layer = LabelLayer::new();
    let mut errors = Vec::new();
    let (x, y) = (x_ticks(), y_ticks());

    registry
        .run_redraw_cycle(
            &host,
            CANVAS,
            RedrawTicks { x: &x, y: &y },
            &mut surface,
            &mut layer,
            &mut errors,
        )
        .expect("first redraw");
    assert_eq!(layer.len(), 6);

    let broken = vec![Tick::labeled(0.5, "?").on_axis(7)];
    registry
        .run_redraw_cycle(
            &host,
            CANVAS,
            RedrawTicks { x: &x, y: &broken },
            &mut surface,
            &mut layer,
            &mut errors,
        )
        .expect("cycle itself completes");

    assert_eq!(errors, vec![AxesError::UnknownTickAxis { axis: 7 }]);
    assert!(layer.is_empty());
}

#[test]
fn too_many_axes_is_reported_during_layout() {
    let mut options = ChartOptions::default();
    options.y_axes = vec![AxisOptions::default_y(); 5];
    let host = StaticHost::new(options);
    let mut registry = registry_with_axes();
    let mut errors = Vec::new();

    let area = registry
        .run_redraw_cycle(
            &host,
            CANVAS,
            RedrawTicks { x: &[], y: &[] },
            &mut RecordingSurface::new(),
            &mut LabelLayer::new(),
            &mut errors,
        )
        .expect("redraw");

    assert_eq!(errors, vec![AxesError::TooManyAxes { requested: 5 }]);
    assert_eq!(area.x, 112.0);
    assert_eq!(area.w, 600.0 - 224.0);
}

#[test]
fn captured_frame_renders_through_null_renderer() {
    let host = single_axis_host();
    let mut registry = registry_with_axes();
    let mut surface = RecordingSurface::new();
    let mut layer = LabelLayer::new();
    let (x, y) = (x_ticks(), y_ticks());

    registry
        .run_redraw_cycle(
            &host,
            CANVAS,
            RedrawTicks { x: &x, y: &y },
            &mut surface,
            &mut layer,
            &mut Vec::new(),
        )
        .expect("redraw");

    let frame = RenderFrame::capture(CANVAS, &surface, &layer).expect("capture");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_line_count, 2);
    // header and y labels carry a box, x labels are bare text
    assert_eq!(renderer.last_rect_count, 4);
    assert_eq!(renderer.last_text_count, 6);
}

struct HookRecorder {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl ChartPlugin for HookRecorder {
    fn id(&self) -> &str {
        "recorder"
    }

    fn activate(&self) -> PluginHooks {
        PluginHooks::new(&[
            PluginHook::Layout,
            PluginHook::ClearChart,
            PluginHook::WillDrawChart,
        ])
    }

    fn on_layout(&mut self, _event: &mut LayoutEvent<'_>) -> Result<(), AxesError> {
        self.calls.borrow_mut().push(PluginHook::Layout.name());
        Ok(())
    }

    fn on_clear(&mut self, _event: &mut ClearEvent<'_>) {
        self.calls.borrow_mut().push(PluginHook::ClearChart.name());
    }

    fn on_will_draw(&mut self, event: &mut WillDrawEvent<'_>) -> Result<(), AxesError> {
        assert_eq!(event.plot_area.x, 56.0);
        self.calls.borrow_mut().push(PluginHook::WillDrawChart.name());
        Ok(())
    }
}

#[test]
fn hooks_fire_in_redraw_order_with_final_plot_area() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut registry = registry_with_axes();
    registry
        .register_plugin(Box::new(HookRecorder {
            calls: Rc::clone(&calls),
        }))
        .expect("register recorder");

    registry
        .run_redraw_cycle(
            &single_axis_host(),
            CANVAS,
            RedrawTicks { x: &[], y: &[] },
            &mut RecordingSurface::new(),
            &mut LabelLayer::new(),
            &mut Vec::new(),
        )
        .expect("redraw");

    assert_eq!(
        *calls.borrow(),
        vec!["layout", "clearChart", "willDrawChart"]
    );
}
