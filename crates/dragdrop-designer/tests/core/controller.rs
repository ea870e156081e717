use dragdrop_core::{Offset, ShapeLayout, ShapeType, ToolType};
use dragdrop_designer::{
    DiagramController, DiagramStore, HighlightAnimator, HighlightTiming, PointerEvent, Scene,
};

fn controller() -> DiagramController {
    let animator = HighlightAnimator::try_current(HighlightTiming::default()).unwrap();
    DiagramController::new(DiagramStore::new(), ShapeLayout::default(), 8.0, animator)
}

fn tap(controller: &mut DiagramController, x: f64, y: f64) {
    controller.handle_pointer(PointerEvent::Down(Offset::new(x, y)));
    controller.handle_pointer(PointerEvent::Up);
}

fn drag(controller: &mut DiagramController, path: &[(f64, f64)]) {
    let (first, rest) = path.split_first().expect("non-empty path");
    controller.handle_pointer(PointerEvent::Down((*first).into()));
    for point in rest {
        controller.handle_pointer(PointerEvent::Move((*point).into()));
    }
    controller.handle_pointer(PointerEvent::Up);
}

#[tokio::test(start_paused = true)]
async fn test_tap_places_centered_shapes() {
    let mut controller = controller();

    tap(&mut controller, 100.0, 100.0);
    let shapes = controller.store().shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].shape_type, ShapeType::Square);
    assert_eq!(shapes[0].offset, Offset::new(76.0, 76.0));

    controller.select_tool(ToolType::Circle);
    tap(&mut controller, 200.0, 200.0);
    let shapes = controller.store().shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[1].shape_type, ShapeType::Circle);
    assert_eq!(shapes[1].offset, Offset::new(176.0, 176.0));
}

#[tokio::test(start_paused = true)]
async fn test_drag_with_shape_tool_places_nothing() {
    let mut controller = controller();
    drag(&mut controller, &[(0.0, 0.0), (50.0, 0.0)]);
    assert!(controller.store().shapes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_draw_line_between_shapes() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    tap(&mut controller, 300.0, 100.0);
    let shapes = controller.store().shapes();

    controller.select_tool(ToolType::DrawLine);
    controller.handle_pointer(PointerEvent::Down(Offset::new(105.0, 95.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(200.0, 100.0)));
    assert_eq!(controller.rubber_band_pointer(), Some(Offset::new(200.0, 100.0)));

    // Mid-draw the in-progress line follows the pointer.
    let scene = Scene::build(
        &controller.store().snapshot(),
        controller.layout(),
        controller.rubber_band_pointer(),
    )
    .unwrap();
    assert_eq!(scene.lines.len(), 1);
    assert!(scene.lines[0].in_progress);
    assert_eq!(scene.lines[0].end, Offset::new(200.0, 100.0));

    controller.handle_pointer(PointerEvent::Move(Offset::new(295.0, 110.0)));
    controller.handle_pointer(PointerEvent::Up);

    let lines = controller.store().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].shape1_id, shapes[0].id);
    assert_eq!(lines[0].shape2_id, Some(shapes[1].id));
    assert_eq!(controller.rubber_band_pointer(), None);
}

#[tokio::test(start_paused = true)]
async fn test_draw_line_to_empty_space_leaves_nothing() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::DrawLine);

    drag(&mut controller, &[(100.0, 100.0), (400.0, 400.0)]);
    assert!(controller.store().lines().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_line_draw_still_finalizes() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    tap(&mut controller, 300.0, 100.0);
    controller.select_tool(ToolType::DrawLine);

    controller.handle_pointer(PointerEvent::Down(Offset::new(100.0, 100.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(300.0, 100.0)));
    controller.handle_pointer(PointerEvent::Cancel);

    let snapshot = controller.store().snapshot();
    assert_eq!(snapshot.line_in_progress, None);
    assert_eq!(snapshot.lines.len(), 1);
    assert!(snapshot.lines[0].shape2_id.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_draw_line_ignores_taps() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::DrawLine);
    tap(&mut controller, 100.0, 100.0);
    assert!(controller.store().lines().is_empty());
    assert_eq!(controller.store().shapes().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_select_drag_uses_down_position_as_anchor() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::Select);

    // The slop-exceeding move is delivered as the first drag step.
    drag(&mut controller, &[(100.0, 100.0), (150.0, 100.0)]);
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(126.0, 76.0));
    assert!(controller.store().dragged_shape().is_none());

    // Drag again from the shape's new position.
    drag(&mut controller, &[(150.0, 100.0), (150.0, 150.0), (150.0, 200.0)]);
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(126.0, 176.0));
}

#[tokio::test(start_paused = true)]
async fn test_small_wiggle_is_a_tap_not_a_drag() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::Select);

    controller.handle_pointer(PointerEvent::Down(Offset::new(100.0, 100.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(104.0, 103.0)));
    let handle = controller.handle_pointer(PointerEvent::Up);

    assert!(handle.is_some());
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(76.0, 76.0));
}

#[tokio::test(start_paused = true)]
async fn test_tool_change_mid_drag_ends_with_start_tool() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::Select);

    controller.handle_pointer(PointerEvent::Down(Offset::new(100.0, 100.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(120.0, 100.0)));
    controller.select_tool(ToolType::DrawLine);
    controller.handle_pointer(PointerEvent::Move(Offset::new(140.0, 100.0)));
    controller.handle_pointer(PointerEvent::Up);

    assert!(controller.store().dragged_shape().is_none());
    assert!(controller.store().lines().is_empty());
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(116.0, 76.0));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_select_drag_keeps_last_position() {
    let mut controller = controller();
    tap(&mut controller, 100.0, 100.0);
    controller.select_tool(ToolType::Select);

    controller.handle_pointer(PointerEvent::Down(Offset::new(100.0, 100.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(130.0, 100.0)));
    controller.handle_pointer(PointerEvent::Move(Offset::new(140.0, 110.0)));
    assert!(controller.store().dragged_shape().is_some());

    controller.handle_pointer(PointerEvent::Cancel);
    assert!(controller.store().dragged_shape().is_none());
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(116.0, 86.0));

    // Moves after the cancel no longer drag anything.
    controller.handle_pointer(PointerEvent::Move(Offset::new(300.0, 300.0)));
    assert_eq!(controller.store().shapes()[0].offset, Offset::new(116.0, 86.0));
}
