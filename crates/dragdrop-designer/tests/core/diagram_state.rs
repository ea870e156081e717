use std::sync::Arc;

use dragdrop_core::{
    BoxSize, DiagramEvent, EventCategory, EventFilter, Offset, Shape, ShapeType, ToolType,
};
use dragdrop_designer::DiagramStore;
use parking_lot::Mutex;

fn box48() -> BoxSize {
    BoxSize::new(48.0).unwrap()
}

fn store_with(shapes: &[(ShapeType, f64, f64)]) -> (DiagramStore, Vec<Shape>) {
    let store = DiagramStore::new();
    let shapes: Vec<Shape> = shapes
        .iter()
        .map(|(t, x, y)| Shape::new(*t, Offset::new(*x, *y)))
        .collect();
    for shape in &shapes {
        store.add_shape(shape.clone());
    }
    (store, shapes)
}

#[test]
fn test_new_store_defaults() {
    let store = DiagramStore::new();
    let snapshot = store.snapshot();
    assert!(snapshot.shapes.is_empty());
    assert!(snapshot.lines.is_empty());
    assert_eq!(snapshot.selected_tool, ToolType::Square);
    assert_eq!(snapshot.highlighted, None);
    assert_eq!(snapshot.dragging, None);
    assert_eq!(snapshot.line_in_progress, None);
}

#[test]
fn test_add_shape_appends_on_top() {
    let (store, shapes) = store_with(&[
        (ShapeType::Square, 0.0, 0.0),
        (ShapeType::Circle, 10.0, 10.0),
    ]);
    let ids: Vec<_> = store.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![shapes[0].id, shapes[1].id]);
    assert_eq!(
        store.shape_at(Offset::new(20.0, 20.0), box48()).map(|s| s.id),
        Some(shapes[1].id)
    );
}

#[test]
fn test_drag_moves_shape_keeping_anchor_and_z_order() {
    let (store, shapes) = store_with(&[
        (ShapeType::Square, 100.0, 100.0),
        (ShapeType::Circle, 300.0, 300.0),
    ]);

    let grabbed = store.start_drag(Offset::new(110.0, 120.0), box48());
    assert_eq!(grabbed, Some(shapes[0].id));

    store.drag(Offset::new(160.0, 120.0));
    let moved = store.shapes();
    assert_eq!(moved[0].id, shapes[0].id);
    assert_eq!(moved[0].offset, Offset::new(150.0, 100.0));
    assert_eq!(moved[1], shapes[1]);
    assert_eq!(store.dragged_shape().map(|s| s.offset), Some(Offset::new(150.0, 100.0)));

    store.end_drag();
    assert!(store.dragged_shape().is_none());
}

#[test]
fn test_drag_there_and_back_restores_offset() {
    let (store, shapes) = store_with(&[(ShapeType::Triangle, 40.0, 60.0)]);
    let p1 = Offset::new(50.0, 70.0);
    let p2 = Offset::new(250.0, 10.0);

    store.start_drag(p1, box48());
    store.drag(p2);
    store.drag(p1);
    store.end_drag();

    assert_eq!(store.shapes()[0].offset, shapes[0].offset);
}

#[test]
fn test_start_drag_on_empty_canvas_is_noop() {
    let (store, shapes) = store_with(&[(ShapeType::Square, 0.0, 0.0)]);
    assert_eq!(store.start_drag(Offset::new(500.0, 500.0), box48()), None);
    store.drag(Offset::new(10.0, 10.0));
    store.end_drag();
    assert_eq!(store.shapes(), shapes);
}

#[test]
fn test_second_drag_resolves_moved_shape() {
    let (store, shapes) = store_with(&[(ShapeType::Square, 0.0, 0.0)]);
    store.start_drag(Offset::new(24.0, 24.0), box48());
    store.drag(Offset::new(74.0, 24.0));
    store.end_drag();

    // The old position is now empty; the new one resolves to the same shape.
    assert_eq!(store.start_drag(Offset::new(10.0, 24.0), box48()), None);
    assert_eq!(store.start_drag(Offset::new(74.0, 24.0), box48()), Some(shapes[0].id));
    store.drag(Offset::new(84.0, 34.0));
    assert_eq!(store.shapes()[0].offset, Offset::new(60.0, 10.0));
}

#[test]
fn test_line_to_empty_space_is_discarded() {
    let (store, _) = store_with(&[(ShapeType::Square, 0.0, 0.0)]);
    let before = store.lines();

    assert!(store.start_line(Offset::new(10.0, 10.0), box48()).is_some());
    assert_eq!(store.lines().len(), 1);
    assert!(store.line_in_progress().is_some());

    assert_eq!(store.end_line(Offset::new(400.0, 400.0), box48()), None);
    assert_eq!(store.lines(), before);
    assert!(store.line_in_progress().is_none());
}

#[test]
fn test_line_between_shapes_is_completed() {
    let (store, shapes) = store_with(&[
        (ShapeType::Square, 0.0, 0.0),
        (ShapeType::Circle, 200.0, 0.0),
    ]);

    store.start_line(Offset::new(10.0, 10.0), box48());
    let line = store.end_line(Offset::new(210.0, 10.0), box48()).expect("completed");

    let lines = store.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], line);
    assert_eq!(line.shape1_id, shapes[0].id);
    assert_eq!(line.shape2_id, Some(shapes[1].id));
    assert!(store.snapshot().check_references().is_ok());
}

#[test]
fn test_start_line_on_empty_canvas_creates_nothing() {
    let store = DiagramStore::new();
    assert_eq!(store.start_line(Offset::new(10.0, 10.0), box48()), None);
    assert_eq!(store.end_line(Offset::new(10.0, 10.0), box48()), None);
    assert!(store.lines().is_empty());
}

#[test]
fn test_tool_switch_leaves_diagram_untouched() {
    let (store, _) = store_with(&[(ShapeType::Square, 0.0, 0.0), (ShapeType::Circle, 200.0, 0.0)]);
    store.start_line(Offset::new(10.0, 10.0), box48());
    store.end_line(Offset::new(210.0, 10.0), box48());
    let before = store.snapshot();

    for tool in ToolType::ALL {
        store.select_tool(tool);
        assert_eq!(store.selected_tool(), tool);
    }

    let after = store.snapshot();
    assert_eq!(after.shapes, before.shapes);
    assert_eq!(after.lines, before.lines);
}

#[test]
fn test_observers_receive_snapshots_per_channel() {
    let store = DiagramStore::new();
    let seen: Arc<Mutex<Vec<DiagramEvent>>> = Arc::default();
    let sink = Arc::clone(&seen);
    store.bus().subscribe(
        EventFilter::Categories(vec![EventCategory::Shapes, EventCategory::Lines]),
        move |event| sink.lock().push(event),
    );

    let a = Shape::new(ShapeType::Square, Offset::ZERO);
    store.add_shape(a.clone());
    store.select_tool(ToolType::DrawLine);
    store.start_line(Offset::new(1.0, 1.0), box48());
    store.end_line(Offset::new(900.0, 900.0), box48());

    let seen = seen.lock();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], DiagramEvent::ShapesChanged(vec![a.clone()]));
    match &seen[1] {
        DiagramEvent::LinesChanged(lines) => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].shape1_id, a.id);
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(seen[2], DiagramEvent::LinesChanged(Vec::new()));
}
