use dragdrop_core::Offset;
use dragdrop_designer::{Gesture, GestureDetector, GesturePhase, PointerEvent};
use proptest::prelude::*;

fn feed(detector: &mut GestureDetector, events: &[PointerEvent]) -> Vec<Gesture> {
    events.iter().flat_map(|e| detector.handle(*e)).collect()
}

proptest! {
    #[test]
    fn wiggle_within_slop_is_a_single_tap(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        moves in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 0..10),
    ) {
        let origin = Offset::new(x, y);
        let mut events = vec![PointerEvent::Down(origin)];
        events.extend(
            moves
                .iter()
                .map(|(dx, dy)| PointerEvent::Move(origin + Offset::new(*dx, *dy))),
        );
        events.push(PointerEvent::Up);

        let mut detector = GestureDetector::new(8.0);
        prop_assert_eq!(feed(&mut detector, &events), vec![Gesture::Tap(origin)]);
        prop_assert_eq!(detector.phase(), GesturePhase::Idle);
    }

    #[test]
    fn drag_sessions_are_bracketed(
        dx in 9.0f64..500.0,
        steps in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..10),
        cancel in any::<bool>(),
    ) {
        let mut events = vec![
            PointerEvent::Down(Offset::ZERO),
            PointerEvent::Move(Offset::new(dx, 0.0)),
        ];
        events.extend(steps.iter().map(|(x, y)| PointerEvent::Move(Offset::new(*x, *y))));
        events.push(if cancel { PointerEvent::Cancel } else { PointerEvent::Up });

        let mut detector = GestureDetector::new(8.0);
        let gestures = feed(&mut detector, &events);

        prop_assert_eq!(gestures.first(), Some(&Gesture::DragStart(Offset::ZERO)));
        prop_assert_eq!(gestures.len(), steps.len() + 3);
        let last_point = steps
            .last()
            .map(|(x, y)| Offset::new(*x, *y))
            .unwrap_or(Offset::new(dx, 0.0));
        let expected_end = if cancel {
            Gesture::DragCancel(last_point)
        } else {
            Gesture::DragEnd(last_point)
        };
        prop_assert_eq!(gestures.last(), Some(&expected_end));
        prop_assert!(!gestures.iter().any(|g| matches!(g, Gesture::Tap(_))));
    }
}

#[test]
fn test_detector_survives_back_to_back_sessions() {
    let mut detector = GestureDetector::new(8.0);
    let first = feed(
        &mut detector,
        &[PointerEvent::Down(Offset::ZERO), PointerEvent::Up],
    );
    let second = feed(
        &mut detector,
        &[
            PointerEvent::Down(Offset::new(50.0, 50.0)),
            PointerEvent::Move(Offset::new(80.0, 50.0)),
            PointerEvent::Up,
        ],
    );
    assert_eq!(first, vec![Gesture::Tap(Offset::ZERO)]);
    assert_eq!(
        second,
        vec![
            Gesture::DragStart(Offset::new(50.0, 50.0)),
            Gesture::Drag(Offset::new(80.0, 50.0)),
            Gesture::DragEnd(Offset::new(80.0, 50.0)),
        ]
    );
}
