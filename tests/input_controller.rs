use egui::{Rect, pos2, vec2};
use sketchpad::{
    Drawable, HistoryManager, InputController, InputEvent, InputLocation, MarkerColor, ToolState,
};

fn controller() -> InputController {
    // Canvas placed away from the screen origin
    InputController::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(256.0, 256.0)))
}

fn down(controller: &InputController, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: controller.make_location(pos2(x, y)),
    }
}

fn moved(controller: &InputController, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        location: controller.make_location(pos2(x, y)),
    }
}

#[test]
fn test_location_is_canvas_local() {
    let controller = controller();
    assert_eq!(
        controller.make_location(pos2(110.0, 70.0)),
        InputLocation {
            position: pos2(10.0, 20.0),
            is_in_canvas: true,
        }
    );
    assert!(!controller.make_location(pos2(10.0, 10.0)).is_in_canvas);
}

#[test]
fn test_marker_gesture_builds_one_stroke() {
    let controller = controller();
    let mut tools = ToolState::new();
    tools.set_color(MarkerColor::Red);
    tools.set_thickness(5);
    let mut history = HistoryManager::new();

    let events = [
        down(&controller, 100.0, 50.0),
        moved(&controller, 110.0, 60.0),
        moved(&controller, 120.0, 55.0),
        InputEvent::PointerUp,
        // Moves after release do nothing
        moved(&controller, 130.0, 70.0),
    ];
    controller.handle_events(&events, &tools, &mut history);

    assert_eq!(history.items().len(), 1);
    let stroke = history.items()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[pos2(0.0, 0.0), pos2(10.0, 10.0), pos2(20.0, 5.0)]
    );
    assert_eq!(stroke.thickness(), 5);
    assert_eq!(stroke.color(), MarkerColor::Red);
    assert!(!history.is_gesture_active());
}

#[test]
fn test_tool_change_mid_gesture_keeps_stroke_style() {
    let controller = controller();
    let mut tools = ToolState::new();
    let mut history = HistoryManager::new();

    controller.handle_event(&down(&controller, 150.0, 150.0), &tools, &mut history);
    tools.set_color(MarkerColor::Purple);
    tools.set_thickness(9);
    controller.handle_event(&moved(&controller, 160.0, 160.0), &tools, &mut history);
    controller.handle_event(&InputEvent::PointerUp, &tools, &mut history);

    let stroke = history.items()[0].as_stroke().unwrap();
    assert_eq!(stroke.color(), MarkerColor::Black);
    assert_eq!(stroke.thickness(), 2);
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn test_sticker_mode_stamps_without_gesture() {
    let controller = controller();
    let mut tools = ToolState::new();
    tools.set_thickness(4);
    tools.set_sticker_symbol("🍭").unwrap();
    let mut history = HistoryManager::new();

    controller.handle_events(
        &[
            down(&controller, 150.0, 100.0),
            moved(&controller, 170.0, 120.0),
            InputEvent::PointerUp,
        ],
        &tools,
        &mut history,
    );

    assert_eq!(history.items().len(), 1);
    match &history.items()[0] {
        Drawable::Stamp(stamp) => {
            assert_eq!(stamp.symbol(), "🍭");
            assert_eq!(stamp.position(), pos2(50.0, 50.0));
            assert_eq!(stamp.size(), 4.0);
        }
        other => panic!("expected stamp, got {other:?}"),
    }
    assert!(!history.is_gesture_active());
}

#[test]
fn test_outside_canvas_is_ignored() {
    let controller = controller();
    let tools = ToolState::new();
    let mut history = HistoryManager::new();

    controller.handle_event(&down(&controller, 5.0, 5.0), &tools, &mut history);
    assert!(history.items().is_empty());

    // Moves that leave the canvas are dropped but the gesture goes on
    controller.handle_events(
        &[
            down(&controller, 110.0, 60.0),
            moved(&controller, 20.0, 20.0),
            moved(&controller, 120.0, 70.0),
            InputEvent::PointerUp,
        ],
        &tools,
        &mut history,
    );
    let stroke = history.items()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(10.0, 10.0), pos2(20.0, 20.0)]);
}

#[test]
fn test_new_gesture_clears_redo() {
    let controller = controller();
    let tools = ToolState::new();
    let mut history = HistoryManager::new();

    controller.handle_events(
        &[down(&controller, 110.0, 60.0), InputEvent::PointerUp],
        &tools,
        &mut history,
    );
    history.undo();
    assert_eq!(history.redo_items().len(), 1);

    controller.handle_event(&down(&controller, 120.0, 60.0), &tools, &mut history);
    assert!(history.redo_items().is_empty());
}

#[test]
fn test_process_input_keeps_arrival_order() {
    let controller = InputController::new(Rect::from_min_size(pos2(0.0, 0.0), vec2(256.0, 256.0)));
    let ctx = egui::Context::default();

    let mut raw = egui::RawInput::default();
    raw.events = vec![
        egui::Event::PointerButton {
            pos: pos2(10.0, 10.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
        egui::Event::PointerMoved(pos2(20.0, 20.0)),
        egui::Event::PointerButton {
            pos: pos2(20.0, 20.0),
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
        egui::Event::PointerButton {
            pos: pos2(20.0, 20.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        },
    ];

    let mut events = Vec::new();
    let _ = ctx.run(raw, |ctx| events = controller.process_input(ctx));

    assert_eq!(
        events,
        vec![
            InputEvent::PointerDown {
                location: InputLocation {
                    position: pos2(10.0, 10.0),
                    is_in_canvas: true,
                },
            },
            InputEvent::PointerMove {
                location: InputLocation {
                    position: pos2(20.0, 20.0),
                    is_in_canvas: true,
                },
            },
            InputEvent::PointerUp,
        ]
    );
}
