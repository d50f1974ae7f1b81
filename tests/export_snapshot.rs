use egui::{Color32, ColorImage, pos2};
use sketchpad::export::{export_size, export_snapshot};
use sketchpad::renderer::CANVAS_SIZE;
use sketchpad::{HistoryManager, MarkerColor, Renderer};

#[test]
fn test_export_leaves_history_untouched() {
    let mut history = HistoryManager::new();
    let renderer = Renderer::new();
    renderer.attach(&mut history);

    history.begin_stroke(pos2(10.0, 10.0), 4, MarkerColor::Red);
    history.extend_active_stroke(pos2(60.0, 80.0));
    history.end_gesture();
    history.begin_stamp(pos2(128.0, 128.0), "🍭", 3.0);
    history.begin_stamp(pos2(30.0, 200.0), "🗻", 2.0);
    assert!(history.undo());

    let items = history.items().to_vec();
    let redo_items = history.redo_items().to_vec();
    let frame = renderer.frame().commands().to_vec();

    let side = CANVAS_SIZE as usize;
    let snapshot = ColorImage::new([side, side], Color32::WHITE);
    let png = export_snapshot(&snapshot).unwrap();

    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!([decoded.width(), decoded.height()], export_size());

    assert_eq!(history.items(), items.as_slice());
    assert_eq!(history.redo_items(), redo_items.as_slice());
    assert_eq!(renderer.frame().commands(), frame.as_slice());
    assert!(history.can_redo());
}
