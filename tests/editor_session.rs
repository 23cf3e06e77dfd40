use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use scc_boundary::editor::{
    BoundaryEditor, DialogEvent, EditorOptions, EditorState, Overlay, RecordingSurface,
    ScriptedDialogs, SurfaceEvent,
};
use scc_boundary::form::BoundarySubmission;
use scc_boundary::geometry::wkt_to_points;
use scc_boundary::{BoundaryData, BoundaryError, BoundaryPoint};

type Editor = BoundaryEditor<RecordingSurface, ScriptedDialogs>;
type Emitted = Rc<RefCell<Vec<Option<BoundaryData>>>>;

fn mount_with(options: EditorOptions, confirm: bool) -> (Editor, Emitted) {
    let emitted: Emitted = Rc::default();
    let sink = Rc::clone(&emitted);
    let editor = BoundaryEditor::mount(
        options,
        RecordingSurface::default(),
        ScriptedDialogs::answering(confirm),
        move |data| sink.borrow_mut().push(data.cloned()),
    );
    (editor, emitted)
}

fn seoul() -> BoundaryPoint {
    BoundaryPoint::new(37.5665, 126.978)
}

#[test]
fn draws_seoul_boundary_and_submits_it() {
    let (mut editor, emitted) = mount_with(EditorOptions::new(seoul()), true);

    assert!(editor.start_drawing());
    editor.map_click(BoundaryPoint::new(37.5665, 126.9780));
    editor.map_click(BoundaryPoint::new(37.5670, 126.9790));
    editor.map_click(BoundaryPoint::new(37.5660, 126.9795));

    let data = editor.complete().unwrap();
    assert_eq!(
        data.wkt(),
        "POLYGON((126.978 37.5665, 126.979 37.567, 126.9795 37.566, 126.978 37.5665))"
    );
    assert_relative_eq!(data.center().lat, 37.5665, epsilon = 1e-9);
    assert_relative_eq!(data.center().lng, 126.978_833, epsilon = 1e-6);
    assert_eq!(editor.state(), EditorState::Idle);

    // The parent saw the same boundary the editor completed with
    assert_eq!(emitted.borrow().last().cloned().flatten(), Some(data.clone()));

    let submission = BoundarySubmission::from_boundary(editor.boundary()).unwrap();
    assert_eq!(submission.boundary_wkt, data.wkt());
    assert_eq!(wkt_to_points(&submission.boundary_wkt).unwrap(), data.points());
}

#[test]
fn overlays_follow_point_count() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), true);
    editor.start_drawing();

    editor.map_click(BoundaryPoint::new(0.0, 0.0));
    assert_eq!(editor.surface().live_overlays().count(), 1);

    editor.map_click(BoundaryPoint::new(0.0, 1.0));
    let overlays: Vec<&Overlay> = editor.surface().live_overlays().collect();
    assert_eq!(overlays.len(), 3);
    assert!(overlays.iter().any(|o| matches!(o, Overlay::Polyline { .. })));
    assert!(!overlays.iter().any(|o| matches!(o, Overlay::Polygon { .. })));

    editor.map_click(BoundaryPoint::new(1.0, 1.0));
    let overlays: Vec<&Overlay> = editor.surface().live_overlays().collect();
    assert_eq!(overlays.len(), 4);
    assert!(overlays.iter().any(|o| matches!(o, Overlay::Polygon { ring } if ring.len() == 3)));
    assert!(!overlays.iter().any(|o| matches!(o, Overlay::Polyline { .. })));
    assert_eq!(editor.surface().live_markers(), 3);

    editor.undo();
    assert_eq!(editor.surface().live_overlays().count(), 3);
    assert!(editor.boundary().is_none());
}

#[test]
fn seeds_points_from_initial_boundary() {
    let options = EditorOptions::new(seoul())
        .with_initial_boundary("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))");
    let (editor, emitted) = mount_with(options, true);

    assert_eq!(editor.points().len(), 4);
    assert_eq!(editor.state(), EditorState::Idle);
    let first = emitted.borrow()[0].clone().unwrap();
    assert_eq!(first.center(), BoundaryPoint::new(0.5, 0.5));
    assert_eq!(editor.surface().live_markers(), 4);
}

#[test]
fn malformed_initial_boundary_falls_back_to_empty() {
    let options = EditorOptions::new(seoul()).with_initial_boundary("POLYGON((126.97 oops))");
    let (mut editor, emitted) = mount_with(options, true);

    assert!(editor.points().is_empty());
    assert_eq!(emitted.borrow().as_slice(), &[None]);
    assert!(matches!(
        editor.dialogs().log(),
        [DialogEvent::Error(_)]
    ));

    // Still usable afterwards
    assert!(editor.start_drawing());
    assert!(editor.map_click(seoul()));
}

#[test]
fn overflowing_initial_boundary_falls_back_to_empty() {
    let options =
        EditorOptions::new(seoul()).with_initial_boundary("POLYGON((1e400 0, 1 0, 1 1, 1e400 0))");
    let (editor, emitted) = mount_with(options, true);

    assert!(editor.points().is_empty());
    assert!(editor.boundary().is_none());
    assert_eq!(emitted.borrow().as_slice(), &[None]);
    assert!(matches!(
        editor.dialogs().log(),
        [DialogEvent::Error(_)]
    ));
}

#[test]
fn declined_restart_keeps_existing_boundary() {
    let options = EditorOptions::new(seoul())
        .with_initial_boundary("POLYGON((0 0, 1 0, 1 1, 0 0))");
    let (mut editor, emitted) = mount_with(options, false);
    let before = editor.boundary().cloned();

    assert!(!editor.start_drawing());
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.boundary().cloned(), before);
    assert_eq!(emitted.borrow().len(), 1);
    assert!(matches!(
        editor.dialogs().log(),
        [DialogEvent::Confirm { answer: false, .. }]
    ));
}

#[test]
fn accepted_restart_discards_points() {
    let options = EditorOptions::new(seoul())
        .with_initial_boundary("POLYGON((0 0, 1 0, 1 1, 0 0))");
    let (mut editor, emitted) = mount_with(options, true);

    assert!(editor.start_drawing());
    assert_eq!(editor.state(), EditorState::Drawing);
    assert!(editor.points().is_empty());
    assert_eq!(emitted.borrow().last().cloned(), Some(None));
    assert_eq!(editor.surface().live_overlays().count(), 0);
}

#[test]
fn clear_on_empty_needs_no_confirmation() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), false);
    editor.start_drawing();

    assert!(editor.clear());
    assert_eq!(editor.state(), EditorState::Idle);
    assert!(editor.dialogs().log().is_empty());
}

#[test]
fn complete_requires_three_points() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), true);

    assert_eq!(
        editor.complete(),
        Err(BoundaryError::TooFewPoints {
            required: 3,
            actual: 0
        })
    );

    editor.start_drawing();
    for i in 0..3 {
        editor.map_click(BoundaryPoint::new(i as f64, (i * i) as f64));
    }
    assert!(editor.complete().is_ok());
    assert!(!editor.map_click(seoul()), "clicks stop after completing");
}

#[test]
fn cancel_keeps_points() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), true);
    editor.start_drawing();
    editor.map_click(seoul());
    editor.cancel();

    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.points(), &[seoul()]);
}

#[test]
fn consecutive_duplicate_points_are_kept() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), true);
    editor.start_drawing();
    editor.map_click(seoul());
    editor.map_click(seoul());
    editor.map_click(BoundaryPoint::new(37.0, 127.0));

    assert_eq!(editor.points().len(), 3);
    assert!(editor.boundary().is_some());
}

#[test]
fn unmount_tears_down_map() {
    let (mut editor, _) = mount_with(EditorOptions::new(seoul()), true);
    editor.start_drawing();
    editor.map_click(BoundaryPoint::new(0.0, 0.0));
    editor.map_click(BoundaryPoint::new(0.0, 1.0));

    let (surface, _) = editor.unmount();

    assert!(!surface.is_map_open());
    assert!(!surface.is_listening());
    assert_eq!(surface.live_overlays().count(), 0);
    assert!(matches!(
        surface.events().first(),
        Some(SurfaceEvent::MapCreated { zoom: 17, .. })
    ));
    assert_eq!(surface.events().last(), Some(&SurfaceEvent::MapDestroyed));
}
