use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use egui::{Color32, Pos2};
use paint_box::{DialogService, DrawingSession, SessionEvents};

/// Everything the scripted dialogs were asked to show.
#[derive(Default)]
struct DialogLog {
    confirms: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
}

/// Scripted stand-in for the native dialogs.
struct FakeDialogs {
    save_path: Option<PathBuf>,
    confirm_answer: bool,
    log: Rc<RefCell<DialogLog>>,
}

impl FakeDialogs {
    fn new(save_path: Option<PathBuf>, confirm_answer: bool) -> (Self, Rc<RefCell<DialogLog>>) {
        let log = Rc::new(RefCell::new(DialogLog::default()));
        let dialogs = Self {
            save_path,
            confirm_answer,
            log: Rc::clone(&log),
        };
        (dialogs, log)
    }
}

impl DialogService for FakeDialogs {
    fn prompt_save_path(&mut self) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn confirm(&mut self, _title: &str, message: &str) -> bool {
        self.log.borrow_mut().confirms.push(message.to_owned());
        self.confirm_answer
    }

    fn show_info(&mut self, _title: &str, message: &str) {
        self.log.borrow_mut().infos.push(message.to_owned());
    }

    fn show_error(&mut self, _title: &str, message: &str) {
        self.log.borrow_mut().errors.push(message.to_owned());
    }
}

fn quiet_session() -> DrawingSession<FakeDialogs> {
    let (dialogs, _log) = FakeDialogs::new(None, false);
    DrawingSession::new(dialogs)
}

#[test]
fn drag_paints_one_mark_with_the_active_brush() {
    let mut session = quiet_session();

    session.on_drag(Pos2::new(40.0, 60.0));

    let marks = session.surface().marks();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].center, Pos2::new(40.0, 60.0));
    assert_eq!(marks[0].radius, 5.0);
    assert_eq!(marks[0].color, Color32::BLACK);
}

#[test]
fn color_choice_never_recolors_existing_marks() {
    let mut session = quiet_session();

    session.on_drag(Pos2::new(10.0, 10.0));
    session.on_color_chosen(Color32::RED);
    session.on_drag(Pos2::new(20.0, 10.0));

    let marks = session.surface().marks();
    assert_eq!(marks[0].color, Color32::BLACK);
    assert_eq!(marks[1].color, Color32::RED);
}

#[test]
fn size_change_applies_to_subsequent_marks_only() {
    let mut session = quiet_session();

    session.on_drag(Pos2::new(10.0, 10.0));
    session.on_size_changed(12);
    session.on_drag(Pos2::new(20.0, 10.0));

    let marks = session.surface().marks();
    assert_eq!(marks[0].radius, 5.0);
    assert_eq!(marks[1].radius, 12.0);
    assert_eq!(session.brush().size(), 12);
}

#[test]
fn clear_returns_the_surface_to_blank() {
    let mut session = quiet_session();
    for i in 0..25 {
        session.on_drag(Pos2::new(i as f32 * 4.0, 100.0));
    }
    assert!(!session.surface().is_blank());

    session.on_clear();
    assert!(session.surface().is_blank());
}

#[test]
fn cancelled_save_writes_nothing_and_stays_silent() {
    let (dialogs, log) = FakeDialogs::new(None, false);
    let mut session = DrawingSession::new(dialogs);
    session.on_drag(Pos2::new(50.0, 50.0));

    session.on_save();

    let log = log.borrow();
    assert!(log.infos.is_empty());
    assert!(log.errors.is_empty());
}

#[test]
fn confirmed_save_writes_a_valid_png_and_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let (dialogs, log) = FakeDialogs::new(Some(path.clone()), false);
    let mut session = DrawingSession::new(dialogs);

    // Brush size 10, red, five samples from (100,100) to (150,100).
    session.on_size_changed(10);
    session.on_color_chosen(Color32::RED);
    for i in 0..5 {
        session.on_drag(Pos2::new(100.0 + i as f32 * 12.5, 100.0));
    }

    session.on_save();

    assert_eq!(session.surface().marks().len(), 5);
    {
        let log = log.borrow();
        assert_eq!(
            log.infos,
            vec!["Your drawing has been saved successfully!".to_owned()]
        );
        assert!(log.errors.is_empty());
    }

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (800, 600));
    assert_eq!(*decoded.get_pixel(0, 0), image::Rgba([255, 255, 255, 255]));
    assert_eq!(*decoded.get_pixel(400, 300), image::Rgba([255, 255, 255, 255]));
    for x in [100, 112, 125, 137, 150] {
        assert_eq!(*decoded.get_pixel(x, 100), image::Rgba([255, 0, 0, 255]));
    }
}

#[test]
fn failed_save_reports_the_cause_and_keeps_the_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.png");
    let (dialogs, log) = FakeDialogs::new(Some(path.clone()), false);
    let mut session = DrawingSession::new(dialogs);
    session.on_drag(Pos2::new(50.0, 50.0));

    session.on_save();

    assert!(!path.exists());
    assert_eq!(session.surface().marks().len(), 1);
    let log = log.borrow();
    assert!(log.infos.is_empty());
    assert_eq!(log.errors.len(), 1);
    assert!(log.errors[0].starts_with("An error occurred while saving:"));
}

#[test]
fn declined_exit_changes_nothing() {
    let (dialogs, log) = FakeDialogs::new(None, false);
    let mut session = DrawingSession::new(dialogs);
    session.on_color_chosen(Color32::BLUE);
    session.on_size_changed(7);
    session.on_drag(Pos2::new(30.0, 30.0));

    assert!(!session.on_exit_requested());

    assert_eq!(log.borrow().confirms, vec!["Are you sure you want to exit?".to_owned()]);
    assert_eq!(session.brush().color(), Color32::BLUE);
    assert_eq!(session.brush().size(), 7);
    assert_eq!(session.surface().marks().len(), 1);
}

#[test]
fn confirmed_exit_is_reported_to_the_caller() {
    let (dialogs, _log) = FakeDialogs::new(None, true);
    let mut session = DrawingSession::new(dialogs);
    assert!(session.on_exit_requested());
}
