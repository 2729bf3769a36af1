use crate::dialogs::NativeDialogs;
use crate::panels;
use crate::session::{DrawingSession, SessionEvents};

/// The eframe shell: owns the drawing session plus the transient UI state
/// (color-picker modal, close confirmation).
pub struct PaintApp {
    session: DrawingSession<NativeDialogs>,
    show_color_picker: bool,
    pending_color: egui::Color32,
    close_confirmed: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: DrawingSession::new(NativeDialogs),
            show_color_picker: false,
            pending_color: egui::Color32::BLACK,
            close_confirmed: false,
        }
    }

    pub(crate) fn session(&self) -> &DrawingSession<NativeDialogs> {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut DrawingSession<NativeDialogs> {
        &mut self.session
    }

    /// Opens the color-picker modal seeded with the active brush color.
    pub(crate) fn open_color_picker(&mut self) {
        self.pending_color = self.session.brush().color();
        self.show_color_picker = true;
    }

    /// The picker edits a scratch color; only OK commits it to the brush,
    /// so cancelling leaves the brush untouched.
    fn color_picker_window(&mut self, ctx: &egui::Context) {
        if !self.show_color_picker {
            return;
        }
        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.pending_color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        self.session.on_color_chosen(self.pending_color);
                        self.show_color_picker = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_color_picker = false;
                    }
                });
            });
    }

    /// Both the Exit button and the window close button land here: the
    /// viewport close is cancelled unless the user confirms it.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if self.close_confirmed || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.session.on_exit_requested() {
            self.close_confirmed = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);
        self.color_picker_window(ctx);
        self.handle_close_request(ctx);
    }
}
