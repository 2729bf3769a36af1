use std::path::Path;

use egui::{Color32, Pos2};

use crate::brush::Brush;
use crate::dialogs::DialogService;
use crate::export::{self, SaveError};
use crate::render;
use crate::surface::{Mark, Surface};

/// Contract between the UI widgets and the session. Widgets translate raw
/// toolkit events into these calls, so anything implementing the trait can
/// be driven without a real GUI.
pub trait SessionEvents {
    /// One pointer-motion sample with the primary button held, in
    /// surface-local coordinates.
    fn on_drag(&mut self, pos: Pos2);

    /// The user confirmed a color in the picker. Never called on cancel.
    fn on_color_chosen(&mut self, color: Color32);

    /// The size slider moved. The slider enforces the [1, 20] range.
    fn on_size_changed(&mut self, size: u32);

    /// The user asked to save the drawing.
    fn on_save(&mut self);

    /// The user asked to clear the canvas.
    fn on_clear(&mut self);

    /// The user asked to leave; returns true when the exit is confirmed.
    fn on_exit_requested(&mut self) -> bool;
}

/// Owns the brush, the surface, and the dialog collaborator.
///
/// There is no mode switching: the handlers below are independent, and the
/// only state that outlives a call is the brush and the surface contents.
pub struct DrawingSession<D> {
    brush: Brush,
    surface: Surface,
    dialogs: D,
}

impl<D: DialogService> DrawingSession<D> {
    pub fn new(dialogs: D) -> Self {
        Self {
            brush: Brush::default(),
            surface: Surface::default(),
            dialogs,
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    fn save_to(&self, path: &Path) -> Result<(), SaveError> {
        let image = render::render_to_image(&self.surface);
        export::write_png(&image, path)
    }
}

impl<D: DialogService> SessionEvents for DrawingSession<D> {
    fn on_drag(&mut self, pos: Pos2) {
        // One solid disk per motion sample; overlapping disks form the
        // stroke. No interpolation between samples.
        self.surface.add_mark(Mark {
            center: pos,
            radius: self.brush.size() as f32,
            color: self.brush.color(),
        });
    }

    fn on_color_chosen(&mut self, color: Color32) {
        self.brush.set_color(color);
    }

    fn on_size_changed(&mut self, size: u32) {
        self.brush.set_size(size);
    }

    fn on_save(&mut self) {
        // Cancelling the dialog is a no-op, not an error.
        let Some(path) = self.dialogs.prompt_save_path() else {
            return;
        };
        match self.save_to(&path) {
            Ok(()) => {
                log::info!("drawing saved to {}", path.display());
                self.dialogs
                    .show_info("Success", "Your drawing has been saved successfully!");
            }
            Err(err) => {
                log::error!("saving to {} failed: {err}", path.display());
                self.dialogs
                    .show_error("Error", &format!("An error occurred while saving: {err}"));
            }
        }
    }

    fn on_clear(&mut self) {
        log::info!("clearing {} marks", self.surface.marks().len());
        self.surface.clear();
    }

    fn on_exit_requested(&mut self) -> bool {
        self.dialogs.confirm("Exit", "Are you sure you want to exit?")
    }
}
