use egui::{Pos2, Sense};

use crate::app::PaintApp;
use crate::session::SessionEvents;
use crate::surface;

/// Central canvas: draws the surface and feeds primary-button drags back
/// into the session as surface-local positions, one sample per frame.
pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(app.session().surface().size(), Sense::drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);

        painter.rect_filled(rect, 0.0, surface::BACKGROUND);
        for mark in app.session().surface().marks() {
            painter.circle_filled(rect.min + mark.center.to_vec2(), mark.radius, mark.color);
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                app.session_mut().on_drag(Pos2::new(local.x, local.y));
            }
        }
    });
}
