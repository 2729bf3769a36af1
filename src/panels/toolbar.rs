use crate::app::PaintApp;
use crate::brush::Brush;
use crate::session::SessionEvents;

/// Top toolbar: color picker, brush size slider, save/clear/exit actions.
pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Choose Color").clicked() {
                app.open_color_picker();
            }

            ui.separator();

            ui.label("Brush Size:");
            let mut size = app.session().brush().size();
            if ui
                .add(egui::Slider::new(&mut size, Brush::MIN_SIZE..=Brush::MAX_SIZE))
                .changed()
            {
                app.session_mut().on_size_changed(size);
            }

            ui.separator();

            if ui.button("Save").clicked() {
                app.session_mut().on_save();
            }
            if ui.button("Clear").clicked() {
                app.session_mut().on_clear();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Exit").clicked() {
                    // Funnels into the close confirmation in PaintApp.
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    });
}
