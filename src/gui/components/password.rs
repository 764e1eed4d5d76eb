// src/gui/components/password.rs
//
// Fail-closed entry screen. Wrong attempts re-prompt without lockout;
// nothing else renders until the gate opens.

use eframe::egui;

use crate::config::consts::PASSWORD_ENV;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("OTIS Dashboard");
        ui.add_space(8.0);

        if app.gate.is_misconfigured() {
            ui.colored_label(
                egui::Color32::RED,
                format!("No password configured. Set {} and restart.", PASSWORD_ENV),
            );
            return;
        }

        ui.label("Password");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.password_input).password(true),
        );
        let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if entered || ui.button("Submit").clicked() {
            app.gate.submit(&mut app.password_input);
        }

        if app.gate.was_rejected() {
            ui.colored_label(egui::Color32::RED, "😕 Password incorrect");
        }
    });
}
